use {
	clap::Parser as _,
	std::path::PathBuf,
	sver_error::{self as sver, error},
	tracing_subscriber::prelude::*,
};

mod check;
mod config;
mod error;
mod parse;

pub use self::config::Config;

pub struct Cli {
	config: Option<Config>,
	exit: Option<u8>,
}

#[derive(Clone, Debug, clap::Parser)]
#[command(
	about = "Parse and validate semantic versions.",
	arg_required_else_help = true,
	disable_help_subcommand = true,
	name = "sver",
	version = version(),
)]
struct Args {
	#[command(subcommand)]
	command: Command,

	/// The path to the config file.
	#[arg(env = "SVER_CONFIG", long, short)]
	config: Option<PathBuf>,

	/// Override the tracing filter.
	#[arg(env = "SVER_TRACING", long)]
	tracing: Option<String>,
}

fn version() -> String {
	let mut version = env!("CARGO_PKG_VERSION").to_owned();
	if let Some(commit) = option_env!("SVER_COMMIT_HASH") {
		version.push('+');
		version.push_str(commit);
	}
	version
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
	Check(self::check::Args),

	Parse(self::parse::Args),
}

fn main() -> std::process::ExitCode {
	// Parse the args.
	let args = Args::parse();

	// Read the config.
	let config = match Cli::read_config(args.config.clone()) {
		Ok(config) => config,
		Err(error) => {
			Cli::print_error(None, &error);
			return std::process::ExitCode::FAILURE;
		},
	};

	// Initialize tracing.
	if let Err(error) = Cli::initialize_tracing(config.as_ref(), args.tracing.as_ref()) {
		Cli::print_error(config.as_ref(), &error);
		return std::process::ExitCode::FAILURE;
	}

	// Run the command.
	let mut cli = Cli { config, exit: None };
	let result = match args.command {
		Command::Check(args) => cli.command_check(args),
		Command::Parse(args) => cli.command_parse(args),
	};
	if let Err(error) = result {
		Cli::print_error(cli.config.as_ref(), &error);
		return std::process::ExitCode::FAILURE;
	}
	cli.exit.unwrap_or(0).into()
}

impl Cli {
	fn read_config(path: Option<PathBuf>) -> sver::Result<Option<Config>> {
		let path = match path {
			Some(path) => path,
			None => {
				let Some(home) = std::env::var_os("HOME") else {
					return Ok(None);
				};
				PathBuf::from(home).join(".config/sver/config.json")
			},
		};
		let config = match std::fs::read_to_string(&path) {
			Ok(config) => config,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				return Ok(None);
			},
			Err(source) => {
				return Err(
					error!(!source, %path = path.display(), "failed to read the config file"),
				);
			},
		};
		let config = serde_json::from_str(&config).map_err(
			|source| error!(!source, %path = path.display(), "failed to deserialize the config"),
		)?;
		Ok(Some(config))
	}

	/// Initialize tracing.
	fn initialize_tracing(config: Option<&Config>, filter: Option<&String>) -> sver::Result<()> {
		let config_tracing = config.and_then(|config| config.tracing.as_ref());
		let output_layer = if filter.is_some() || config_tracing.is_some() {
			let filter_string = filter
				.or(config_tracing.map(|tracing| &tracing.filter))
				.cloned()
				.unwrap_or_default();
			let filter = tracing_subscriber::filter::EnvFilter::try_new(&filter_string)
				.map_err(|source| error!(!source, %filter = filter_string, "invalid tracing filter"))?;
			let format = config_tracing
				.and_then(|tracing| tracing.format)
				.unwrap_or_default();
			let output_layer = match format {
				self::config::TracingFormat::Json => tracing_subscriber::fmt::layer()
					.with_span_events(tracing_subscriber::fmt::format::FmtSpan::FULL)
					.with_writer(std::io::stderr)
					.json()
					.boxed(),
				self::config::TracingFormat::Pretty => tracing_tree::HierarchicalLayer::new(2)
					.with_bracketed_fields(true)
					.with_span_retrace(true)
					.boxed(),
			};
			Some(output_layer.with_filter(filter))
		} else {
			None
		};
		tracing_subscriber::registry().with(output_layer).init();
		std::panic::set_hook(Box::new(|info| {
			let payload = info.payload_as_str();
			let location = info.location().map(ToString::to_string);
			let backtrace = std::backtrace::Backtrace::force_capture();
			tracing::error!(payload, location, %backtrace, "panic");
		}));
		Ok(())
	}

	fn format(&self, format: Option<self::config::Format>) -> self::config::Format {
		format
			.or(self.config.as_ref().and_then(|config| config.format))
			.unwrap_or_default()
	}
}
