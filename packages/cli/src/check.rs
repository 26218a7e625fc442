use {
	crate::{Cli, config::Format},
	std::io::{BufRead as _, Write as _},
	sver_error::{self as sver, error},
	sver_semver::ParseError,
};

/// Check whether versions are valid.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The output format.
	#[arg(long)]
	pub format: Option<Format>,

	/// Print nothing and report the result only through the exit code.
	#[arg(long, short)]
	pub quiet: bool,

	/// The versions to check. If none are given, each line of stdin is checked.
	#[arg(index = 1)]
	pub versions: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize)]
struct Output {
	version: String,
	valid: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	kind: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	message: Option<String>,
}

impl Cli {
	pub fn command_check(&mut self, args: Args) -> sver::Result<()> {
		let versions = if args.versions.is_empty() {
			std::io::stdin()
				.lock()
				.lines()
				.collect::<std::io::Result<Vec<_>>>()
				.map_err(|source| error!(!source, "failed to read stdin"))?
		} else {
			args.versions
		};

		let outputs = versions
			.into_iter()
			.map(|version| {
				let result = sver_semver::parse(&version);
				if let Err(error) = &result {
					tracing::debug!(%version, %error, "invalid version");
				}
				Output::new(version, result.err())
			})
			.collect::<Vec<_>>();
		let invalid = outputs.iter().filter(|output| !output.valid).count();
		tracing::info!(total = outputs.len(), invalid, "checked the versions");
		if invalid > 0 {
			self.exit = Some(1);
		}
		if args.quiet {
			return Ok(());
		}

		let mut stdout = std::io::stdout().lock();
		match self.format(args.format) {
			Format::Json => {
				let json = serde_json::to_string(&outputs)
					.map_err(|source| error!(!source, "failed to serialize the output"))?;
				writeln!(stdout, "{json}")
					.map_err(|source| error!(!source, "failed to write the output"))?;
			},
			Format::Text => {
				for output in &outputs {
					writeln!(stdout, "{output}")
						.map_err(|source| error!(!source, "failed to write the output"))?;
				}
			},
		}
		stdout
			.flush()
			.map_err(|source| error!(!source, "failed to flush stdout"))?;

		Ok(())
	}
}

impl Output {
	fn new(version: String, error: Option<ParseError>) -> Self {
		Self {
			version,
			valid: error.is_none(),
			kind: error.as_ref().map(|error| error.kind().to_string()),
			message: error.as_ref().map(ToString::to_string),
		}
	}
}

impl std::fmt::Display for Output {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}: ", self.version)?;
		match (&self.kind, &self.message) {
			(Some(kind), Some(message)) => write!(f, "invalid ({kind}): {message}"),
			_ => write!(f, "valid"),
		}
	}
}
