use {
	crate::{Cli, config::Format},
	crossterm::tty::IsTty as _,
	std::io::Write as _,
	sver_error::{self as sver, error},
	sver_semver::Version,
};

/// Parse versions and print their components.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// The output format.
	#[arg(long)]
	pub format: Option<Format>,

	/// Whether to pretty print JSON output.
	#[arg(long)]
	pub pretty: bool,

	/// The versions to parse.
	#[arg(index = 1, required = true)]
	pub versions: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize)]
struct Output {
	major: u64,
	minor: u64,
	patch: u64,
	prerelease: Option<String>,
	build: Option<String>,
}

impl Cli {
	pub fn command_parse(&self, args: Args) -> sver::Result<()> {
		let versions = args
			.versions
			.iter()
			.map(|version| {
				tracing::debug!(%version, "parsing");
				let parsed = sver_semver::parse(version)
					.map_err(|source| error!(!source, %version, "failed to parse the version"))?;
				tracing::trace!(?parsed, "parsed");
				Ok::<_, sver::Error>(parsed)
			})
			.collect::<sver::Result<Vec<_>>>()?;

		let mut stdout = std::io::stdout().lock();
		match self.format(args.format) {
			Format::Json => {
				let outputs = versions.iter().map(Output::from).collect::<Vec<_>>();
				let pretty = args.pretty || stdout.is_tty();
				let json = match (outputs.as_slice(), pretty) {
					([output], false) => serde_json::to_string(output),
					([output], true) => serde_json::to_string_pretty(output),
					(outputs, false) => serde_json::to_string(outputs),
					(outputs, true) => serde_json::to_string_pretty(outputs),
				}
				.map_err(|source| error!(!source, "failed to serialize the output"))?;
				writeln!(stdout, "{json}")
					.map_err(|source| error!(!source, "failed to write the output"))?;
			},
			Format::Text => {
				for (i, version) in versions.iter().enumerate() {
					if i > 0 {
						writeln!(stdout)
							.map_err(|source| error!(!source, "failed to write the output"))?;
					}
					write!(stdout, "{}", text(version))
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

fn text(version: &Version) -> String {
	let mut text = format!(
		"version = {version}\nmajor = {}\nminor = {}\npatch = {}\n",
		version.major(),
		version.minor(),
		version.patch(),
	);
	if let Some(prerelease) = version.prerelease() {
		text.push_str(&format!("prerelease = {prerelease}\n"));
	}
	if let Some(build) = version.build() {
		text.push_str(&format!("build = {build}\n"));
	}
	text
}

impl From<&Version> for Output {
	fn from(value: &Version) -> Self {
		Self {
			major: value.major(),
			minor: value.minor(),
			patch: value.patch(),
			prerelease: value.prerelease().map(ToOwned::to_owned),
			build: value.build().map(ToOwned::to_owned),
		}
	}
}
