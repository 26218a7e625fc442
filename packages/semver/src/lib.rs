pub use self::error::{Field, Kind, Location, Malformation, ParseError, Section};

pub mod error;
mod identifier;
mod numeric;
mod split;

/// A semantic version.
///
/// A `Version` can only be obtained by parsing. The pre-release and build metadata are kept as the dot-separated text that appeared in the input, without their delimiters.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Version {
	major: u64,
	minor: u64,
	patch: u64,
	prerelease: Option<String>,
	build: Option<String>,
}

/// Parse a semantic version.
pub fn parse(text: &str) -> Result<Version, ParseError> {
	let parts = self::split::split(text)?;
	let (major, minor, patch) = self::numeric::core(parts.core)?;
	let prerelease = parts
		.prerelease
		.map(|prerelease| self::identifier::list(Section::Prerelease, prerelease))
		.transpose()?;
	let build = parts
		.build
		.map(|build| self::identifier::list(Section::Build, build))
		.transpose()?;
	Ok(Version {
		major,
		minor,
		patch,
		prerelease: prerelease.map(ToOwned::to_owned),
		build: build.map(ToOwned::to_owned),
	})
}

impl Version {
	pub fn parse(text: &str) -> Result<Self, ParseError> {
		parse(text)
	}

	#[must_use]
	pub fn major(&self) -> u64 {
		self.major
	}

	#[must_use]
	pub fn minor(&self) -> u64 {
		self.minor
	}

	#[must_use]
	pub fn patch(&self) -> u64 {
		self.patch
	}

	#[must_use]
	pub fn prerelease(&self) -> Option<&str> {
		self.prerelease.as_deref()
	}

	#[must_use]
	pub fn build(&self) -> Option<&str> {
		self.build.as_deref()
	}

	#[must_use]
	pub fn is_prerelease(&self) -> bool {
		self.prerelease.is_some()
	}

	/// Iterate over the pre-release identifiers. The iterator is empty if there is no pre-release.
	pub fn prerelease_identifiers(&self) -> impl Iterator<Item = &str> {
		self.prerelease.iter().flat_map(|prerelease| prerelease.split('.'))
	}

	/// Iterate over the build metadata identifiers. The iterator is empty if there is no build metadata.
	pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
		self.build.iter().flat_map(|build| build.split('.'))
	}
}

impl std::fmt::Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
		if let Some(prerelease) = &self.prerelease {
			write!(f, "-{prerelease}")?;
		}
		if let Some(build) = &self.build {
			write!(f, "+{build}")?;
		}
		Ok(())
	}
}

impl std::str::FromStr for Version {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
