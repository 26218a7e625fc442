use crate::{Malformation, ParseError};

/// A version string split at its delimiters, before any component is validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Parts<'a> {
	pub core: &'a str,
	pub prerelease: Option<&'a str>,
	pub build: Option<&'a str>,
}

/// Split a version string into its core, pre-release, and build parts.
///
/// Build metadata is everything after the first `+`, so a `-` inside it is never a delimiter. Before the `+`, the pre-release begins at the first `-` that follows a core character. A `-` at the start of the input or right after a `.` is left in the core, where it is rejected as a sign.
pub(crate) fn split(text: &str) -> Result<Parts<'_>, ParseError> {
	if text.is_empty() {
		return Err(ParseError::MalformedInput {
			reason: Malformation::Empty,
		});
	}

	let (head, build) = match text.split_once('+') {
		Some((head, build)) => (head, Some(build)),
		None => (text, None),
	};
	if build.is_some_and(|build| build.contains('+')) {
		return Err(ParseError::MalformedInput {
			reason: Malformation::RepeatedBuildDelimiter,
		});
	}

	// The delimiters are ASCII, so byte positions are always char boundaries.
	let bytes = head.as_bytes();
	let delimiter = (1..bytes.len()).find(|&i| bytes[i] == b'-' && bytes[i - 1] != b'.');
	let (core, prerelease) = match delimiter {
		Some(i) => (&head[..i], Some(&head[i + 1..])),
		None => (head, None),
	};

	Ok(Parts {
		core,
		prerelease,
		build,
	})
}
