/// An error that occurred while parsing a version.
#[derive(
	Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ParseError {
	/// The version core does not have exactly three non-empty components.
	#[display("expected the version core to have 3 components but found {count}")]
	InvalidCoreArity { count: usize },

	/// A numeric component has a leading zero.
	#[display("the {location} has a leading zero")]
	LeadingZero { location: Location },

	/// A version core component contains a character other than a digit.
	#[display("the {field} version {segment:?} is not a number")]
	NonNumericCore { field: Field, segment: String },

	/// A version core component does not fit in a `u64`.
	#[display("the {field} version {segment} is too large")]
	NumericOverflow { field: Field, segment: String },

	/// A pre-release or build identifier is empty.
	#[display("the {section} identifier at index {index} is empty")]
	EmptyIdentifier { section: Section, index: usize },

	/// A pre-release or build identifier contains a character outside `[0-9A-Za-z-]`.
	#[display(
		"the {section} identifier {identifier:?} at index {index} contains the invalid character {character:?}"
	)]
	InvalidIdentifierChar {
		section: Section,
		index: usize,
		identifier: String,
		character: char,
	},

	/// The delimiters are not structured as a version.
	#[display("malformed input: {reason}")]
	MalformedInput { reason: Malformation },
}

/// The kind of a [`ParseError`], without its details.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Kind {
	#[display("invalid_core_arity")]
	InvalidCoreArity,
	#[display("leading_zero")]
	LeadingZero,
	#[display("non_numeric_core")]
	NonNumericCore,
	#[display("numeric_overflow")]
	NumericOverflow,
	#[display("empty_identifier")]
	EmptyIdentifier,
	#[display("invalid_identifier_char")]
	InvalidIdentifierChar,
	#[display("malformed_input")]
	MalformedInput,
}

/// A component of the version core.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Field {
	#[display("major")]
	Major,
	#[display("minor")]
	Minor,
	#[display("patch")]
	Patch,
}

/// One of the two identifier lists that may follow the version core.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Section {
	#[display("pre-release")]
	Prerelease,
	#[display("build metadata")]
	Build,
}

/// Where a leading zero was found.
#[derive(Clone, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Location {
	#[display("{_0} version")]
	Core(Field),
	#[display("pre-release identifier {identifier:?} at index {index}")]
	Prerelease { index: usize, identifier: String },
}

/// Why the input could not be split into a version core and suffixes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Malformation {
	#[display("the input is empty")]
	Empty,
	#[display("the build metadata contains a second '+'")]
	RepeatedBuildDelimiter,
}

impl ParseError {
	#[must_use]
	pub fn kind(&self) -> Kind {
		match self {
			Self::InvalidCoreArity { .. } => Kind::InvalidCoreArity,
			Self::LeadingZero { .. } => Kind::LeadingZero,
			Self::NonNumericCore { .. } => Kind::NonNumericCore,
			Self::NumericOverflow { .. } => Kind::NumericOverflow,
			Self::EmptyIdentifier { .. } => Kind::EmptyIdentifier,
			Self::InvalidIdentifierChar { .. } => Kind::InvalidIdentifierChar,
			Self::MalformedInput { .. } => Kind::MalformedInput,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		let error = ParseError::InvalidCoreArity { count: 2 };
		assert_eq!(
			error.to_string(),
			"expected the version core to have 3 components but found 2"
		);

		let error = ParseError::LeadingZero {
			location: Location::Core(Field::Minor),
		};
		assert_eq!(error.to_string(), "the minor version has a leading zero");

		let error = ParseError::LeadingZero {
			location: Location::Prerelease {
				index: 1,
				identifier: "01".to_owned(),
			},
		};
		assert_eq!(
			error.to_string(),
			"the pre-release identifier \"01\" at index 1 has a leading zero"
		);

		let error = ParseError::InvalidIdentifierChar {
			section: Section::Build,
			index: 0,
			identifier: "a_b".to_owned(),
			character: '_',
		};
		assert_eq!(
			error.to_string(),
			"the build metadata identifier \"a_b\" at index 0 contains the invalid character '_'"
		);
	}

	#[test]
	fn malformation() {
		let error = ParseError::MalformedInput {
			reason: Malformation::RepeatedBuildDelimiter,
		};
		assert_eq!(
			error.to_string(),
			"malformed input: the build metadata contains a second '+'"
		);
		assert_eq!(Malformation::Empty.to_string(), "the input is empty");
	}

	#[test]
	fn kind() {
		let error = ParseError::EmptyIdentifier {
			section: Section::Prerelease,
			index: 0,
		};
		assert_eq!(error.kind(), Kind::EmptyIdentifier);
		assert_eq!(error.kind().to_string(), "empty_identifier");
		assert!(error.is_empty_identifier());
		assert!(!error.is_leading_zero());
	}
}
