use crate::{Location, ParseError, Section};

/// Validate a dot-separated identifier list and return it unchanged.
pub(crate) fn list(section: Section, text: &str) -> Result<&str, ParseError> {
	for (index, identifier) in text.split('.').enumerate() {
		self::identifier(section, index, identifier)?;
	}
	Ok(text)
}

fn identifier(section: Section, index: usize, identifier: &str) -> Result<(), ParseError> {
	if identifier.is_empty() {
		return Err(ParseError::EmptyIdentifier { section, index });
	}
	if let Some(character) = identifier.chars().find(|c| !is_identifier_char(*c)) {
		return Err(ParseError::InvalidIdentifierChar {
			section,
			index,
			identifier: identifier.to_owned(),
			character,
		});
	}
	let numeric = identifier.bytes().all(|byte| byte.is_ascii_digit());
	if section == Section::Prerelease
		&& numeric
		&& identifier.len() > 1
		&& identifier.starts_with('0')
	{
		return Err(ParseError::LeadingZero {
			location: Location::Prerelease {
				index,
				identifier: identifier.to_owned(),
			},
		});
	}
	Ok(())
}

fn is_identifier_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '-'
}
