use crate::{Field, Location, ParseError};

/// Validate the version core and return its major, minor, and patch numbers.
pub(crate) fn core(core: &str) -> Result<(u64, u64, u64), ParseError> {
	let segments = core.split('.').collect::<Vec<_>>();
	let count = segments
		.iter()
		.filter(|segment| !segment.is_empty())
		.count();
	let [major, minor, patch] = segments.as_slice() else {
		return Err(ParseError::InvalidCoreArity { count });
	};
	if count != 3 {
		return Err(ParseError::InvalidCoreArity { count });
	}
	let major = number(Field::Major, major)?;
	let minor = number(Field::Minor, minor)?;
	let patch = number(Field::Patch, patch)?;
	Ok((major, minor, patch))
}

/// Validate a single non-empty numeric component.
fn number(field: Field, segment: &str) -> Result<u64, ParseError> {
	if segment.len() > 1 && segment.starts_with('0') {
		return Err(ParseError::LeadingZero {
			location: Location::Core(field),
		});
	}
	if !segment.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(ParseError::NonNumericCore {
			field,
			segment: segment.to_owned(),
		});
	}
	// Only digits remain, so the only possible failure is overflow.
	segment
		.parse::<u64>()
		.map_err(|_| ParseError::NumericOverflow {
			field,
			segment: segment.to_owned(),
		})
}
