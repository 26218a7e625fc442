use std::{collections::BTreeMap, sync::Arc};

/// A result alias that defaults to `Error` as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error.
#[derive(Clone, Debug, derive_more::Display)]
#[display("{message}")]
pub struct Error {
	/// The error's message.
	pub message: String,

	/// The location where the error occurred.
	pub location: Option<Location>,

	/// The error's source.
	pub source: Option<Arc<Error>>,

	/// Values associated with the error.
	pub values: BTreeMap<String, String>,
}

/// An error location.
#[derive(Clone, Debug)]
pub struct Location {
	pub symbol: Option<String>,
	pub file: String,
	pub line: u32,
	pub column: u32,
}

pub struct Trace<'a> {
	pub error: &'a Error,
	pub options: &'a TraceOptions,
}

#[derive(Clone, Debug, Default)]
pub struct TraceOptions {
	/// Whether to print the location of each error.
	pub locations: bool,

	/// Whether to print the outermost error last.
	pub reverse: bool,
}

impl Error {
	#[must_use]
	pub fn trace<'a>(&'a self, options: &'a TraceOptions) -> Trace<'a> {
		Trace {
			error: self,
			options,
		}
	}

	/// Iterate over this error and its sources, outermost first.
	pub fn chain(&self) -> impl Iterator<Item = &Error> {
		std::iter::successors(Some(self), |error| error.source.as_deref())
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_ref()
			.map(|source| source.as_ref() as &(dyn std::error::Error + 'static))
	}
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for Error {
	fn from(value: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
		match value.downcast::<Error>() {
			Ok(error) => *error,
			Err(error) => Self {
				message: error.to_string(),
				location: None,
				source: error.source().map(Into::into).map(Arc::new),
				values: BTreeMap::new(),
			},
		}
	}
}

impl From<&(dyn std::error::Error + 'static)> for Error {
	fn from(value: &(dyn std::error::Error + 'static)) -> Self {
		Self {
			message: value.to_string(),
			location: None,
			source: value.source().map(Into::into).map(Arc::new),
			values: BTreeMap::new(),
		}
	}
}

impl std::fmt::Display for Trace<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut errors = self.error.chain().collect::<Vec<_>>();
		if self.options.reverse {
			errors.reverse();
		}
		for error in errors {
			writeln!(f, "-> {}", error.message)?;
			if let Some(location) = &error.location
				&& self.options.locations
			{
				writeln!(f, "   {location}")?;
			}
			for (name, value) in &error.values {
				writeln!(f, "   {name} = {value}")?;
			}
		}
		Ok(())
	}
}

impl std::fmt::Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}:{}", self.file, self.line + 1, self.column + 1)?;
		if let Some(symbol) = &self.symbol {
			write!(f, " {symbol}")?;
		}
		Ok(())
	}
}

/// Generate an [Error].
///
/// ```
/// use sver_error::error;
///
/// let error = error!("error message");
/// let error = error!("error message with interpolation {}", 42);
///
/// let name = "value";
/// let error = error!(%name, "error message with a named value (display printed)");
/// let error = error!(?name, "error message with a named value (debug printed)");
/// let error = error!(%version = "1.2.3", "error message with a named expression");
///
/// let source = std::io::Error::other("unexpected error");
/// let error = error!(!source, "an error that wraps an existing error");
/// ```
#[macro_export]
macro_rules! error {
	({ $error:ident }, %$name:ident = $value:expr, $($arg:tt)*) => {
		$error.values.insert(stringify!($name).to_owned(), $value.to_string());
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, ?$name:ident = $value:expr, $($arg:tt)*) => {
		$error.values.insert(stringify!($name).to_owned(), format!("{:?}", $value));
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, %$name:ident, $($arg:tt)*) => {
		$error.values.insert(stringify!($name).to_owned(), $name.to_string());
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, ?$name:ident, $($arg:tt)*) => {
		$error.values.insert(stringify!($name).to_owned(), format!("{:?}", $name));
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, !$source:expr, $($arg:tt)*) => {
		$error.source.replace(std::sync::Arc::new({
			let source: Box<dyn std::error::Error + Send + Sync + 'static> = Box::new($source);
			source.into()
		}));
		$crate::error!({ $error }, $($arg)*)
	};
	({ $error:ident }, $($arg:tt)*) => {
		$error.message = format!($($arg)*);
	};
	($($arg:tt)*) => {{
		let mut __error = $crate::Error {
			message: String::new(),
			location: Some($crate::Location {
				symbol: Some($crate::function!().to_owned()),
				file: file!().to_owned(),
				line: line!() - 1,
				column: column!() - 1,
			}),
			source: None,
			values: std::collections::BTreeMap::new(),
		};
		$crate::error!({ __error }, $($arg)*);
		__error
	}};
}

#[macro_export]
macro_rules! function {
	() => {{
		struct __Dummy {}
		let name = std::any::type_name::<__Dummy>();
		name.strip_suffix("::__Dummy").unwrap_or(name)
	}};
}
