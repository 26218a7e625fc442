#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
	/// Error output.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<Error>,

	/// The default output format for `parse` and `check`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub format: Option<Format>,

	/// Tracing.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tracing: Option<Tracing>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Error {
	/// Whether to print the source location of each error.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub locations: bool,

	/// Whether to print the outermost error last.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub reverse: bool,
}

#[derive(
	Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Format {
	#[default]
	Text,
	Json,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Tracing {
	/// The tracing filter, in `EnvFilter` syntax.
	#[serde(default)]
	pub filter: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub format: Option<TracingFormat>,
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracingFormat {
	Json,
	#[default]
	Pretty,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserialize() {
		let config: Config = serde_json::from_str(
			r#"{
				"error": { "locations": true },
				"format": "json",
				"tracing": { "filter": "sver=debug", "format": "json" }
			}"#,
		)
		.unwrap();
		assert!(config.error.as_ref().is_some_and(|error| error.locations));
		assert_eq!(config.format, Some(Format::Json));
		let tracing = config.tracing.unwrap();
		assert_eq!(tracing.filter, "sver=debug");
		assert!(matches!(tracing.format, Some(TracingFormat::Json)));
	}

	#[test]
	fn empty() {
		let config: Config = serde_json::from_str("{}").unwrap();
		assert!(config.error.is_none());
		assert!(config.format.is_none());
		assert!(config.tracing.is_none());
		assert_eq!(serde_json::to_string(&config).unwrap(), "{}");
	}
}
