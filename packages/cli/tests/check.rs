use pretty_assertions::assert_eq;
use serde_json::json;

mod common;
use common::sver;

#[test]
fn valid() {
	let output = sver(None, &["check", "1.9.0", "1.10.0-alpha+001"], None);
	assert_eq!(output.code, Some(0), "{}", output.stderr);
	assert_eq!(output.stdout, "1.9.0: valid\n1.10.0-alpha+001: valid\n");
}

#[test]
fn invalid() {
	let output = sver(None, &["check", "1.2", "1.2.3"], None);
	assert_eq!(output.code, Some(1));
	assert_eq!(
		output.stdout,
		"1.2: invalid (invalid_core_arity): expected the version core to have 3 components but found 2\n1.2.3: valid\n"
	);
}

#[test]
fn quiet() {
	let output = sver(None, &["check", "--quiet", "1.2.3", "1.2.3-"], None);
	assert_eq!(output.code, Some(1));
	assert_eq!(output.stdout, "");

	let output = sver(None, &["check", "-q", "1.2.3"], None);
	assert_eq!(output.code, Some(0));
	assert_eq!(output.stdout, "");
}

#[test]
fn stdin() {
	let output = sver(None, &["check"], Some("1.0.0\n1.0.0-alpha..1\n"));
	assert_eq!(output.code, Some(1));
	assert_eq!(
		output.stdout,
		"1.0.0: valid\n1.0.0-alpha..1: invalid (empty_identifier): the pre-release identifier at index 1 is empty\n"
	);
}

#[test]
fn json() {
	let output = sver(
		None,
		&["check", "--format", "json", "1.2.3-0123", "1.2.3"],
		None,
	);
	assert_eq!(output.code, Some(1));
	let value: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
	assert_eq!(
		value,
		json!([
			{
				"version": "1.2.3-0123",
				"valid": false,
				"kind": "leading_zero",
				"message": "the pre-release identifier \"0123\" at index 0 has a leading zero",
			},
			{ "version": "1.2.3", "valid": true },
		])
	);
}

#[test]
fn tracing() {
	let config = json!({
		"tracing": { "filter": "sver=info", "format": "json" },
	});
	let output = sver(Some(config), &["check", "1.2.3"], None);
	assert_eq!(output.code, Some(0), "{}", output.stderr);
	assert_eq!(output.stdout, "1.2.3: valid\n");
	assert!(output.stderr.contains("checked the versions"));
}

#[test]
fn invalid_tracing_filter() {
	let output = sver(None, &["--tracing", "sver=nonsense", "check", "1.2.3"], None);
	assert_eq!(output.code, Some(1));
	assert!(output.stderr.contains("invalid tracing filter"));
}

#[test]
fn tracing_pretty() {
	let config = json!({
		"tracing": { "filter": "sver=info" },
	});
	let output = sver(Some(config), &["check", "1.2.3"], None);
	assert_eq!(output.code, Some(0), "{}", output.stderr);
	assert_eq!(output.stdout, "1.2.3: valid\n");
	assert!(output.stderr.contains("checked the versions"));
	assert!(!output.stderr.trim_start().starts_with('{'));
}
