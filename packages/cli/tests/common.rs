#![cfg(test)]
#![allow(dead_code)]

use std::{
	io::Write as _,
	process::{Command, Stdio},
};

const SVER: &str = env!("CARGO_BIN_EXE_sver");

pub struct Output {
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

/// Run `sver` with an optional config and stdin.
pub fn sver(config: Option<serde_json::Value>, args: &[&str], stdin: Option<&str>) -> Output {
	let temp = tempfile::tempdir().unwrap();
	let config_path = temp.path().join("config.json");
	if let Some(config) = config {
		let config = serde_json::to_vec_pretty(&config).unwrap();
		std::fs::write(&config_path, config).unwrap();
	}
	sver_with_config_path(config_path.to_str().unwrap(), args, stdin)
}

pub fn sver_with_config_path(config_path: &str, args: &[&str], stdin: Option<&str>) -> Output {
	let mut child = Command::new(SVER)
		.args(["--config", config_path])
		.args(args)
		.env_remove("SVER_CONFIG")
		.env_remove("SVER_TRACING")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();
	let mut child_stdin = child.stdin.take().unwrap();
	if let Some(stdin) = stdin {
		child_stdin.write_all(stdin.as_bytes()).unwrap();
	}
	drop(child_stdin);
	let output = child.wait_with_output().unwrap();
	Output {
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout).unwrap(),
		stderr: String::from_utf8(output.stderr).unwrap(),
	}
}
