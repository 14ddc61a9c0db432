use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use showmejson_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static SHOWMEJSON_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_showmejson(args: &[&str]) -> Output {
	Command::new(showmejson_bin()).args(args).output().expect("showmejson command executes")
}

pub(crate) fn run_showmejson_stdin(args: &[&str], input: &str) -> Output {
	let mut child = Command::new(showmejson_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("showmejson command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(input.as_bytes())
		.expect("stdin accepts input");
	child.wait_with_output().expect("showmejson command completes")
}

pub(crate) fn stdout_of(output: &Output) -> String {
	assert!(
		output.status.success(),
		"showmejson command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout.clone()).expect("stdout is utf8")
}

pub(crate) fn run_showmejson_json(args: &[&str]) -> serde_json::Value {
	let output = run_showmejson(args);
	serde_json::from_str(&stdout_of(&output)).expect("stdout should be valid json")
}

fn showmejson_bin() -> &'static PathBuf {
	SHOWMEJSON_BIN.get_or_init(resolve_showmejson_bin)
}

fn resolve_showmejson_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_showmejson") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "showmejson.exe" } else { "showmejson" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "showmejson"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build showmejson binary at {}", bin.display());

	bin
}
