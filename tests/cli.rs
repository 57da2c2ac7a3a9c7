//! Conversions through the library entry point and the binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use nmon2series::{run, Format, Input, Output, Response, Settings};
use nmon_parser::EmitOptions;
use pretty_assertions::assert_eq;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("nmon-parser/tests/fixtures/sample.nmon")
}

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nmon2series"));
    for key in ["NMON2SERIES_PREFIX", "NMON2SERIES_FORMAT", "NMON2SERIES_IGNORE_TEXT", "NMON2SERIES_PRETTY", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn run_writes_json_response_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("series.json");

    let settings = Settings {
        emit: EmitOptions::new("site"),
        ..Settings::default()
    };
    let response = run(&Input::File(sample_path()), &settings, &Output::file(&out)).unwrap();
    assert!(!response.is_error());

    let written: Response = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written, response);
    assert!(written
        .series()
        .iter()
        .all(|s| s.name.starts_with("site.db01.")));
    assert_eq!(
        written
            .series()
            .iter()
            .filter(|s| s.name.starts_with("site.db01.MESSAGES."))
            .count(),
        3
    );
}

#[test]
fn run_graphite_skips_messages() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("series.txt");

    let settings = Settings {
        format: Format::Graphite,
        ..Settings::default()
    };
    run(&Input::File(sample_path()), &settings, &Output::file(&out)).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines.contains(&"db01.MEM.memfree 8000.5 1615802400"));
    assert!(lines.contains(&"db01.MEM.memfree 7900 1615802460"));
    assert!(!text.contains("MESSAGES"));
}

#[test]
fn run_reports_conversion_failure_in_response() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.nmon");
    let out = dir.path().join("out.json");
    fs::write(&input, "not an nmon report\n").unwrap();

    let response = run(&Input::File(input), &Settings::default(), &Output::file(&out)).unwrap();
    assert_eq!(response, Response::error("no valid data"));
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "{\"series\":null,\"error\":\"no valid data\"}\n"
    );
}

#[test]
fn run_fails_on_missing_input() {
    let result = run(
        &Input::File(PathBuf::from("/nonexistent/report.nmon")),
        &Settings::default(),
        &Output::Stdout,
    );
    assert!(result.is_err());
}

#[test]
fn binary_converts_file_to_stdout() {
    let output = binary()
        .arg(sample_path())
        .args(["--prefix", "p", "--ignore-text"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: Response = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.error, "");
    assert_eq!(response.series().len(), 19);
    assert_eq!(response.series()[0].name, "p.db01.CPU_ALL.UserPercent");
}

#[test]
fn binary_flags_override_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nmon2series.toml");
    fs::write(&config, "prefix = \"fromfile\"\nformat = \"graphite\"\n").unwrap();

    let output = binary()
        .arg(sample_path())
        .arg("--config")
        .arg(&config)
        .args(["--prefix", "fromflag"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("fromflag.db01.CPU_ALL.UserPercent 12.5 1615802400\n"));
}

#[test]
fn binary_reads_stdin_and_exits_nonzero_on_failure() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = binary()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    let response: Response = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response, Response::error("no valid data"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no valid data"));
}

#[test]
fn binary_describe() {
    let output = binary().arg("--describe").output().unwrap();
    assert!(output.status.success());

    let description: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(description["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(description["arguments"][0]["name"], "prefix");
    assert_eq!(description["arguments"][1]["name"], "ignore_text");
}
