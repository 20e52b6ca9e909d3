//! Runs of the `infoqueue` binary
//!
//! Every run passes an explicit config file so a user's default config
//! cannot change the outcome.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const INPUT: &str = r#"# captured frame
{"category": "execution", "severity": "error", "id": 7, "description": "draw failed"}
{"severity": "info", "description": "frame begins"}
{"category": "state-creation", "severity": "warning", "id": 3, "description": "odd size"}
"#;

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_infoqueue"))
        .args(["--no-color", "--log-level", "off"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_json_report() {
    let config = temp_file("[queue]\nmessage-count-limit = 2\n");
    let input = temp_file(INPUT);
    let config_path = config.path().to_string_lossy().into_owned();
    let input_path = input.path().to_string_lossy().into_owned();

    let output = run(
        &[
            "--config-file",
            &config_path,
            "--break-on-severity",
            "error",
            "--output",
            "json",
            &input_path,
        ],
        None,
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["breaks"], 1);
    assert_eq!(report["stats"]["stored"], 2);
    assert_eq!(report["stats"]["discarded_by_message_count_limit"], 1);
    assert_eq!(report["messages"][0]["description"], "frame begins");
    assert_eq!(report["messages"][1]["description"], "odd size");
}

#[test]
fn test_text_report_from_stdin() {
    let config = temp_file("");
    let config_path = config.path().to_string_lossy().into_owned();

    let output = run(
        &["--config-file", &config_path, "--break-on-id", "3", "-"],
        Some(INPUT),
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Messages (3)"));
    assert!(stdout.contains("execution #7: draw failed"));
    assert!(stdout.contains("Counters"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BREAK WARNING"));
    assert!(stderr.contains("id=3"));
}

#[test]
fn test_malformed_input_fails() {
    let config = temp_file("");
    let config_path = config.path().to_string_lossy().into_owned();

    let output = run(
        &["--config-file", &config_path],
        Some("{\"severity\": \"fatal\", \"description\": \"x\"}\n"),
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_config_file_fails() {
    let output = run(&["--config-file", "/nonexistent/infoqueue.toml"], Some(""));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_sentinel_break_id_fails() {
    let config = temp_file("");
    let config_path = config.path().to_string_lossy().into_owned();

    let output = run(&["--config-file", &config_path, "--break-on-id", "0"], Some(""));
    assert_eq!(output.status.code(), Some(1));
}
