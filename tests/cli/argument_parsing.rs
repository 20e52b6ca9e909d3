//! CLI argument parsing tests

use clap::Parser;
use infoqueue::app::cli::api::{Args, OutputFormat};
use infoqueue::queue::api::MessageSeverity;

#[test]
fn test_help_and_version_are_available() {
    let help = Args::try_parse_from(["infoqueue", "--help"]).unwrap_err();
    assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    assert!(help.to_string().contains("--break-on-severity"));

    let version = Args::try_parse_from(["infoqueue", "--version"]).unwrap_err();
    assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_full_command_line() {
    let args = Args::try_parse_from([
        "infoqueue",
        "--config-file",
        "queue.toml",
        "--limit",
        "32",
        "--break-on-severity",
        "corruption,error",
        "--output",
        "json",
        "--no-color",
        "capture.jsonl",
    ])
    .unwrap();

    assert_eq!(args.config_file.as_deref(), Some(std::path::Path::new("queue.toml")));
    assert_eq!(args.limit, Some(32));
    assert_eq!(
        args.break_on_severity,
        vec![MessageSeverity::Corruption, MessageSeverity::Error]
    );
    assert_eq!(args.output_format(), OutputFormat::Json);
    assert!(!args.use_color(true));
    assert_eq!(
        args.input_path().map(|p| p.to_string_lossy().into_owned()),
        Some("capture.jsonl".to_string())
    );
}

#[test]
fn test_too_many_inputs_is_rejected() {
    assert!(Args::try_parse_from(["infoqueue", "a.jsonl", "b.jsonl"]).is_err());
}
