//! CLI TOML configuration tests
//!
//! Config file values feed the queue; command-line values override them.

use clap::Parser;
use infoqueue::app::cli::api::{read_config_file, Args, ConfigError};
use infoqueue::queue::api::{FilterStage, InfoQueue, MessageCategory, MessageId, MessageSeverity};
use std::io::Write;

const CONFIG: &str = r#"
[queue]
message-count-limit = 256
mute-debug-output = true

[queue.break-on]
severities = ["corruption", "error"]
categories = ["execution"]
ids = [42]

[[queue.storage-filter]]
deny = { severities = ["info", "message"] }

[[queue.retrieval-filter]]
allow = { categories = ["state-creation"] }

[log]
level = "info"
format = "text"
"#;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_documented_config_builds_queue() {
    let file = config_file(CONFIG);
    let config = read_config_file(file.path()).await.unwrap();

    let args = Args::try_parse_from(["infoqueue"]).unwrap();
    let queue_config = args.queue_config(Some(&config)).unwrap();
    let queue = InfoQueue::from_config(&queue_config).unwrap();

    assert_eq!(queue.message_count_limit(), 256);
    assert!(queue.mute_debug_output());
    assert!(queue.get_break_on_severity(MessageSeverity::Corruption));
    assert!(queue.get_break_on_category(MessageCategory::Execution));
    assert!(queue.get_break_on_id(MessageId(42)));
    assert_eq!(queue.filter_stack_size(FilterStage::Storage), 1);
    assert_eq!(queue.filter_stack_size(FilterStage::Retrieval), 1);

    queue.add_application_message(MessageSeverity::Info, "denied".to_string());
    assert_eq!(queue.num_messages_denied_by_storage_filter(), 1);
}

#[tokio::test]
async fn test_cli_overrides_config_file() {
    let file = config_file(CONFIG);
    let path = file.path().to_string_lossy().into_owned();

    let mut args = Args::try_parse_from([
        "infoqueue",
        "--config-file",
        path.as_str(),
        "--limit",
        "unlimited",
        "--log-level",
        "warn",
    ])
    .unwrap();
    let config = args.load_config_file().await.unwrap().unwrap();
    Args::apply_toml_values(&mut args, &config).unwrap();

    assert_eq!(args.log_level.as_deref(), Some("warn"));
    let queue = InfoQueue::from_config(&args.queue_config(Some(&config)).unwrap()).unwrap();
    assert_eq!(queue.message_count_limit(), u64::MAX);
}

#[tokio::test]
async fn test_sentinel_break_id_is_reported_as_invalid() {
    let file = config_file("[queue.break-on]\nids = [0]\n");
    let config = read_config_file(file.path()).await.unwrap();

    let args = Args::try_parse_from(["infoqueue"]).unwrap();
    let queue_config = args.queue_config(Some(&config)).unwrap();
    let error: ConfigError = InfoQueue::from_config(&queue_config).unwrap_err().into();
    assert!(matches!(error, ConfigError::Invalid { .. }));
    assert!(error.to_string().contains("reserved"));
}
