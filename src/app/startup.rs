//! Binary entry point: arguments, config file, logging, replay

use crate::app::cli::args::{Args, OutputFormat};
use crate::app::cli::error::ConfigError;
use crate::app::cli::input::parse_input;
use crate::app::replay::replay;
use crate::core::error_handling::{log_error_with_context, ContextualError};
use crate::core::logging::{init_logging, LogFormat};
use crate::core::version;
use crate::queue::api::{InfoQueue, QueueConfig};
use std::ffi::OsString;
use std::fmt;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Run the application; exits the process with status 1 on failure
pub async fn startup() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let help_color = Args::help_color(&argv, std::io::stdout().is_terminal());
    let mut args = Args::try_parse_styled_from(argv, help_color).unwrap_or_else(|e| e.exit());

    let config = match args.load_config_file().await {
        Ok(config) => config,
        Err(e) => exit_with_error(&args, &e, "Configuration loading"),
    };
    if let Some(table) = &config {
        if let Err(e) = Args::apply_toml_values(&mut args, table) {
            exit_with_error(&args, &e, "Configuration loading");
        }
    }

    let use_color = args.use_color(std::io::stdout().is_terminal());
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        std::process::exit(1);
    }

    log::debug!("infoqueue {} starting", version::long_version());

    let queue_config = match args.queue_config(config.as_ref()) {
        Ok(queue_config) => queue_config,
        Err(e) => exit_with_error(&args, &e, "Queue configuration"),
    };

    if let Err(e) = run(&args, &queue_config, use_color).await {
        exit_with_error(&args, &e, "Replay");
    }
}

async fn run(args: &Args, queue_config: &QueueConfig, use_color: bool) -> Result<(), ConfigError> {
    let queue = Arc::new(InfoQueue::from_config(queue_config)?);

    let text = read_input(args.input_path().map(|p| p.as_path())).await?;
    let records = parse_input(&text)?;
    log::info!("Loaded {} input records", records.len());

    let output = args.output_format();
    let report = replay(queue, &records, output == OutputFormat::Text, use_color).await;

    match output {
        OutputFormat::Text => println!("{}", report.to_text(use_color)),
        OutputFormat::Json => {
            let json = report
                .to_json()
                .map_err(|e| ConfigError::invalid("output", e))?;
            println!("{}", json);
        }
    }
    Ok(())
}

async fn read_input(path: Option<&Path>) -> Result<String, ConfigError> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::io(path, e)),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| ConfigError::io(Path::new("<stdin>"), e))?;
            Ok(text)
        }
    }
}

// Logging may not be up yet when the config file is bad
fn exit_with_error<E>(args: &Args, error: &E, context: &str) -> !
where
    E: ContextualError + fmt::Display + fmt::Debug,
{
    let _ = init_logging(args.log_level.as_deref(), LogFormat::Text, None, false);
    log_error_with_context(error, context);
    std::process::exit(1);
}
