use anyhow::Context;
use clap::Parser;
use exposable_model::utils::error::ErrorCategory;
use exposable_model::utils::{logger, validation::Validate};
use exposable_model::{CliConfig, ExposeError, ExposureConfig};
use std::io::{Read, Write};

fn run(config: &CliConfig) -> exposable_model::Result<String> {
    config.validate()?;

    let registry = ExposureConfig::from_file(&config.config)?.into_registry()?;
    tracing::info!("📋 Loaded {} exposable models from {}", registry.len(), config.config);

    // 讀取輸入：檔案或 stdin
    let raw = match &config.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let input: serde_json::Value = serde_json::from_str(&raw)?;
    let exposed = registry.expose_value(&input, config.model.as_deref())?;

    let output = if config.pretty {
        serde_json::to_string_pretty(&exposed)?
    } else {
        serde_json::to_string(&exposed)?
    };

    Ok(output)
}

fn exit_code(error: &ExposeError) -> i32 {
    match error.category() {
        ErrorCategory::Model | ErrorCategory::Input => 1,
        ErrorCategory::Configuration => 2,
        ErrorCategory::System => 3,
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("failed to write exposed output")?;
            tracing::info!("✅ Exposure completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Exposure failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}
