//! Sizing Engine Binary
//!
//! Evaluates a JSON document of sizing and pyramid requests and prints one
//! JSON outcome per request to stdout (JSON Lines).
//!
//! # Usage
//!
//! ```bash
//! sizing-engine requests.json
//! echo '{"kind":"sizing","balance":10000,"entry_price":100,"stop_loss_price":95}' | sizing-engine
//! ```
//!
//! # Environment Variables
//!
//! - `SIZING_ENGINE_CONFIG`: Config file path (default: config.yaml, optional)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, anyhow};
use sizing_engine::application::use_cases::EvaluateBatchUseCase;
use sizing_engine::config::load_default_config;
use sizing_engine::telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = load_default_config().context("Failed to load configuration")?;
    init_telemetry(&config.observability.logging).map_err(|e| anyhow!(e))?;

    let input = std::env::args().nth(1);
    tracing::debug!(input = input.as_deref().unwrap_or("-"), "Reading requests");
    let document = read_document(input.as_deref())?;

    let outcomes = EvaluateBatchUseCase::new(&config).execute(&document)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for outcome in &outcomes {
        serde_json::to_writer(&mut out, outcome)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

/// Read the request document from a file, or stdin for `-` / no argument.
fn read_document(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file '{path}'")),
        _ => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read requests from stdin")?;
            Ok(document)
        }
    }
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
