use std::env;
use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use employee_roster::{process_roster, ImportMode};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives when present and valid, otherwise `warn`
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        (2..=3).contains(&args.len()),
        "Usage: {} <employees.txt> [--strict]",
        args.first().map(String::as_str).unwrap_or("employee-roster")
    );

    let mode = match args.get(2).map(String::as_str) {
        None => ImportMode::SkipInvalid,
        Some("--strict") => ImportMode::Strict,
        Some(other) => anyhow::bail!("Unknown option '{}'", other),
    };

    let filename = &args[1];

    let file = File::open(filename)
        .with_context(|| format!("Failed to open input file '{}'", filename))?;

    process_roster(file, io::stdout(), mode)
        .context("Failed to load employees and write roster")?;

    Ok(())
}
