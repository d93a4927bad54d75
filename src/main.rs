use anyhow::{bail, Context, Result};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use ledger_normalizer::{process_root, Config};

#[derive(Parser, Debug)]
#[command(
    name = "ledger-normalizer",
    version,
    about = "Convert Israeli bank and credit-card statement exports into CSV ledgers"
)]
struct Cli {
    /// Directory holding `input/`; ledgers are written to `output/`
    root: PathBuf,

    /// JSON config with extra column captions and date repair settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop at the first file that fails to convert
    #[arg(long)]
    fail_fast: bool,
}

/// `outer: inner: ...` down the source chain
fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    config.fail_fast |= cli.fail_fast;

    let report = process_root(&cli.root, &config)
        .with_context(|| format!("Failed to process {}", cli.root.display()))?;

    for (input, summary) in report.converted() {
        println!(
            "✓ {} → {} ({}, {} transactions)",
            input.display(),
            summary.output.display(),
            summary.layout.name(),
            summary.transactions
        );
    }
    for (input, e) in report.failed() {
        println!("✗ {}: {}", input.display(), error_chain(e));
    }

    let failed = report.failed().count();
    info!(converted = report.converted().count(), failed, "batch finished");
    if failed > 0 {
        bail!("{} of {} file(s) failed to convert", failed, report.files.len());
    }
    Ok(())
}
