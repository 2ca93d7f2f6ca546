use anyhow::Result;
use arielscraper::{run, Config, RunOutcome};
use clap::Parser;
use reqwest::blocking::Client;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configure ────────────────────────────────────────────────
    let cfg = Config::parse();
    info!(source = ?cfg.source(), output = %cfg.output.display(), "startup");

    // ─── 3) fetch → extract → write → report ─────────────────────────
    let client = Client::new();
    let stdout = io::stdout();
    match run(&client, &cfg, stdout.lock())? {
        RunOutcome::Completed(record) => {
            info!(entries = record.entries.len(), "all done");
        }
        RunOutcome::FetchFailed => {
            info!("page not loaded; nothing written");
        }
    }

    Ok(())
}
