// src/pipeline.rs

use anyhow::Result;
use reqwest::blocking::Client;
use scraper::Html;
use std::io::Write;
use tracing::{error, info};

use crate::{config::Config, extract, fetch, record::ProductRecord, report, write};

/// How a run ended, when it did not end in an error.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Page loaded; CSV written and record reported.
    Completed(ProductRecord),
    /// Page could not be loaded; nothing was extracted or written.
    FetchFailed,
}

/// Run all extraction passes over a parsed page.
pub fn scrape(doc: &Html) -> Result<ProductRecord> {
    let mut record = ProductRecord::new();
    extract::extract_all(doc, &mut record)?;
    Ok(record)
}

/// Fetch → extract → write → report.
///
/// A page that cannot be loaded is logged and ends the run cleanly before the
/// output file is touched. A malformed dimension or a write failure is returned
/// as an error; in the first case the output file is not opened at all.
pub fn run<W: Write>(client: &Client, cfg: &Config, mut out: W) -> Result<RunOutcome> {
    let doc = match fetch::load_page(client, &cfg.source()) {
        Ok(doc) => doc,
        Err(e) => {
            error!("Error fetching the page: {:#}", e);
            return Ok(RunOutcome::FetchFailed);
        }
    };

    let record = scrape(&doc)?;
    info!(
        sku = %record.sku,
        entries = record.entries.len(),
        "extraction finished"
    );

    write::save_csv(&record, &cfg.output)?;
    writeln!(out, "Data saved to {}", cfg.output.display())?;
    report::write_report(&record, &mut out)?;

    Ok(RunOutcome::Completed(record))
}
