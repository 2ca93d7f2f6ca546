// src/write.rs

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::{fs::File, io, path::Path};
use tracing::info;

use crate::record::ProductRecord;

pub const HEADER: [&str; 8] = [
    "SKU",
    "Size",
    "Quantities",
    "Prices",
    "Method",
    "Location",
    "Width",
    "Height",
];

/// One output line: the product fields repeated next to a single entry.
#[derive(Serialize)]
struct CsvRow<'a> {
    sku: &'a str,
    size: &'a str,
    quantities: &'a str,
    prices: &'a str,
    method: &'a str,
    location: &'a str,
    width: &'a str,
    height: &'a str,
}

/// Write the header and one row per dimension entry.
///
/// Quantities and prices go into single comma-joined fields, so a value that
/// itself contains a comma cannot be told apart after the fact.
pub fn write_record<W: io::Write>(record: &ProductRecord, w: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(w);

    wtr.write_record(HEADER)?;

    let quantities = record.joined_quantities();
    let prices = record.joined_prices();
    for entry in &record.entries {
        wtr.serialize(CsvRow {
            sku: &record.sku,
            size: &record.size,
            quantities: &quantities,
            prices: &prices,
            method: &entry.method,
            location: &entry.location,
            width: &entry.width,
            height: &entry.height,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Truncate (or create) `path` and write the record to it.
pub fn save_csv(record: &ProductRecord, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_record(record, file).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = record.entries.len(), "wrote CSV");
    Ok(())
}
