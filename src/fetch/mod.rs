// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use scraper::Html;
use std::{fs, path::Path};
use tracing::{debug, info};
use url::Url;

use crate::config::PageSource;

/// GET the product page and parse it. Any transport error or non-success
/// status is an error; there are no retries.
pub fn fetch_document(client: &Client, url: &Url) -> Result<Html> {
    info!(%url, "fetching product page");
    let html = client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .text()
        .with_context(|| format!("reading body from {}", url))?;
    debug!(bytes = html.len(), "page body received");

    Ok(Html::parse_document(&html))
}

/// Parse a product page saved to disk.
pub fn read_document(path: &Path) -> Result<Html> {
    info!(path = %path.display(), "reading saved product page");
    let html =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Html::parse_document(&html))
}

/// Load the page from wherever the config points.
pub fn load_page(client: &Client, source: &PageSource) -> Result<Html> {
    match source {
        PageSource::Url(url) => fetch_document(client, url),
        PageSource::File(path) => read_document(path),
    }
}
