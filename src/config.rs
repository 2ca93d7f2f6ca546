// src/config.rs

use clap::Parser;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_PRODUCT_URL: &str = "https://www.arielpremium.com/product/ALB-CS24";
pub const DEFAULT_OUTPUT: &str = "product_data.csv";

/// Command-line / environment configuration for one scrape.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "arielscraper",
    about = "Scrape one Ariel Premium product page into a CSV file"
)]
pub struct Config {
    /// Product page to fetch
    #[arg(long, env = "ARIEL_PRODUCT_URL", default_value = DEFAULT_PRODUCT_URL)]
    pub url: Url,

    /// Read a saved copy of the page instead of fetching --url
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// CSV destination, overwritten on every run
    #[arg(short, long, env = "ARIEL_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// Where the page body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Url(Url),
    File(PathBuf),
}

impl Config {
    pub fn source(&self) -> PageSource {
        match &self.html {
            Some(path) => PageSource::File(path.clone()),
            None => PageSource::Url(self.url.clone()),
        }
    }
}
