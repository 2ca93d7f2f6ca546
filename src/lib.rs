// src/lib.rs

pub mod config;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod write;

pub use config::{Config, PageSource};
pub use pipeline::{run, scrape, RunOutcome};
pub use record::{DimensionEntry, ProductRecord};
