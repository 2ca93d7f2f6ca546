// src/extract/mod.rs

pub mod entries;
pub mod prices;
pub mod size;
pub mod sku;

use anyhow::Result;
use scraper::{ElementRef, Html};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::record::ProductRecord;

pub use entries::{cross_methods, extract_entries, split_dimensions, DimensionRow};
pub use prices::{extract_prices, PriceTable};
pub use size::extract_size;
pub use sku::extract_sku;

/// An expected element that was not on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    SkuContainer,
    ItemIdParagraph,
    ItemIdMarker,
    SizeLabel,
    SizeText,
    PriceTable,
    PrintMethods,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Missing::SkuContainer => "Container div not found.",
            Missing::ItemIdParagraph => "Item ID <p> tag not found.",
            Missing::ItemIdMarker => "Item ID marker not found in <p> tag.",
            Missing::SizeLabel => "Size label not found.",
            Missing::SizeText => "Size text not found after label.",
            Missing::PriceTable => "Price table not found.",
            Missing::PrintMethods => "Print Methods accordion not found.",
        };
        f.write_str(msg)
    }
}

/// Outcome of one extraction pass that did not abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    Found(T),
    Missing(Missing),
}

impl<T> Extraction<T> {
    /// The found value, or `None` after logging what was missing.
    fn or_warn(self, step: &'static str) -> Option<T> {
        match self {
            Extraction::Found(v) => Some(v),
            Extraction::Missing(what) => {
                warn!(step, "{}", what);
                None
            }
        }
    }
}

/// Conditions that stop the run in the middle of extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("dimension {0:?} does not split into width and height on \" X \"")]
    MalformedDimension(String),
}

/// Text of an element with every fragment trimmed and empty fragments dropped.
pub(crate) fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Run the four passes in order against one parsed page.
///
/// Missing elements leave their fields at the empty default; only a malformed
/// dimension aborts, and then the record must not be written.
pub fn extract_all(doc: &Html, record: &mut ProductRecord) -> Result<()> {
    if let Some(sku) = extract_sku(doc).or_warn("sku") {
        debug!(%sku, "found SKU");
        record.sku = sku;
    }

    if let Some(size) = extract_size(doc).or_warn("size") {
        debug!(%size, "found size");
        record.size = size;
    }

    if let Some(table) = extract_prices(doc).or_warn("prices") {
        debug!(
            quantities = table.quantities.len(),
            prices = table.prices.len(),
            "found price table"
        );
        record.quantities = table.quantities;
        record.prices = table.prices;
    }

    if let Some(entries) = extract_entries(doc)?.or_warn("entries") {
        debug!(count = entries.len(), "found dimension entries");
        record.entries.extend(entries);
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const PRODUCT_PAGE: &str = include_str!("../testdata/product.html");

    #[test]
    fn test_stripped_text_drops_whitespace_fragments() {
        let doc = Html::parse_fragment("<p>  Item ID: <b> ALB-CS24 </b>\n </p>");
        let sel = scraper::Selector::parse("p").unwrap();
        let p = doc.select(&sel).next().unwrap();
        assert_eq!(stripped_text(p), "Item ID:ALB-CS24");
    }

    #[test]
    fn test_extract_all_full_page() -> Result<()> {
        let doc = Html::parse_document(PRODUCT_PAGE);
        let mut rec = ProductRecord::new();
        extract_all(&doc, &mut rec)?;

        assert_eq!(rec.sku, "ALB-CS24");
        assert_eq!(rec.size, "24\" x 36\"");
        assert_eq!(rec.quantities, vec!["50", "100", "250"]);
        assert_eq!(rec.prices, vec!["$12.40", "$11.10", "$9.95"]);
        assert_eq!(rec.entries.len(), 5);
        assert_eq!(rec.entries[0].method, "Screen Print");
        assert_eq!(rec.entries[0].location, "Front");
        assert_eq!(rec.entries[0].width, "10");
        assert_eq!(rec.entries[0].height, "8");
        assert_eq!(rec.entries[4].method, "Embroidery");
        Ok(())
    }

    #[test]
    fn test_extract_all_empty_page_keeps_defaults() -> Result<()> {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        let mut rec = ProductRecord::new();
        extract_all(&doc, &mut rec)?;
        assert_eq!(rec, ProductRecord::new());
        Ok(())
    }

    #[test]
    fn test_extract_all_aborts_on_bad_dimension() {
        let html = r#"<div id="printMethods"><div class="card">
            <button class="btn btn-link btn-block text-left text-danger">Laser</button>
            <div class="card-body"><table><tbody><tr>
              <td>Location: <span>Back</span></td><td>Size: <span>12 by 8</span></td>
            </tr></tbody></table></div></div></div>"#;
        let doc = Html::parse_document(html);
        let mut rec = ProductRecord::new();
        let err = extract_all(&doc, &mut rec).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ExtractError>(),
            Some(&ExtractError::MalformedDimension("12 by 8".into()))
        );
        assert!(rec.entries.is_empty());
    }
}
