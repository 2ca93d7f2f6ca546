// src/extract/prices.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{stripped_text, Extraction, Missing};

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.pricetable").expect("selector should parse"));
static HEAD_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("thead th").expect("selector should parse"));
static BODY_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody th").expect("selector should parse"));

/// Quantity break points and their unit prices, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PriceTable {
    pub quantities: Vec<String>,
    pub prices: Vec<String>,
}

pub fn find_price_table(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&TABLE).next()
}

/// Header cells after the first (the row label) are quantities; body header
/// cells are prices. The two lists are not checked against each other.
pub fn extract_prices(doc: &Html) -> Extraction<PriceTable> {
    let Some(table) = find_price_table(doc) else {
        return Extraction::Missing(Missing::PriceTable);
    };

    let quantities = table.select(&HEAD_CELLS).skip(1).map(stripped_text).collect();
    let prices = table.select(&BODY_CELLS).map(stripped_text).collect();

    Extraction::Found(PriceTable { quantities, prices })
}
