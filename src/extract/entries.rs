// src/extract/entries.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{trace, warn};

use super::{stripped_text, ExtractError, Extraction, Missing};
use crate::record::DimensionEntry;

/// Mis-encoded closing quote (U+201D read back as Mac Roman) left in imprint sizes.
const SIZE_ARTIFACT: &str = "‚Äù";
const DIMENSION_SEPARATOR: &str = " X ";

static ACCORDION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#printMethods").expect("selector should parse"));
static METHOD_BUTTONS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("button.btn.btn-link.btn-block.text-left.text-danger")
        .expect("selector should parse")
});
static CARD_BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.card-body").expect("selector should parse"));
static BODY_ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tbody tr").expect("selector should parse"));
static CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("selector should parse"));
static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").expect("selector should parse"));

/// One imprint area row of a card body, size already split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRow {
    pub location: String,
    pub width: String,
    pub height: String,
}

/// The `#printMethods` accordion.
pub fn find_print_methods(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&ACCORDION).next()
}

/// Direct `div.card` children of the accordion.
pub fn cards<'a>(accordion: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    accordion.children().filter_map(ElementRef::wrap).filter(|el| {
        el.value().name() == "div" && el.value().classes().any(|c| c == "card")
    })
}

/// Button labels of a card; a card may offer several methods.
pub fn card_methods(card: ElementRef<'_>) -> Vec<String> {
    card.select(&METHOD_BUTTONS).map(stripped_text).collect()
}

pub fn find_card_body(card: ElementRef<'_>) -> Option<ElementRef<'_>> {
    card.select(&CARD_BODY).next()
}

fn first_span_text(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&SPAN).next().map(stripped_text)
}

/// Scan a row's cells for the `Location` and `Size` values.
///
/// A cell qualifies when its inner markup mentions the label; the value is the
/// text of its first `<span>`. Later cells override earlier ones.
pub fn row_location_and_size(row: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let mut location = None;
    let mut size = None;
    for cell in row.select(&CELLS) {
        let markup = cell.inner_html();
        if markup.contains("Location") {
            location = first_span_text(cell);
        }
        if markup.contains("Size") {
            size = first_span_text(cell);
        }
    }
    (location, size)
}

/// Split `W X H` into trimmed width and height after removing the encoding artifact.
pub fn split_dimensions(size: &str) -> Result<(String, String), ExtractError> {
    let cleaned = size.replace(SIZE_ARTIFACT, "");
    let mut parts = cleaned.split(DIMENSION_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(width), Some(height), None) => {
            Ok((width.trim().to_string(), height.trim().to_string()))
        }
        _ => Err(ExtractError::MalformedDimension(cleaned.clone())),
    }
}

/// Rows of a card body that carry both a location and a size.
pub fn card_rows(body: ElementRef<'_>) -> Result<Vec<DimensionRow>, ExtractError> {
    let mut rows = Vec::new();
    for row in body.select(&BODY_ROWS) {
        let (Some(location), Some(size)) = row_location_and_size(row) else {
            continue;
        };
        if location.is_empty() || size.is_empty() {
            continue;
        }
        let (width, height) = split_dimensions(&size)?;
        trace!(%location, %width, %height, "dimension row");
        rows.push(DimensionRow {
            location,
            width,
            height,
        });
    }
    Ok(rows)
}

/// Every row paired with every method of the same card, rows outermost.
pub fn cross_methods(methods: &[String], rows: &[DimensionRow]) -> Vec<DimensionEntry> {
    rows.iter()
        .flat_map(|row| {
            methods.iter().map(move |method| DimensionEntry {
                method: method.clone(),
                location: row.location.clone(),
                width: row.width.clone(),
                height: row.height.clone(),
            })
        })
        .collect()
}

/// Walk the print-method cards and build all dimension entries.
///
/// A missing accordion is a soft miss and a card without a body is skipped, but
/// a size that does not split into two parts is an error.
pub fn extract_entries(doc: &Html) -> Result<Extraction<Vec<DimensionEntry>>, ExtractError> {
    let Some(accordion) = find_print_methods(doc) else {
        return Ok(Extraction::Missing(Missing::PrintMethods));
    };

    let mut entries = Vec::new();
    for (idx, card) in cards(accordion).enumerate() {
        let methods = card_methods(card);
        let Some(body) = find_card_body(card) else {
            warn!(card = idx, ?methods, "Card body not found in one of the cards.");
            continue;
        };
        let rows = card_rows(body)?;
        entries.extend(cross_methods(&methods, &rows));
    }

    Ok(Extraction::Found(entries))
}
