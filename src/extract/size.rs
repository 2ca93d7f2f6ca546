// src/extract/size.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{Extraction, Missing};

const SIZE_LABEL: &str = "Size:";

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h5").expect("selector should parse"));

/// The `<h5>` whose whole text is exactly `Size:`.
pub fn find_size_label(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&HEADING)
        .find(|h| h.text().collect::<String>() == SIZE_LABEL)
}

/// First text node among the label's following siblings; element siblings are skipped.
pub fn next_sibling_text<'a>(label: ElementRef<'a>) -> Option<&'a str> {
    label
        .next_siblings()
        .find_map(|node| node.value().as_text().map(|t| &**t))
}

/// Extract the size, e.g. `24" x 36"`.
pub fn extract_size(doc: &Html) -> Extraction<String> {
    let Some(label) = find_size_label(doc) else {
        return Extraction::Missing(Missing::SizeLabel);
    };
    match next_sibling_text(label) {
        Some(text) => Extraction::Found(text.trim().replace("&quot;", "\"")),
        None => Extraction::Missing(Missing::SizeText),
    }
}
