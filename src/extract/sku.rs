// src/extract/sku.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{stripped_text, Extraction, Missing};

const ITEM_ID_MARKER: &str = "Item ID:";

// Class attributes are matched as whole strings, not as class sets.
static CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"div[class="col-12 p-0 m-0 text-left"]"#).expect("selector should parse")
});
static ITEM_ID: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"p[class="mx-0 px-0 mt-1 mb-4"]"#).expect("selector should parse")
});

/// The product header block holding the title and the item id line.
pub fn find_sku_container(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&CONTAINER).next()
}

/// The `Item ID: ...` paragraph inside the header block.
pub fn find_item_id_paragraph(container: ElementRef<'_>) -> Option<ElementRef<'_>> {
    container.select(&ITEM_ID).next()
}

/// Extract the SKU: the text after `Item ID:`, trimmed.
pub fn extract_sku(doc: &Html) -> Extraction<String> {
    let Some(container) = find_sku_container(doc) else {
        return Extraction::Missing(Missing::SkuContainer);
    };
    let Some(p) = find_item_id_paragraph(container) else {
        return Extraction::Missing(Missing::ItemIdParagraph);
    };

    let text = stripped_text(p);
    match text.split(ITEM_ID_MARKER).nth(1) {
        Some(sku) => Extraction::Found(sku.trim().to_string()),
        None => Extraction::Missing(Missing::ItemIdMarker),
    }
}
