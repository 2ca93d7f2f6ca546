// src/record.rs

/// One (method, location, width, height) tuple produced from a print-method card.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DimensionEntry {
    pub method: String,
    pub location: String,
    pub width: String,
    pub height: String,
}

/// Everything scraped from one product page.
///
/// Created empty, filled in place by the extraction passes, then read once by
/// the CSV writer and the reporter. `quantities[i]` is meant to line up with
/// `prices[i]`, but nothing checks that the two have the same length.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ProductRecord {
    pub sku: String,
    pub size: String,
    pub quantities: Vec<String>,
    pub prices: Vec<String>,
    pub entries: Vec<DimensionEntry>,
}

impl ProductRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantities as a single comma-joined field, e.g. `100,250,500`.
    pub fn joined_quantities(&self) -> String {
        self.quantities.join(",")
    }

    /// Prices as a single comma-joined field.
    pub fn joined_prices(&self) -> String {
        self.prices.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let rec = ProductRecord::new();
        assert!(rec.sku.is_empty());
        assert!(rec.size.is_empty());
        assert!(rec.quantities.is_empty());
        assert!(rec.prices.is_empty());
        assert!(rec.entries.is_empty());
        assert_eq!(rec.joined_quantities(), "");
    }

    #[test]
    fn test_joined_fields_keep_order() {
        let rec = ProductRecord {
            quantities: vec!["100".into(), "250".into(), "500".into()],
            prices: vec!["$4.10".into(), "$3.85".into()],
            ..Default::default()
        };
        assert_eq!(rec.joined_quantities(), "100,250,500");
        // lengths are allowed to differ
        assert_eq!(rec.joined_prices(), "$4.10,$3.85");
    }
}
