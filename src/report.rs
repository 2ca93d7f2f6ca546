// src/report.rs

use std::io::{self, Write};

use crate::record::ProductRecord;

/// Human-readable dump of everything that was extracted.
pub fn write_report<W: Write>(record: &ProductRecord, mut out: W) -> io::Result<()> {
    writeln!(out, "Extracted Data:")?;
    writeln!(out, "SKU: {}", record.sku)?;
    writeln!(out, "Size: {}", record.size)?;
    writeln!(out, "Quantities: {}", record.quantities.join(", "))?;
    writeln!(out, "Prices: {}", record.prices.join(", "))?;
    for e in &record.entries {
        writeln!(
            out,
            "Method: {}, Location: {}, Width: {}, Height: {}",
            e.method, e.location, e.width, e.height
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DimensionEntry;

    #[test]
    fn test_report_lines() {
        let rec = ProductRecord {
            sku: "ALB-CS24".into(),
            size: "24\" x 36\"".into(),
            quantities: vec!["50".into(), "100".into()],
            prices: vec!["$12.40".into(), "$11.10".into()],
            entries: vec![DimensionEntry {
                method: "Embroidery".into(),
                location: "Left Chest".into(),
                width: "3.5".into(),
                height: "3.5".into(),
            }],
        };
        let mut buf = Vec::new();
        write_report(&rec, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Extracted Data:\n\
             SKU: ALB-CS24\n\
             Size: 24\" x 36\"\n\
             Quantities: 50, 100\n\
             Prices: $12.40, $11.10\n\
             Method: Embroidery, Location: Left Chest, Width: 3.5, Height: 3.5\n"
        );
    }

    #[test]
    fn test_report_empty_record() {
        let mut buf = Vec::new();
        write_report(&ProductRecord::new(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Extracted Data:\nSKU: \nSize: \nQuantities: \nPrices: \n"
        );
    }
}
