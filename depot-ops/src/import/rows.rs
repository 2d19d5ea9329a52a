//! Raw upload rows and field normalization

use std::collections::HashMap;

use csv::ReaderBuilder;

use crate::import::ImportError;

/// One data row as lowercased column name → trimmed raw value.
pub type RawRow = HashMap<String, String>;

/// Strip a UTF-8 byte-order mark so spreadsheet exports parse cleanly.
fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(b"\xef\xbb\xbf").unwrap_or(data)
}

/// Parse a delimited upload: header row plus data rows.
///
/// Empty lines are skipped; a malformed file aborts the whole run with a
/// single parse error and nothing submitted.
pub fn parse_rows(data: &[u8]) -> Result<Vec<RawRow>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(strip_bom(data));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::Parse(e.to_string()))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let mut row = RawRow::new();
        for (i, field) in record.iter().enumerate() {
            if let Some(header) = headers.get(i) {
                row.insert(header.clone(), field.trim().to_string());
            }
        }
        out.push(row);
    }
    Ok(out)
}

/// First non-empty value among aliased column names.
pub fn field<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|alias| row.get(*alias))
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

/// Owned text field, `None` when every alias is empty.
pub fn text_field(row: &RawRow, aliases: &[&str]) -> Option<String> {
    field(row, aliases).map(str::to_string)
}

/// Price-style numeric field; non-numeric or missing input becomes zero.
pub fn number_field(row: &RawRow, aliases: &[&str]) -> f64 {
    field(row, aliases)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0.0)
}

/// Count-style numeric field; accepts `"5"` and `"5.0"`, falls back to zero.
pub fn int_field(row: &RawRow, aliases: &[&str]) -> i32 {
    field(row, aliases)
        .and_then(|value| value.parse::<f64>().ok())
        .map(|value| value as i32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_empty_lines_and_trims() {
        let data = "name, price ,qty\n  Laptop , 35900 , 2\n\n,,\nChair,4500,10\n";
        let rows = parse_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Laptop");
        assert_eq!(rows[0]["price"], "35900");
        assert_eq!(rows[1]["name"], "Chair");
    }

    #[test]
    fn test_parse_strips_bom_from_header() {
        let data = b"\xef\xbb\xbfname,qty\nLaptop,1\n";
        let rows = parse_rows(data).unwrap();

        assert_eq!(rows[0]["name"], "Laptop");
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let data = [b'n', b'a', b'm', b'e', b'\n', 0xff, 0xfe];
        assert!(matches!(parse_rows(&data), Err(ImportError::Parse(_))));
    }

    #[test]
    fn test_field_alias_priority() {
        let mut row = RawRow::new();
        row.insert("qty".into(), "7".into());
        row.insert("quantity".into(), "".into());

        assert_eq!(field(&row, &["quantity", "qty"]), Some("7"));
        assert_eq!(field(&row, &["missing"]), None);
    }

    #[test]
    fn test_numeric_fallbacks() {
        let mut row = RawRow::new();
        row.insert("price".into(), "ไม่ทราบ".into());
        row.insert("quantity".into(), "5.0".into());

        assert_eq!(number_field(&row, &["price"]), 0.0);
        assert_eq!(int_field(&row, &["quantity"]), 5);
        assert_eq!(int_field(&row, &["absent"]), 0);
    }
}
