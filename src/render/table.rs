use std::fmt;

use crate::format::{format_value, humanize_header};
use crate::query::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Raw field name, used to look cells up and to pick a formatter.
    pub key: String,
    pub header: String,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
        }
    }
}

/// Rows and columns ready for display, every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    mismatched_rows: Vec<usize>,
}

impl TableBlock {
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<String>>) -> Self {
        Self {
            columns,
            rows,
            mismatched_rows: Vec::new(),
        }
    }

    /// Lays out `records` using the keys of the first record as columns.
    ///
    /// Later records are read through those columns only: keys they add are
    /// ignored and keys they lack render as empty cells. Returns `None` when
    /// there are no records.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let first = records.first()?;
        let columns: Vec<Column> = first
            .keys()
            .map(|key| Column::new(key.as_str(), humanize_header(key)))
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|col| {
                        record
                            .get(&col.key)
                            .map(|value| format_value(&col.key, value))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let mismatched_rows = records
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, record)| {
                record.len() != first.len() || !record.keys().all(|key| first.contains_key(key))
            })
            .map(|(i, _)| i)
            .collect();

        Some(Self {
            columns,
            rows,
            mismatched_rows,
        })
    }

    /// Indices of rows whose key set differs from the first row's.
    pub fn schema_mismatches(&self) -> &[usize] {
        &self.mismatched_rows
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for w in widths {
        write!(f, "+{}", "-".repeat(w + 2))?;
    }
    writeln!(f, "+")
}

fn write_cells<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (cell, w) in cells.zip(widths) {
        let cell = cell.replace(['\n', '\r'], " ");
        let pad = w.saturating_sub(display_width(&cell));
        write!(f, "| {}{} ", cell, " ".repeat(pad))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for TableBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_rule(f, &widths)?;
        write_cells(f, &widths, self.columns.iter().map(|c| c.header.as_str()))?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            write_cells(f, &widths, row.iter().map(String::as_str))?;
        }
        write_rule(f, &widths)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_columns_follow_first_record() {
        let recs = records(json!([
            {"brand": "Bajaj", "model": "Pulsar 150"},
            {"model": "Hunter 350", "brand": "Royal Enfield", "state": "Goa"}
        ]));
        let table = TableBlock::from_records(&recs).unwrap();

        let keys: Vec<&str> = table.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["brand", "model"]);
        assert_eq!(table.rows[1], ["Royal Enfield", "Hunter 350"]);
        assert_eq!(table.schema_mismatches(), [1]);
    }

    #[test]
    fn test_missing_key_renders_empty() {
        let recs = records(json!([
            {"brand": "KTM", "price": 180000},
            {"brand": "TVS"}
        ]));
        let table = TableBlock::from_records(&recs).unwrap();
        assert_eq!(table.rows[0], ["KTM", "₹1,80,000.00"]);
        assert_eq!(table.rows[1], ["TVS", ""]);
        assert_eq!(table.schema_mismatches(), [1]);
    }

    #[test]
    fn test_uniform_rows_have_no_mismatch() {
        let recs = records(json!([{"a": 1, "b": 2}, {"b": 3, "a": 4}]));
        let table = TableBlock::from_records(&recs).unwrap();
        assert!(table.schema_mismatches().is_empty());
    }

    #[test]
    fn test_empty_records() {
        assert!(TableBlock::from_records(&[]).is_none());
    }

    #[test]
    fn test_render_aligns_columns() {
        let recs = records(json!([{"brand": "Bajaj", "resale_price_inr": 24999}]));
        let table = TableBlock::from_records(&recs).unwrap();
        let expected = "\
+-------+------------------+
| Brand | Resale Price Inr |
+-------+------------------+
| Bajaj | ₹24,999.00       |
+-------+------------------+
";
        assert_eq!(table.to_string(), expected);
    }
}
