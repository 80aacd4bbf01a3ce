//! Raw and projected record shapes.

use std::collections::BTreeMap;

use crate::columns::ColumnSet;

/// One input row keyed by the export's header names.
///
/// When a header repeats, the last occurrence present in the row wins. Rows
/// shorter than the header simply lack the trailing columns; extra cells are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    values: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn from_fields<'h, 'f, H, F>(headers: H, fields: F) -> Self
    where
        H: IntoIterator<Item = &'h str>,
        F: IntoIterator<Item = &'f str>,
    {
        let mut values = BTreeMap::new();
        for (header, field) in headers.into_iter().zip(fields) {
            values.insert(header.to_string(), field.to_string());
        }
        Self { values }
    }

    /// Untrimmed value of a column, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Trimmed value of a column; missing columns read as empty.
    pub fn trimmed(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A row restricted to a fixed [`ColumnSet`], one trimmed value per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRecord {
    columns: ColumnSet,
    values: Vec<String>,
}

impl ProjectedRecord {
    /// Build a record by asking `value_for` for every column in order.
    ///
    /// Values are trimmed here, so every projected record upholds the
    /// "exact column set, trimmed values" shape regardless of the caller.
    pub fn from_fn<F>(columns: ColumnSet, mut value_for: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let values = columns
            .columns
            .iter()
            .map(|column| {
                let value = value_for(column);
                let trimmed = value.trim();
                if trimmed.len() == value.len() {
                    value
                } else {
                    trimmed.to_string()
                }
            })
            .collect();
        Self { columns, values }
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.columns.position(column)?;
        self.values.get(idx).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Iterate `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.columns
            .columns
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::GROUPED_SUMMARY;

    #[test]
    fn raw_record_last_duplicate_header_wins() {
        let record = RawRecord::from_fields(
            ["IP", "QID", "Severity", "IP"],
            ["10.0.0.1", "Q1", "5", "10.0.0.9"],
        );
        assert_eq!(record.get("IP"), Some("10.0.0.9"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn raw_record_duplicate_header_beyond_short_row_keeps_earlier_value() {
        let record = RawRecord::from_fields(["IP", "QID", "IP"], ["10.0.0.1", "Q1"]);
        assert_eq!(record.get("IP"), Some("10.0.0.1"));
    }

    #[test]
    fn raw_record_short_row_lacks_trailing_columns() {
        let record = RawRecord::from_fields(["IP", "QID", "Severity"], ["10.0.0.1"]);
        assert_eq!(record.get("QID"), None);
        assert_eq!(record.trimmed("Severity"), "");
    }

    #[test]
    fn projected_record_trims_and_keeps_order() {
        let record = ProjectedRecord::from_fn(GROUPED_SUMMARY, |column| match column {
            "IP" => " 10.0.0.1 ".to_string(),
            "Severity" => "5\t".to_string(),
            _ => String::new(),
        });
        assert_eq!(record.values(), &["10.0.0.1", "", "5"]);
        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(pairs, vec![("IP", "10.0.0.1"), ("QID", ""), ("Severity", "5")]);
    }
}
