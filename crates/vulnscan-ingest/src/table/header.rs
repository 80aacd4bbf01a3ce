//! Header row normalization.

/// Normalized header names of the tabular section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanHeaders {
    /// Column names, trimmed, in file order.
    pub columns: Vec<String>,
}

impl ScanHeaders {
    pub fn from_record<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            columns: fields.into_iter().map(normalize_header).collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Wanted columns absent from this header, in the order asked.
    pub fn missing<'a>(&self, wanted: &[&'a str]) -> Vec<&'a str> {
        wanted
            .iter()
            .copied()
            .filter(|column| !self.contains(column))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

/// Normalizes a header value by dropping a BOM and trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  IP  "), "IP");
        assert_eq!(normalize_header("\u{feff}IP"), "IP");
        assert_eq!(normalize_header("CVE ID"), "CVE ID");
    }

    #[test]
    fn test_missing_preserves_request_order() {
        let headers = ScanHeaders::from_record(["IP", "QID"]);
        assert_eq!(headers.missing(&["Severity", "IP", "DNS"]), vec!["Severity", "DNS"]);
        assert!(headers.contains("QID"));
        assert_eq!(headers.len(), 2);
    }
}
