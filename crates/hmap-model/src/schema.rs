//! Template schema: the canonical output column names.

use std::collections::BTreeSet;

use crate::error::{ModelError, Result};

/// Default template headers for contract data files.
///
/// Baked in for now; a custom template can be loaded from a CSV file
/// via [`TemplateSchema::new`].
pub const DEFAULT_TEMPLATE_HEADERS: [&str; 19] = [
    "Delete",
    "Contract Number",
    "Contract Description",
    "Contract Type",
    "Company Id",
    "Purchaser Id",
    "Marketer Id",
    "Marketer Isq",
    "Start Date",
    "End Date",
    "Contract Xref1",
    "Contract Xref2",
    "Dated Effective From Date",
    "Dated Effective To Date",
    "Measurement Point Id",
    "MP Effective From Date",
    "MP Effective To Date",
    "Marketing Type",
    "Disabled Flag",
];

/// An ordered, immutable list of distinct canonical header names.
///
/// The order defines the canonical output column order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TemplateSchema {
    headers: Vec<String>,
}

impl TemplateSchema {
    /// Creates a schema from an ordered list of header names.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyTemplate`] when `headers` is empty and
    /// [`ModelError::DuplicateTemplateHeader`] when a name repeats.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        if headers.is_empty() {
            return Err(ModelError::EmptyTemplate);
        }
        let mut seen = BTreeSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(ModelError::DuplicateTemplateHeader(header.clone()));
            }
        }
        Ok(Self { headers })
    }

    /// The built-in contract data template.
    #[must_use]
    pub fn default_template() -> Self {
        Self {
            headers: DEFAULT_TEMPLATE_HEADERS
                .iter()
                .map(|h| (*h).to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, header: &str) -> bool {
        self.headers.iter().any(|h| h == header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_template() {
        assert!(matches!(
            TemplateSchema::new(Vec::new()),
            Err(ModelError::EmptyTemplate)
        ));
    }

    #[test]
    fn rejects_duplicate_header() {
        let result = TemplateSchema::new(vec!["A".to_string(), "A".to_string()]);
        assert!(matches!(
            result,
            Err(ModelError::DuplicateTemplateHeader(h)) if h == "A"
        ));
    }

    #[test]
    fn default_template_is_valid() {
        let schema = TemplateSchema::default_template();
        assert_eq!(schema.len(), 19);
        assert!(schema.contains("Contract Number"));
        assert!(!schema.contains("contract number"));
    }
}
