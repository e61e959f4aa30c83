//! Header mapping types shared between the reconciler and its callers.

use std::collections::BTreeMap;

/// Mapping from an actual (uploaded) header to its target header.
///
/// After reconciliation every actual header appears exactly once as a key.
/// Values are template headers for matched columns and the key itself for
/// unmatched ones; a value outside the template is kept verbatim as the
/// oracle's answer and treated as unmatched downstream.
pub type HeaderMapping = BTreeMap<String, String>;

/// The completed output of header reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Reconciliation {
    /// Total mapping covering every actual header.
    pub mapping: HeaderMapping,
    /// Final output column order: matched template headers in template
    /// order, then unmatched headers in original input order.
    pub column_order: Vec<String>,
}

impl Reconciliation {
    /// Count of output columns that landed on a template header.
    #[must_use]
    pub fn matched_count(&self, template: &crate::TemplateSchema) -> usize {
        self.column_order
            .iter()
            .filter(|c| template.contains(c))
            .count()
    }
}
