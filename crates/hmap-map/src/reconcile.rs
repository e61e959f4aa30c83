//! Header reconciliation: turning a best-effort oracle answer into a total,
//! deterministic column layout.

use std::collections::{BTreeMap, BTreeSet};

use hmap_model::{HeaderMapping, Reconciliation, TemplateSchema};

use crate::error::ReconcileError;
use crate::extract::extract_json_object;

/// Reconciles an untrusted oracle response against the actual headers.
///
/// The oracle text is scanned for a JSON object (`{...}` span, greedy) and
/// parsed as a string-to-string mapping. The mapping is then completed so
/// that every actual header appears exactly once as a key:
///
/// - entries whose key is not an actual header are dropped,
/// - actual headers absent from the mapping get identity entries,
/// - values are not validated against the template; a value outside the
///   template leaves its column unmatched, emitted under the original name.
///
/// The final column order is the template headers present among mapping
/// values, in template order, followed by unmatched actual headers in
/// original input order.
///
/// Known, deliberate edge cases: duplicate actual header names collapse to
/// one mapping key, and two actual headers mapped onto the same template
/// header collapse to one output column (last occurrence wins when the
/// mapping is applied). Neither is silently repaired here.
///
/// # Errors
///
/// [`ReconcileError::Extraction`] when no JSON object span exists in
/// `raw_text`, [`ReconcileError::Parse`] when the span is not a JSON object
/// of strings.
pub fn reconcile(
    template: &TemplateSchema,
    actual: &[String],
    raw_text: &str,
) -> Result<Reconciliation, ReconcileError> {
    let span = extract_json_object(raw_text)?;
    let parsed: BTreeMap<String, String> =
        serde_json::from_str(span).map_err(|e| ReconcileError::Parse(e.to_string()))?;

    let actual_set: BTreeSet<&str> = actual.iter().map(String::as_str).collect();
    let mut mapping: HeaderMapping = parsed
        .into_iter()
        .filter(|(key, _)| actual_set.contains(key.as_str()))
        .collect();
    for header in actual {
        mapping
            .entry(header.clone())
            .or_insert_with(|| header.clone());
    }

    let matched: Vec<String> = template
        .iter()
        .filter(|t| mapping.values().any(|v| v == t))
        .map(str::to_string)
        .collect();

    let mut unmatched = Vec::new();
    let mut seen = BTreeSet::new();
    for header in actual {
        let target = &mapping[header];
        if !template.contains(target) && seen.insert(header.as_str()) {
            unmatched.push(header.clone());
        }
    }

    let mut column_order = matched;
    column_order.extend(unmatched);
    Ok(Reconciliation {
        mapping,
        column_order,
    })
}
