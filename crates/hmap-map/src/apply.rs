//! Applying a reconciliation to a table: rename headers, reorder columns.

use hmap_model::{CsvTable, Reconciliation, TemplateSchema};

/// Renames and reorders a table's columns per a completed reconciliation.
///
/// Each column's output name is its mapping value when that value is a
/// template header, otherwise the original header name. For each name in
/// the final column order the *last* matching source column is selected, so
/// two columns renamed onto the same template header collapse to one and
/// the later column's data survives. Row data is otherwise untouched.
#[must_use]
pub fn apply_reconciliation(
    reconciliation: &Reconciliation,
    template: &TemplateSchema,
    table: &CsvTable,
) -> CsvTable {
    let renamed: Vec<&str> = table
        .headers
        .iter()
        .map(|header| match reconciliation.mapping.get(header) {
            Some(target) if template.contains(target) => target.as_str(),
            _ => header.as_str(),
        })
        .collect();

    let mut headers = Vec::with_capacity(reconciliation.column_order.len());
    let mut indices = Vec::with_capacity(reconciliation.column_order.len());
    for name in &reconciliation.column_order {
        if let Some(idx) = renamed.iter().rposition(|r| r == name) {
            headers.push(name.clone());
            indices.push(idx);
        }
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|&idx| row.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    CsvTable { headers, rows }
}
