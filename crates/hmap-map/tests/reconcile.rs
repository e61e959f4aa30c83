use hmap_map::{apply_reconciliation, reconcile};
use hmap_model::{CsvTable, TemplateSchema};
use proptest::prelude::*;

fn contract_template() -> TemplateSchema {
    TemplateSchema::default_template()
}

#[test]
fn end_to_end_contract_file() {
    let template = contract_template();
    let input = CsvTable {
        headers: vec![
            "Ctr No".to_string(),
            "Description".to_string(),
            "Region".to_string(),
        ],
        rows: vec![vec![
            "C-100".to_string(),
            "Gas supply".to_string(),
            "West".to_string(),
        ]],
    };
    let raw = concat!(
        "Sure! Here is the mapping you asked for:\n",
        "{\"Ctr No\": \"Contract Number\", \"Description\": \"Contract Description\"}\n",
        "Let me know if you need anything else."
    );

    let rec = reconcile(&template, &input.headers, raw).unwrap();
    let out = apply_reconciliation(&rec, &template, &input);

    assert_eq!(
        out.headers,
        vec!["Contract Number", "Contract Description", "Region"]
    );
    assert_eq!(out.rows, vec![vec!["C-100", "Gas supply", "West"]]);
}

#[test]
fn matched_columns_follow_template_order_not_oracle_order() {
    let template = contract_template();
    let actual = vec!["end".to_string(), "start".to_string()];
    // Oracle lists End Date first; output must follow template order.
    let raw = r#"{"end": "End Date", "start": "Start Date"}"#;
    let rec = reconcile(&template, &actual, raw).unwrap();
    assert_eq!(rec.column_order, vec!["Start Date", "End Date"]);
}

#[test]
fn extraction_failure_produces_no_partial_layout() {
    let template = contract_template();
    let actual = vec!["a".to_string(), "b".to_string()];
    assert!(reconcile(&template, &actual, "the model declined to answer").is_err());
}

proptest! {
    // Every actual header appears exactly once as a mapping key, whatever
    // the oracle returned.
    #[test]
    fn mapping_is_total_over_actual_headers(
        actual in proptest::collection::vec("[a-zA-Z][a-zA-Z0-9 ]{0,12}", 0..8),
        raw in "\\PC*",
    ) {
        let template = contract_template();
        if let Ok(rec) = reconcile(&template, &actual, &raw) {
            for header in &actual {
                prop_assert!(rec.mapping.contains_key(header));
            }
            let distinct: std::collections::BTreeSet<&String> = actual.iter().collect();
            prop_assert_eq!(rec.mapping.len(), distinct.len());
            if !actual.is_empty() {
                prop_assert!(!rec.column_order.is_empty());
            }
        }
    }

    // Reconciling an identity answer keeps the input order for headers that
    // miss the template entirely.
    #[test]
    fn identity_answer_is_idempotent(
        actual in proptest::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let template = contract_template();
        let distinct: Vec<String> = {
            let mut seen = std::collections::BTreeSet::new();
            actual.iter().filter(|h| seen.insert(h.as_str().to_string())).cloned().collect()
        };
        let object: std::collections::BTreeMap<&String, &String> =
            distinct.iter().map(|h| (h, h)).collect();
        let raw = serde_json::to_string(&object).unwrap();
        let rec = reconcile(&template, &distinct, &raw).unwrap();
        prop_assert_eq!(rec.column_order, distinct);
    }
}
