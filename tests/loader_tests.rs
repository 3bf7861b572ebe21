// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use budgetlens::annotate::load_dataset;
use budgetlens::error::DatasetError;
use budgetlens::trivia;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn loads_dataset_in_published_wire_format() {
    let f = write_file(
        r#"{
            "meta": { "total_budget": 40000000000 },
            "data": [
                {
                    "l": "Verkehr",
                    "v": 2500000000,
                    "code": "12",
                    "c": [
                        { "l": "Zuschuss an die BVG", "v": 1200000000 },
                        { "l": "S-Bahn", "v": 800000000 }
                    ]
                }
            ]
        }"#,
    );
    let ds = load_dataset(f.path()).unwrap();
    assert_eq!(ds.meta.total_budget, Decimal::from(40_000_000_000i64));
    assert_eq!(ds.items.len(), 1);
    let verkehr = &ds.items[0];
    assert_eq!(verkehr.label, "Verkehr");
    assert_eq!(verkehr.code.as_deref(), Some("12"));
    assert_eq!(verkehr.children().len(), 2);
    assert_eq!(verkehr.children()[1].label, "S-Bahn");
    assert!(verkehr.children()[1].is_leaf());
}

#[test]
fn fractional_values_survive_loading() {
    let f = write_file(
        r#"{"meta":{"total_budget":100.5},"data":[{"l":"A","v":100.5}]}"#,
    );
    let ds = load_dataset(f.path()).unwrap();
    assert_eq!(ds.items[0].value.to_string(), "100.5");
}

#[test]
fn missing_value_is_fatal() {
    let f = write_file(r#"{"meta":{"total_budget":10},"data":[{"l":"A"}]}"#);
    let err = load_dataset(f.path()).unwrap_err();
    assert!(matches!(err, DatasetError::Malformed(_)));
}

#[test]
fn missing_label_is_fatal() {
    let f = write_file(r#"{"meta":{"total_budget":10},"data":[{"v":10}]}"#);
    assert!(matches!(
        load_dataset(f.path()).unwrap_err(),
        DatasetError::Malformed(_)
    ));
}

#[test]
fn non_numeric_value_is_fatal() {
    let f = write_file(r#"{"meta":{"total_budget":10},"data":[{"l":"A","v":"ten"}]}"#);
    assert!(matches!(
        load_dataset(f.path()).unwrap_err(),
        DatasetError::Malformed(_)
    ));
}

#[test]
fn negative_value_is_fatal() {
    let f = write_file(r#"{"meta":{"total_budget":10},"data":[{"l":"A","v":-5}]}"#);
    match load_dataset(f.path()).unwrap_err() {
        DatasetError::NegativeValue { label, value } => {
            assert_eq!(label, "A");
            assert_eq!(value, Decimal::from(-5));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn over_deep_nesting_is_rejected() {
    // 41 nested levels; anything past the defensive cap is not tree-shaped
    // budget data.
    let mut json = String::from(r#"{"meta":{"total_budget":1},"data":["#);
    for _ in 0..40 {
        json.push_str(r#"{"l":"N","v":1,"c":["#);
    }
    json.push_str(r#"{"l":"leaf","v":1}"#);
    for _ in 0..40 {
        json.push_str("]}");
    }
    json.push_str("]}");

    let f = write_file(&json);
    match load_dataset(f.path()).unwrap_err() {
        DatasetError::DepthExceeded(cap) => assert_eq!(cap, 32),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn nesting_within_the_cap_loads() {
    let mut json = String::from(r#"{"meta":{"total_budget":1},"data":["#);
    for _ in 0..10 {
        json.push_str(r#"{"l":"N","v":1,"c":["#);
    }
    json.push_str(r#"{"l":"leaf","v":1}"#);
    for _ in 0..10 {
        json.push_str("]}");
    }
    json.push_str("]}");

    let f = write_file(&json);
    assert!(load_dataset(f.path()).is_ok());
}

#[test]
fn missing_file_reports_path() {
    let err = load_dataset("/nonexistent/budget.json").unwrap_err();
    match err {
        DatasetError::Io { path, .. } => assert!(path.contains("budget.json")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn trivia_table_loads_from_json() {
    let f = write_file(
        r#"[
            {"search": "S-Bahn", "name": "the S-Bahn", "icon": "🚆"},
            {"search": "Charité", "name": "the Charité Hospital", "icon": "🏥",
             "question": "How many beds is that?"}
        ]"#,
    );
    let table = trivia::load_table(f.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].question, None);
    assert_eq!(
        table[1].question.as_deref(),
        Some("How many beds is that?")
    );
}

#[test]
fn trivia_table_rejects_empty_search() {
    let f = write_file(r#"[{"search": "", "name": "Everything", "icon": "❓"}]"#);
    match trivia::load_table(f.path()).unwrap_err() {
        DatasetError::EmptySearch { name } => assert_eq!(name, "Everything"),
        other => panic!("unexpected error {:?}", other),
    }
}
