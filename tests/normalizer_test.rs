//! Tests for RecordNormalizer

use orgtree::domain::{FieldMap, RecordNormalizer, RANK_SENTINEL};
use serde_json::{json, Map, Value};

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

#[test]
fn given_default_field_map_when_normalizing_then_fields_selected() {
    // Arrange
    let raw = vec![as_map(json!({
        "Id": 7,
        "Title": "Ana Anic",
        "JobTitle": "Engineer",
        "Department": "Eng",
        "Superior": "CEO Office",
        "ContractType": "UG1",
        "JobRank": "0100.01",
        "Email": "ana@example.com",
        "Mobile": "+381641234567"
    }))];

    // Act
    let employees = RecordNormalizer::new(FieldMap::default()).normalize(&raw);

    // Assert
    assert_eq!(employees.len(), 1);
    let emp = &employees[0];
    assert_eq!(emp.id, Some(7));
    assert_eq!(emp.name, "Ana Anic");
    assert_eq!(emp.job, "Engineer");
    assert_eq!(emp.dept, "Eng");
    assert_eq!(emp.superior, "CEO Office");
    assert_eq!(emp.contract_type, "UG1");
    assert_eq!(emp.rank, "0100.01");
    assert_eq!(emp.email, "ana@example.com");
    assert_eq!(emp.mobile, "+381641234567");
}

#[test]
fn given_aliased_field_names_when_normalizing_then_aliases_used() {
    let fields = FieldMap {
        title: "Name".into(),
        dept: "OrgUnit".into(),
        rank: "Code".into(),
        ..FieldMap::default()
    };
    let raw = vec![as_map(json!({
        "Name": "Bojan",
        "OrgUnit": "Sales",
        "Code": "0200"
    }))];

    let employees = RecordNormalizer::new(fields).normalize(&raw);

    assert_eq!(employees[0].name, "Bojan");
    assert_eq!(employees[0].dept, "Sales");
    assert_eq!(employees[0].rank, "0200");
}

#[test]
fn given_missing_or_empty_rank_when_normalizing_then_sentinel_substituted() {
    let raw = vec![
        as_map(json!({ "Title": "NoRankField" })),
        as_map(json!({ "Title": "EmptyRank", "JobRank": "" })),
        as_map(json!({ "Title": "NullRank", "JobRank": null })),
    ];

    let employees = RecordNormalizer::new(FieldMap::default()).normalize(&raw);

    for emp in &employees {
        assert_eq!(emp.rank, RANK_SENTINEL);
    }
}

#[test]
fn given_missing_fields_when_normalizing_then_empty_strings_no_errors() {
    let raw = vec![as_map(json!({}))];

    let employees = RecordNormalizer::new(FieldMap::default()).normalize(&raw);

    let emp = &employees[0];
    assert_eq!(emp.id, None);
    assert!(emp.name.is_empty());
    assert!(emp.dept.is_empty());
    assert!(emp.superior.is_empty());
    assert_eq!(emp.rank, RANK_SENTINEL);
}

#[test]
fn given_numeric_scalar_values_when_normalizing_then_stringified() {
    let raw = vec![as_map(json!({ "Title": "X", "JobRank": 100, "Mobile": 64123 }))];

    let employees = RecordNormalizer::new(FieldMap::default()).normalize(&raw);

    assert_eq!(employees[0].rank, "100");
    assert_eq!(employees[0].mobile, "64123");
}

#[test]
fn given_many_records_when_normalizing_then_length_and_order_preserved() {
    let raw: Vec<Map<String, Value>> = (0..50)
        .map(|i| as_map(json!({ "Title": format!("emp-{i}") })))
        .collect();

    let employees = RecordNormalizer::new(FieldMap::default()).normalize(&raw);

    assert_eq!(employees.len(), 50);
    for (i, emp) in employees.iter().enumerate() {
        assert_eq!(emp.name, format!("emp-{i}"));
    }
}
