//! Canonical employee records and raw-record normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rank code substituted when a record carries no usable rank.
/// Sorts after any explicit code under lexicographic comparison.
pub const RANK_SENTINEL: &str = "999999";

/// Department bucket for records without a department name.
pub const UNASSIGNED_DEPT: &str = "Unassigned";

/// Canonical employee record. Immutable once normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Source item id, unique when present
    pub id: Option<u64>,
    pub name: String,
    pub job: String,
    pub dept: String,
    /// Name of the department this employee's department reports to
    pub superior: String,
    pub contract_type: String,
    /// Seniority code; lexicographic order, lower sorts first
    pub rank: String,
    pub email: String,
    pub mobile: String,
}

impl Employee {
    /// Rank code with the sentinel substituted for empty values.
    pub fn rank_key(&self) -> &str {
        if self.rank.is_empty() {
            RANK_SENTINEL
        } else {
            &self.rank
        }
    }
}

/// Field-name aliases for the raw record source.
///
/// Record sources expose caller-defined column names; the normalizer selects
/// values by these aliases. Defaults match the documented fallback names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldMap {
    pub title: String,
    pub job: String,
    pub dept: String,
    pub superior: String,
    pub contract_type: String,
    pub rank: String,
    pub email: String,
    pub mobile: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            title: "Title".into(),
            job: "JobTitle".into(),
            dept: "Department".into(),
            superior: "Superior".into(),
            contract_type: "ContractType".into(),
            rank: "JobRank".into(),
            email: "Email".into(),
            mobile: "Mobile".into(),
        }
    }
}

/// Maps raw field-value maps into canonical [`Employee`] records.
///
/// Pure mapping: output has the same length and order as the input, no
/// validation and no error signaling. The only defaulting applied here is the
/// rank sentinel; records without a department are bucketed later by the
/// chart builder.
pub struct RecordNormalizer {
    fields: FieldMap,
}

impl RecordNormalizer {
    pub fn new(fields: FieldMap) -> Self {
        Self { fields }
    }

    pub fn normalize(&self, raw: &[Map<String, Value>]) -> Vec<Employee> {
        raw.iter().map(|item| self.normalize_one(item)).collect()
    }

    fn normalize_one(&self, item: &Map<String, Value>) -> Employee {
        let rank = scalar(item, &self.fields.rank);
        Employee {
            id: item.get("Id").and_then(Value::as_u64),
            name: scalar(item, &self.fields.title),
            job: scalar(item, &self.fields.job),
            dept: scalar(item, &self.fields.dept),
            superior: scalar(item, &self.fields.superior),
            contract_type: scalar(item, &self.fields.contract_type),
            rank: if rank.is_empty() {
                RANK_SENTINEL.to_string()
            } else {
                rank
            },
            email: scalar(item, &self.fields.email),
            mobile: scalar(item, &self.fields.mobile),
        }
    }
}

/// Read a scalar field as a string; absent, null, and structured values
/// degrade to the empty string.
fn scalar(item: &Map<String, Value>, field: &str) -> String {
    match item.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
