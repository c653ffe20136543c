//! Record loading and chart orchestration
//!
//! Loads raw records from a JSON file source, normalizes them with the
//! configured field aliases, and hands them to the chart builder. Transport
//! concerns end here; the domain below is pure.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{ChartBuilder, DeptArena, Employee, RecordNormalizer};

/// Service for turning a raw record source into an organization chart.
pub struct ChartService {
    settings: Settings,
}

impl ChartService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load raw records from a JSON file (an array of objects) and map them
    /// to canonical employees. Array entries that are not objects are
    /// skipped; missing fields degrade to empty values in the normalizer.
    #[instrument(level = "debug", skip(self))]
    pub fn load_records(&self, path: &Path) -> ApplicationResult<Vec<Employee>> {
        if !path.exists() {
            return Err(ApplicationError::RecordFileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        let raw: Vec<Map<String, Value>> = match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => return Err(ApplicationError::NotAnArray(path.to_path_buf())),
        };
        debug!(count = raw.len(), "loaded raw records");

        let normalizer = RecordNormalizer::new(self.settings.fields.clone());
        Ok(normalizer.normalize(&raw))
    }

    /// Build the department chart from a record file. A chart without a root
    /// is a valid result; callers that need one check [`DeptArena::root`].
    #[instrument(level = "debug", skip(self))]
    pub fn build_chart(&self, path: &Path) -> ApplicationResult<DeptArena> {
        let records = self.load_records(path)?;
        let builder = ChartBuilder::new(&self.settings.contract_type_filter);
        Ok(builder.build(&records))
    }
}
