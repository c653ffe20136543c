//! Integration tests for Settings config loading.
//!
//! Precedence: compiled defaults -> global config -> local config -> env vars.
//! These tests run against temp-directory local configs only, so they exercise
//! the local layer over the compiled defaults.

use std::fs;

use tempfile::TempDir;

use orgtree::config::{global_config_path, Settings, LOCAL_CONFIG_FILE};
use orgtree::domain::FieldMap;

#[test]
fn given_no_config_files_when_load_then_compiled_defaults() {
    // A nonexistent local path keeps the layer inert
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join(LOCAL_CONFIG_FILE);

    let settings = Settings::load(Some(&missing)).unwrap();

    assert_eq!(settings.fields, FieldMap::default());
    assert_eq!(settings.contract_type_filter, "UG1,UG2");
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local = dir.path().join(LOCAL_CONFIG_FILE);
    fs::write(
        &local,
        r#"
contract_type_filter = "FT,PT"

[fields]
dept = "OrgUnit"
rank = "SeniorityCode"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&local)).unwrap();

    // Assert: overridden keys change, untouched keys keep defaults
    assert_eq!(settings.contract_type_filter, "FT,PT");
    assert_eq!(settings.fields.dept, "OrgUnit");
    assert_eq!(settings.fields.rank, "SeniorityCode");
    assert_eq!(settings.fields.title, "Title");
}

#[test]
fn given_default_settings_when_rendered_as_toml_then_round_trips() {
    let settings = Settings::default();

    let rendered = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&rendered).unwrap();

    assert_eq!(parsed, settings);
}

#[test]
fn given_platform_dirs_when_resolving_global_path_then_points_at_orgtree_toml() {
    let path = global_config_path().expect("config dir resolvable");
    assert!(path.ends_with("orgtree.toml"));
}
