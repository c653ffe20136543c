//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Local config: `./.orgtree.toml` (or an explicit path)
//! 4. Environment variables: `ORGTREE_*` prefix (nested keys via `__`)
//!
//! Field-name fallbacks and the contract filter live here so the normalizer
//! and the builder share one validated configuration object instead of
//! inlined defaults at each call site.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::FieldMap;

/// Name of the local config file searched in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".orgtree.toml";

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Field-name aliases for the raw record source
    pub fields: FieldMap,
    /// Comma-separated contract-type codes classified as staff;
    /// empty means everyone is staff
    pub contract_type_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fields: FieldMap::default(),
            contract_type_filter: "UG1,UG2".into(),
        }
    }
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `local` overrides the default local config path; a missing file at
    /// either layer is not an error.
    pub fn load(local: Option<&Path>) -> ApplicationResult<Self> {
        let defaults = Config::try_from(&Settings::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(File::from(global_path).required(false));
        }

        let local_path = local.unwrap_or_else(|| Path::new(LOCAL_CONFIG_FILE));
        builder = builder.add_source(File::from(local_path.to_path_buf()).required(false));

        builder = builder.add_source(Environment::with_prefix("ORGTREE").separator("__"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Render the settings as a TOML document, usable as a config template.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
