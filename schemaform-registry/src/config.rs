//! Engine configuration, read from a TOML file such as `schemaform.toml`.
//!
//! ```toml
//! [registry]
//! include_builtin = true
//! schema_dirs = ["./schemas"]
//! exclude = ["auditlog"]
//!
//! [list]
//! max_visible_columns = 6
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Default column cap for list views.
pub const DEFAULT_MAX_VISIBLE_COLUMNS: i64 = 6;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub list: ListSection,
}

/// Where entity schemas come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySection {
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Directories of `.json` / `.toml` schema files.
    #[serde(default)]
    pub schema_dirs: Vec<PathBuf>,
    /// Entity types removed after loading.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            schema_dirs: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    #[serde(default = "default_max_visible_columns")]
    pub max_visible_columns: i64,
}

fn default_max_visible_columns() -> i64 {
    DEFAULT_MAX_VISIBLE_COLUMNS
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            max_visible_columns: default_max_visible_columns(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from `path`.
    ///
    /// Never fails: a missing file yields defaults, and an unreadable or
    /// malformed file yields defaults with a warning. Relative schema
    /// directories are resolved against the file's directory.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    match path.parent() {
                        Some(base) => config.resolve_relative_to(base),
                        None => config,
                    }
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Rebases relative `schema_dirs` onto `base`.
    #[must_use]
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        for dir in &mut self.registry.schema_dirs {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        self
    }
}
