//! Version catalogs: a TOML file listing the published versions of each
//! module.
//!
//! ```toml
//! [modules."acme/foo"]
//! versions = ["0.1.0", "0.2.0", "0.3.0-beta.1"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use vermatch_util::errors::VermatchError;

/// The parsed representation of a `Versions.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleEntry>,
}

/// Published versions of one module, as raw strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleEntry {
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Catalog {
    /// Load and parse a catalog file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VermatchError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            VermatchError::Catalog {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse a catalog from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            VermatchError::Catalog {
                message: format!("Failed to parse catalog: {e}"),
            }
            .into()
        })
    }

    pub fn versions(&self, module: &str) -> Option<&[String]> {
        self.modules.get(module).map(|m| m.versions.as_slice())
    }

    /// Module ids in sorted order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }
}
