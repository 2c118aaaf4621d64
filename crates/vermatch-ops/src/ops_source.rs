//! Operation support: collect the candidate versions for a module.
//!
//! Explicit `--candidate` values win. Otherwise the catalog named by
//! `--catalog`, then the catalog from the global config, then `Versions.toml`
//! in the working directory.

use std::path::{Path, PathBuf};

use vermatch_core::catalog::Catalog;
use vermatch_core::config::GlobalConfig;
use vermatch_core::DEFAULT_CATALOG_FILE;
use vermatch_util::errors::VermatchError;

/// Where candidate versions come from, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Explicit candidates; when non-empty no catalog is read.
    pub versions: Vec<String>,
    /// Catalog path override.
    pub catalog: Option<PathBuf>,
    /// `None` defers to the global config.
    pub include_prerelease: Option<bool>,
}

impl SourceOptions {
    pub fn include_prerelease(&self, config: &GlobalConfig) -> bool {
        self.include_prerelease
            .unwrap_or(config.resolve.include_prerelease)
    }
}

/// Candidate versions for one module and where they were read from.
#[derive(Debug, Clone)]
pub struct Candidates {
    pub versions: Vec<String>,
    pub catalog: Option<PathBuf>,
    pub catalog_sha256: Option<String>,
}

/// Collect candidates for `module`.
///
/// A module missing from the catalog yields no candidates (and a warning), so
/// resolution reports a no-match rather than a catalog error.
pub fn candidates(
    project_root: &Path,
    config: &GlobalConfig,
    module: &str,
    opts: &SourceOptions,
) -> miette::Result<Candidates> {
    if !opts.versions.is_empty() {
        return Ok(Candidates {
            versions: opts.versions.clone(),
            catalog: None,
            catalog_sha256: None,
        });
    }

    let path = catalog_path(project_root, config, opts)?;
    let catalog = Catalog::from_path(&path)?;
    let checksum = vermatch_util::hash::sha256_file(&path).map_err(VermatchError::Io)?;

    let versions = match catalog.versions(module) {
        Some(v) => v.to_vec(),
        None => {
            let known: Vec<&str> = catalog.modules().collect();
            tracing::warn!(module, catalog = %path.display(), "module not in catalog");
            vermatch_util::progress::status_warn(
                "Unknown",
                &format!(
                    "module '{module}' is not listed in {} (known: {})",
                    path.display(),
                    if known.is_empty() {
                        "none".to_string()
                    } else {
                        known.join(", ")
                    }
                ),
            );
            Vec::new()
        }
    };

    Ok(Candidates {
        versions,
        catalog: Some(path),
        catalog_sha256: Some(checksum),
    })
}

fn catalog_path(
    project_root: &Path,
    config: &GlobalConfig,
    opts: &SourceOptions,
) -> miette::Result<PathBuf> {
    if let Some(ref path) = opts.catalog {
        return Ok(project_root.join(path));
    }
    if let Some(ref path) = config.resolve.catalog {
        return Ok(path.clone());
    }
    let local = project_root.join(DEFAULT_CATALOG_FILE);
    if local.is_file() {
        return Ok(local);
    }
    Err(VermatchError::Catalog {
        message: format!(
            "No candidate versions: no --candidate given and no {DEFAULT_CATALOG_FILE} in {}",
            project_root.display()
        ),
    }
    .into())
}
