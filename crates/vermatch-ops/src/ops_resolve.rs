//! Operation: resolve a constraint to the best published version of a module.

use std::path::{Path, PathBuf};

use serde::Serialize;

use vermatch_core::config::GlobalConfig;
use vermatch_resolver::{parse_constraint, Query};

use crate::ops_source::{self, SourceOptions};

/// Options for `vermatch resolve`.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub module: String,
    pub constraint: String,
    pub source: SourceOptions,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub module: String,
    pub constraint: String,
    pub include_prerelease: bool,
    /// The matched version exactly as listed among the candidates.
    pub version: String,
    /// Stable identity of the query, see [`Query::id`].
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_sha256: Option<String>,
}

impl Resolution {
    pub fn to_json(&self) -> miette::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            vermatch_util::errors::VermatchError::Generic {
                message: format!("Failed to serialize resolution: {e}"),
            }
            .into()
        })
    }
}

/// Resolve `opts.constraint` for `opts.module` against the configured
/// candidate source.
///
/// The constraint is validated before any catalog is read, so a malformed
/// expression is reported even when no candidates are available.
pub fn resolve(
    project_root: &Path,
    config: &GlobalConfig,
    opts: &ResolveOptions,
) -> miette::Result<Resolution> {
    parse_constraint(&opts.constraint)?;

    let include_prerelease = opts.source.include_prerelease(config);
    let candidates = ops_source::candidates(project_root, config, &opts.module, &opts.source)?;
    tracing::debug!(
        module = %opts.module,
        count = candidates.versions.len(),
        include_prerelease,
        "resolving"
    );

    let query = Query::new(opts.module.as_str(), opts.constraint.as_str())
        .include_prerelease(include_prerelease);
    let version = query.resolve(candidates.versions.as_slice())?;

    vermatch_util::progress::status("Resolved", &format!("{} {version}", opts.module));

    Ok(Resolution {
        module: opts.module.clone(),
        constraint: opts.constraint.clone(),
        include_prerelease,
        version,
        id: query.id(),
        catalog: candidates.catalog,
        catalog_sha256: candidates.catalog_sha256,
    })
}
