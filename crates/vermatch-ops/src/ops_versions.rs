//! Operation: list the candidate versions of a module, highest first.

use std::path::Path;

use vermatch_core::config::GlobalConfig;
use vermatch_resolver::rank;

use crate::ops_source::{self, SourceOptions};

/// Ranked candidates for `module`, in their original text. Invalid entries
/// are dropped, as are prereleases unless included.
pub fn versions(
    project_root: &Path,
    config: &GlobalConfig,
    module: &str,
    opts: &SourceOptions,
) -> miette::Result<Vec<String>> {
    let candidates = ops_source::candidates(project_root, config, module, opts)?;
    let ranked = rank(candidates.versions.as_slice(), opts.include_prerelease(config));

    let skipped = candidates.versions.len() - ranked.len();
    if skipped > 0 {
        vermatch_util::progress::status_info(
            "Filtered",
            &format!("{skipped} of {} candidates", candidates.versions.len()),
        );
    }

    Ok(ranked.into_iter().map(|v| v.original).collect())
}
