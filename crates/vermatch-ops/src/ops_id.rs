//! Operation: compute the stable identity of a resolution query.

use vermatch_core::config::GlobalConfig;
use vermatch_resolver::Query;

/// Query identity for `(module, constraint, include_prerelease)`. A `None`
/// prerelease flag defers to the global config.
pub fn id(
    config: &GlobalConfig,
    module: &str,
    constraint: &str,
    include_prerelease: Option<bool>,
) -> String {
    Query::new(module, constraint)
        .include_prerelease(include_prerelease.unwrap_or(config.resolve.include_prerelease))
        .id()
}
