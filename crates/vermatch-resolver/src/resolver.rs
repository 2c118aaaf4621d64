//! Best-match selection: parse the constraint, parse and filter candidates,
//! rank them highest first, and return the first one that satisfies every
//! clause.
//!
//! Candidates come from external registry data and are filtered permissively:
//! anything that is not a valid version is skipped. The constraint comes from
//! the caller and is validated strictly, before any candidate is examined.

use tracing::debug;

use vermatch_util::hash::sha256_parts;

use crate::constraint::Constraint;
use crate::error::ResolveError;
use crate::version::SemanticVersion;

/// A resolution query for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    module: String,
    constraint: String,
    include_prerelease: bool,
}

impl Query {
    pub fn new(module: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            constraint: constraint.into(),
            include_prerelease: false,
        }
    }

    /// Consider prerelease candidates. Off by default.
    pub fn include_prerelease(mut self, include: bool) -> Self {
        self.include_prerelease = include;
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    pub fn includes_prerelease(&self) -> bool {
        self.include_prerelease
    }

    /// Stable identity of this query: SHA-256 of
    /// `module:constraint:include_prerelease`.
    pub fn id(&self) -> String {
        let include = self.include_prerelease.to_string();
        sha256_parts(&[&self.module, &self.constraint, &include])
    }

    /// Return the original text of the highest candidate satisfying the
    /// constraint.
    pub fn resolve<S: AsRef<str>>(&self, candidates: &[S]) -> Result<String, ResolveError> {
        let constraint = parse_constraint(&self.constraint)?;
        let ranked = rank(candidates, self.include_prerelease);
        match ranked.into_iter().find(|v| constraint.matches(v)) {
            Some(version) => {
                debug!(module = %self.module, version = %version, "resolved");
                Ok(version.original)
            }
            None => Err(ResolveError::NoMatch {
                module: self.module.clone(),
                constraint: self.constraint.clone(),
            }),
        }
    }
}

/// Parse a constraint expression, reporting failures as
/// [`ResolveError::ConstraintSyntax`].
pub fn parse_constraint(expr: &str) -> Result<Constraint, ResolveError> {
    Constraint::parse(expr).map_err(|reason| ResolveError::ConstraintSyntax {
        constraint: expr.to_string(),
        reason,
    })
}

/// Resolve `constraint` against `candidates` for `module`.
///
/// Shorthand for [`Query::resolve`].
pub fn resolve<S: AsRef<str>>(
    module: &str,
    candidates: &[S],
    constraint: &str,
    include_prerelease: bool,
) -> Result<String, ResolveError> {
    Query::new(module, constraint)
        .include_prerelease(include_prerelease)
        .resolve(candidates)
}

/// Parse candidates, drop invalid ones (and prereleases unless requested),
/// and sort highest first. Equal-precedence versions keep their input order.
pub fn rank<S: AsRef<str>>(candidates: &[S], include_prerelease: bool) -> Vec<SemanticVersion> {
    let mut versions: Vec<SemanticVersion> = candidates
        .iter()
        .filter_map(|raw| match SemanticVersion::parse(raw.as_ref()) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("skipping candidate: {e}");
                None
            }
        })
        .filter(|v| include_prerelease || !v.is_prerelease())
        .collect();
    versions.sort_by(|a, b| b.cmp(a));
    versions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_sorts_descending_and_filters() {
        let ranked = rank(&["0.1.0", "junk", "1.0.0-rc.1", "0.3.0", "0.2.0"], false);
        let shown: Vec<&str> = ranked.iter().map(|v| v.original.as_str()).collect();
        assert_eq!(shown, vec!["0.3.0", "0.2.0", "0.1.0"]);
    }

    #[test]
    fn rank_keeps_input_order_for_equal_precedence() {
        let ranked = rank(&["1.0.0+b", "0.9.0", "1.0.0+a"], false);
        let shown: Vec<&str> = ranked.iter().map(|v| v.original.as_str()).collect();
        assert_eq!(shown, vec!["1.0.0+b", "1.0.0+a", "0.9.0"]);
    }

    #[test]
    fn rank_includes_prereleases_on_request() {
        let ranked = rank(&["1.0.0", "1.1.0-beta"], true);
        assert_eq!(ranked[0].original, "1.1.0-beta");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn query_builder() {
        let query = Query::new("acme/foo", "> 1.0").include_prerelease(true);
        assert_eq!(query.module(), "acme/foo");
        assert_eq!(query.constraint(), "> 1.0");
        assert!(query.includes_prerelease());
    }

    #[test]
    fn query_id_is_sha256_of_inputs() {
        let query = Query::new("acme/foo", "> 1.0");
        assert_eq!(query.id(), sha256_parts(&["acme/foo", "> 1.0", "false"]));
        assert_eq!(query.id().len(), 64);
    }

    #[test]
    fn constraint_checked_before_candidates() {
        let empty: [&str; 0] = [];
        let err = resolve("acme/foo", &empty, ">> 1", false).unwrap_err();
        assert!(matches!(err, ResolveError::ConstraintSyntax { .. }));
    }
}
