use miette::Diagnostic;
use thiserror::Error;

use crate::constraint::Operator;

/// A version string that could not be parsed.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
#[error("invalid version '{input}': {reason}")]
pub struct VersionError {
    pub input: String,
    pub reason: String,
}

impl VersionError {
    pub(crate) fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A constraint expression that could not be parsed.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum ConstraintError {
    /// Nothing between two commas, or an empty expression.
    #[error("empty clause")]
    EmptyClause,

    /// An operator with nothing after it, e.g. `">= "`.
    #[error("operator '{operator}' is missing a version")]
    MissingVersion { operator: Operator },

    /// The operand of a clause is not a valid version.
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Failure of a resolution query.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// The constraint expression is malformed. Raised before any candidate
    /// is looked at.
    #[error("malformed version constraint '{constraint}': {reason}")]
    #[diagnostic(help(
        "Use comma-separated clauses of =, !=, >, <, >=, <= or ~> followed by a version, e.g. \">= 1.2.0, < 2.0.0\""
    ))]
    ConstraintSyntax {
        constraint: String,
        reason: ConstraintError,
    },

    /// No candidate satisfied the constraint, including the case of no valid
    /// candidates at all.
    #[error("no matching version found for module '{module}' with constraint '{constraint}'")]
    NoMatch { module: String, constraint: String },
}
