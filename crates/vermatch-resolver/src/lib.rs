//! Version constraint resolution: semantic version parsing and precedence,
//! constraint expressions (`>= 1.2, < 2.0`, `~> 0.2.1-1.beta`), and selection
//! of the highest candidate satisfying a constraint.
//!
//! The resolver is pure: it does no I/O and keeps no state between calls.

pub mod constraint;
pub mod error;
pub mod resolver;
pub mod version;

pub use constraint::{Clause, Constraint, Operator};
pub use error::{ConstraintError, ResolveError, VersionError};
pub use resolver::{parse_constraint, rank, resolve, Query};
pub use version::SemanticVersion;
