//! Constraint expressions: one or more comma-separated clauses, all of which
//! must hold.
//!
//! Supported operators: `=`, `!=`, `>`, `<`, `>=`, `<=` and the pessimistic
//! `~>`. A clause without an operator means `=`.
//!
//! Prerelease candidates are gated: for every operator except `=` and `!=`,
//! a prerelease only satisfies a clause whose operand is a prerelease of the
//! same `major.minor.patch`. `~>` with a prerelease operand admits only
//! prereleases.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ConstraintError;
use crate::version::SemanticVersion;

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    /// `~>`: at least the operand, with every release segment but the last
    /// written one pinned.
    Pessimistic,
}

impl Operator {
    // Two-character tokens first so `>=` is not read as `>`.
    const TOKENS: [(&'static str, Operator); 7] = [
        ("~>", Operator::Pessimistic),
        (">=", Operator::GreaterEqual),
        ("<=", Operator::LessEqual),
        ("!=", Operator::NotEqual),
        (">", Operator::Greater),
        ("<", Operator::Less),
        ("=", Operator::Equal),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Pessimistic => "~>",
        }
    }

    /// Split a leading operator off a clause. Defaults to [`Operator::Equal`].
    fn split_prefix(clause: &str) -> (Operator, &str) {
        Self::TOKENS
            .iter()
            .find_map(|(token, op)| clause.strip_prefix(*token).map(|rest| (*op, rest)))
            .unwrap_or((Operator::Equal, clause))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operator and version pair, e.g. `>= 1.2.0`.
#[derive(Debug, Clone)]
pub struct Clause {
    pub operator: Operator,
    pub version: SemanticVersion,
}

impl Clause {
    pub fn parse(text: &str) -> Result<Self, ConstraintError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConstraintError::EmptyClause);
        }
        let (operator, operand) = Operator::split_prefix(text);
        let operand = operand.trim();
        if operand.is_empty() {
            return Err(ConstraintError::MissingVersion { operator });
        }
        let version = SemanticVersion::parse(operand)?;
        Ok(Self { operator, version })
    }

    pub fn matches(&self, candidate: &SemanticVersion) -> bool {
        if !self.prerelease_allowed(candidate) {
            return false;
        }
        let ord = candidate.cmp(&self.version);
        match self.operator {
            Operator::Equal => ord == Ordering::Equal,
            Operator::NotEqual => ord != Ordering::Equal,
            Operator::Greater => ord == Ordering::Greater,
            Operator::GreaterEqual => ord != Ordering::Less,
            Operator::Less => ord == Ordering::Less,
            Operator::LessEqual => ord != Ordering::Greater,
            Operator::Pessimistic => ord != Ordering::Less && self.pins_prefix_of(candidate),
        }
    }

    fn prerelease_allowed(&self, candidate: &SemanticVersion) -> bool {
        match self.operator {
            Operator::Equal | Operator::NotEqual => true,
            _ if candidate.is_prerelease() => {
                self.version.is_prerelease() && self.version.same_release(candidate)
            }
            Operator::Pessimistic => !self.version.is_prerelease(),
            _ => true,
        }
    }

    /// `~> 1.2.3` pins `1.2`, `~> 1.2` pins `1`, `~> 1` pins nothing.
    fn pins_prefix_of(&self, candidate: &SemanticVersion) -> bool {
        let pinned = self.version.precision().saturating_sub(1);
        (0..pinned).all(|i| self.version.segment(i) == candidate.segment(i))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}

/// A parsed constraint expression.
#[derive(Debug, Clone)]
pub struct Constraint {
    original: String,
    clauses: Vec<Clause>,
}

impl Constraint {
    pub fn parse(expr: &str) -> Result<Self, ConstraintError> {
        let clauses = expr
            .split(',')
            .map(Clause::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            original: expr.to_string(),
            clauses,
        })
    }

    /// Whether `candidate` satisfies every clause.
    pub fn matches(&self, candidate: &SemanticVersion) -> bool {
        self.clauses.iter().all(|clause| {
            let ok = clause.matches(candidate);
            tracing::trace!(%clause, %candidate, ok, "evaluated clause");
            ok
        })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
