//! Operation: validate a constraint expression without resolving it.

use vermatch_resolver::{parse_constraint, Constraint};

/// Parse `expr` and report its clauses.
pub fn check(expr: &str) -> miette::Result<Constraint> {
    let constraint = parse_constraint(expr)?;
    let n = constraint.clauses().len();
    vermatch_util::progress::status_info(
        "Valid",
        &format!("{n} clause{}", if n == 1 { "" } else { "s" }),
    );
    Ok(constraint)
}
