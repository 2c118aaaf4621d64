//! Handler for `vermatch check`.

use miette::Result;

use vermatch_ops::ops_check;

pub fn exec(constraint: &str) -> Result<()> {
    let parsed = ops_check::check(constraint)?;
    for clause in parsed.clauses() {
        println!("{clause}");
    }
    Ok(())
}
