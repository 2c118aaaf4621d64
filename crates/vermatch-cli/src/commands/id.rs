//! Handler for `vermatch id`.

use miette::Result;

use vermatch_core::config::GlobalConfig;
use vermatch_ops::ops_id;

pub fn exec(module: &str, constraint: &str, include_prerelease: Option<bool>) -> Result<()> {
    let config = GlobalConfig::load()?;
    println!("{}", ops_id::id(&config, module, constraint, include_prerelease));
    Ok(())
}
