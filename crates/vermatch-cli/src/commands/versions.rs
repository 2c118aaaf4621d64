//! Handler for `vermatch versions`.

use miette::Result;

use vermatch_core::config::GlobalConfig;
use vermatch_ops::ops_source::SourceOptions;
use vermatch_ops::ops_versions;
use vermatch_util::errors::VermatchError;

pub fn exec(module: &str, source: &SourceOptions) -> Result<()> {
    let project_root = std::env::current_dir().map_err(VermatchError::Io)?;
    let config = GlobalConfig::load()?;

    let ranked = ops_versions::versions(&project_root, &config, module, source)?;
    if ranked.is_empty() {
        println!("No versions found for {module}.");
        return Ok(());
    }
    for version in ranked {
        println!("{version}");
    }
    Ok(())
}
