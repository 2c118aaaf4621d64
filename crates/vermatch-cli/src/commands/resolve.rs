//! Handler for `vermatch resolve`.

use miette::Result;

use vermatch_core::config::GlobalConfig;
use vermatch_ops::ops_resolve::{self, ResolveOptions};
use vermatch_ops::ops_source::SourceOptions;
use vermatch_util::errors::VermatchError;

pub fn exec(module: String, constraint: String, source: SourceOptions, json: bool) -> Result<()> {
    let project_root = std::env::current_dir().map_err(VermatchError::Io)?;
    let config = GlobalConfig::load()?;

    let opts = ResolveOptions {
        module,
        constraint,
        source,
    };
    let resolution = ops_resolve::resolve(&project_root, &config, &opts)?;

    if json {
        println!("{}", resolution.to_json()?);
    } else {
        println!("{}", resolution.version);
    }
    Ok(())
}
