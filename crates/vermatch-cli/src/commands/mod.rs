//! Command dispatch and handler modules.

mod check;
mod id;
mod resolve;
mod versions;

use miette::Result;
use vermatch_ops::ops_source::SourceOptions;

use crate::cli::{Cli, Command, SourceArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            module,
            constraint,
            source,
            json,
        } => resolve::exec(module, constraint, source.into(), json),
        Command::Check { constraint } => check::exec(&constraint),
        Command::Versions { module, source } => versions::exec(&module, &source.into()),
        Command::Id {
            module,
            constraint,
            prerelease,
        } => id::exec(&module, &constraint, prerelease.choice()),
    }
}

impl From<SourceArgs> for SourceOptions {
    fn from(args: SourceArgs) -> Self {
        SourceOptions {
            include_prerelease: args.prerelease.choice(),
            versions: args.versions,
            catalog: args.catalog,
        }
    }
}
