//! CLI argument definitions for vermatch.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vermatch",
    version,
    about = "Resolve version constraints against published module versions",
    long_about = "vermatch picks the highest published version of a module that satisfies a \
                  constraint such as \">= 1.2, < 2.0\" or \"~> 0.2.1-1.beta\"."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a constraint to the best matching version
    Resolve {
        /// Module identifier (e.g. observeinc/kubernetes)
        module: String,
        /// Constraint expression (e.g. "> 0.2.0, < 0.4.0")
        constraint: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a constraint expression
    Check {
        /// Constraint expression
        constraint: String,
    },

    /// List candidate versions, highest first
    Versions {
        /// Module identifier
        module: String,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the stable identity of a query
    Id {
        /// Module identifier
        module: String,
        /// Constraint expression
        constraint: String,
        #[command(flatten)]
        prerelease: PrereleaseArgs,
    },
}

/// Where candidate versions come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Candidate version (repeatable); skips the catalog
    #[arg(long = "candidate", value_name = "VERSION")]
    pub versions: Vec<String>,
    /// Version catalog to read (default: ./Versions.toml)
    #[arg(long, env = "VERMATCH_CATALOG")]
    pub catalog: Option<PathBuf>,
    #[command(flatten)]
    pub prerelease: PrereleaseArgs,
}

#[derive(Args, Debug)]
pub struct PrereleaseArgs {
    /// Consider prerelease versions
    #[arg(long, conflicts_with = "no_prerelease")]
    pub prerelease: bool,
    /// Ignore prerelease versions even if enabled in config
    #[arg(long)]
    pub no_prerelease: bool,
}

impl PrereleaseArgs {
    /// `None` when neither flag is given, deferring to the global config.
    pub fn choice(&self) -> Option<bool> {
        match (self.prerelease, self.no_prerelease) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}
