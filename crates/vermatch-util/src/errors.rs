use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for vermatch file handling and operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VermatchError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable global configuration.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.vermatch/config.toml for syntax errors"))]
    Config { message: String },

    /// Invalid, missing, or unreadable version catalog (e.g. Versions.toml).
    #[error("Catalog error: {message}")]
    #[diagnostic(help(
        "Pass candidates with --candidate, or point --catalog at a Versions.toml"
    ))]
    Catalog { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type VermatchResult<T> = miette::Result<T>;
