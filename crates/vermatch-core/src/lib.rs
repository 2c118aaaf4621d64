//! Core data files for vermatch.
//!
//! This crate reads the global user configuration and version catalogs, the
//! local stand-in for a module registry. It is free of resolution logic:
//! catalog entries are kept as raw strings and validated by the resolver.

/// File name looked up in the working directory when no catalog is given.
pub const DEFAULT_CATALOG_FILE: &str = "Versions.toml";

pub mod catalog;
pub mod config;
