//! Shared utilities for vermatch.
//!
//! This crate provides cross-cutting concerns used by the other vermatch
//! crates: the unified error type, SHA-256 hashing for query identities, and
//! Cargo-style terminal status lines.

pub mod errors;
pub mod hash;
pub mod progress;
