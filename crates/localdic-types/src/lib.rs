//! Shared domain types for localdic.
//!
//! The word list, its configuration, and the error type shared by the core
//! and infrastructure crates.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod word;
