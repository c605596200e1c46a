//! Infrastructure layer for localdic.
//!
//! Contains implementations of the port traits defined in `localdic-core`:
//! the dictionary file adapter (atomic rewrite, home directory resolution)
//! and the `killall`-based spell service restarter.

pub mod filesystem;
pub mod process;
