//! Business logic and port trait definitions for localdic.
//!
//! This crate defines the "ports" (store and restarter traits) that the
//! infrastructure layer implements. It depends only on `localdic-types` --
//! never on `localdic-infra` or any filesystem/process code.

pub mod repository;
pub mod service;
