//! ServiceRestarter trait for reloading the OS spell checker.
//!
//! Defined in localdic-core so the dictionary service can trigger a reload
//! without knowing how processes are managed. The `KillallRestarter` adapter
//! lives in localdic-infra.

use localdic_types::error::DictionaryError;

/// Abstraction over restarting the spell-check helper process.
///
/// Implementations treat an already-stopped service as success, since a
/// stopped helper reloads the dictionary on next use anyway.
pub trait ServiceRestarter: Send + Sync {
    fn restart(&self) -> Result<(), DictionaryError>;
}

/// Restarter that does nothing.
///
/// Used where no live service should be touched, such as tests against a
/// temporary dictionary file.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRestarter;

impl ServiceRestarter for NoopRestarter {
    fn restart(&self) -> Result<(), DictionaryError> {
        tracing::debug!("skipping spell service restart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_restarter_always_succeeds() {
        assert!(NoopRestarter.restart().is_ok());
        assert!(NoopRestarter.restart().is_ok());
    }
}
