use std::path::PathBuf;

use thiserror::Error;

/// Errors from dictionary operations.
///
/// A `ServiceRestart` error is raised after the dictionary file was already
/// rewritten; the change on disk is not rolled back.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write dictionary '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to restart {service} service: {message}")]
    ServiceRestart { service: String, message: String },
}

impl DictionaryError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn restart(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ServiceRestart {
            service: service.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_file_read_display_includes_path() {
        let err = DictionaryError::read(
            "/tmp/LocalDictionary",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/LocalDictionary"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_file_write_keeps_io_source() {
        let err = DictionaryError::write(
            "/tmp/LocalDictionary",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_service_restart_display_is_verbatim() {
        let err = DictionaryError::restart("AppleSpell", "killall: permission denied");
        assert_eq!(
            err.to_string(),
            "failed to restart AppleSpell service: killall: permission denied"
        );
    }
}
