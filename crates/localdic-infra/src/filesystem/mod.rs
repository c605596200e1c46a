//! Filesystem adapter for the dictionary file.
//!
//! Implements the `WordStore` trait from `localdic-core` against the real
//! filesystem. Writes go through a temp file in the same directory followed
//! by a rename, so a failed write never leaves a truncated dictionary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use localdic_core::repository::word_store::WordStore;
use localdic_types::config::DictionaryConfig;
use localdic_types::error::DictionaryError;
use localdic_types::word::WordList;

/// Local filesystem implementation of the `WordStore` trait.
#[derive(Debug, Clone)]
pub struct FileWordStore {
    path: PathBuf,
}

impl FileWordStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for the configured dictionary path.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(config.dictionary_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordStore for FileWordStore {
    fn fetch(&self) -> Result<WordList, DictionaryError> {
        debug!(path = %self.path.display(), "reading dictionary");
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DictionaryError::read(&self.path, e))?;
        Ok(WordList::parse(&content))
    }

    fn persist(&self, words: &WordList) -> Result<(), DictionaryError> {
        debug!(path = %self.path.display(), count = words.len(), "writing dictionary");
        write_atomic(&self.path, &words.to_content())
            .map_err(|e| DictionaryError::write(&self.path, e))
    }
}

/// Replace `path` with `content` all at once.
///
/// The temp file is created next to the target so the final rename stays on
/// one filesystem. Permissions of an existing target are carried over. The
/// temp file is removed if any step fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;

    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Resolve the dictionary configuration from the current user's home directory.
pub fn resolve_config() -> Result<DictionaryConfig, DictionaryError> {
    let home = dirs::home_dir().ok_or_else(|| {
        DictionaryError::read(
            DictionaryConfig::DICTIONARY_SUBPATH,
            io::Error::new(io::ErrorKind::NotFound, "could not determine home directory"),
        )
    })?;
    Ok(DictionaryConfig::for_home(&home))
}
