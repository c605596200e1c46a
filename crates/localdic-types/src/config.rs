//! Runtime configuration for localdic.
//!
//! `DictionaryConfig` is a plain value: the dictionary path is fixed relative
//! to the user's home directory and is injected into the store rather than
//! read from a global, so tests can point it at a temporary file.

use std::path::{Path, PathBuf};

/// Where the dictionary lives and which service caches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// The newline-delimited word list maintained by the OS spell checker.
    pub dictionary_path: PathBuf,
    /// Process name of the spell-check helper that caches the dictionary.
    pub spell_service: String,
}

impl DictionaryConfig {
    /// Location of the user dictionary relative to the home directory.
    pub const DICTIONARY_SUBPATH: &'static str = "Library/Spelling/LocalDictionary";

    /// The macOS spell-check helper.
    pub const DEFAULT_SPELL_SERVICE: &'static str = "AppleSpell";

    /// Build the default configuration for a given home directory.
    pub fn for_home(home: &Path) -> Self {
        Self {
            dictionary_path: home.join(Self::DICTIONARY_SUBPATH),
            spell_service: Self::DEFAULT_SPELL_SERVICE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_home_builds_library_spelling_path() {
        let config = DictionaryConfig::for_home(Path::new("/Users/luna"));
        assert_eq!(
            config.dictionary_path,
            PathBuf::from("/Users/luna/Library/Spelling/LocalDictionary")
        );
        assert_eq!(config.spell_service, "AppleSpell");
    }
}
