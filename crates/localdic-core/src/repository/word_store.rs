//! Word store trait definition.

use localdic_types::error::DictionaryError;
use localdic_types::word::WordList;

/// Repository trait for the backing dictionary file.
///
/// Implementations never create the backing file: `fetch` on a missing file
/// is a `FileRead` error.
pub trait WordStore: Send + Sync {
    /// Read every word in file order, duplicates included.
    fn fetch(&self) -> Result<WordList, DictionaryError>;

    /// Replace the stored words as a whole. On failure the previous content
    /// must be left untouched.
    fn persist(&self, words: &WordList) -> Result<(), DictionaryError>;
}
