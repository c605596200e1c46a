//! Dictionary service.
//!
//! Implements the three dictionary commands on top of a `WordStore` and a
//! `ServiceRestarter`:
//!
//! - `list`: fetch only, never persists
//! - `learn`: fetch, union with the new words, persist, restart
//! - `forget`: fetch, remove by word or index, persist, restart
//!
//! The set operations themselves are the free functions `add_words` and
//! `remove_words` so they can be used without any store.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use localdic_types::error::DictionaryError;
use localdic_types::word::WordList;

use crate::repository::word_store::WordStore;
use crate::service::restart::ServiceRestarter;

/// Outcome of adding words to a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Addition {
    /// The full list after the addition.
    pub words: WordList,
    /// Words that were not present before, in the order they were appended.
    pub added: Vec<String>,
}

/// Outcome of removing words from a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
    /// The list with every removed word filtered out.
    pub remaining: WordList,
    /// Deduplicated removal set, in selector order. Literal selectors are
    /// included even when the word was not in the list.
    pub removed: Vec<String>,
}

/// Append `new_words` that are not already in `existing`.
///
/// The input is deduplicated first; accepted words keep the order of their
/// first occurrence. Existing entries are never reordered or dropped, and
/// duplicates already present in `existing` are left alone. Empty words are
/// ignored since they cannot be stored one per line.
pub fn add_words<W: AsRef<str>>(existing: &WordList, new_words: &[W]) -> Addition {
    let present: HashSet<&str> = existing.iter().collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut words = existing.clone();
    let mut added = Vec::new();

    for word in new_words {
        let word = word.as_ref();
        if word.is_empty() || !seen.insert(word) || present.contains(word) {
            continue;
        }
        words.push(word);
        added.push(word.to_string());
    }

    Addition { words, added }
}

/// Resolve a selector against the list.
///
/// A selector that parses as a signed integer within `[0, len)` names the
/// word at that index, so `-0` and `+1` are indices too. Anything else,
/// including negative or out-of-range numbers, is a literal.
pub fn resolve_selector<'a>(existing: &'a WordList, selector: &'a str) -> &'a str {
    selector
        .parse::<i64>()
        .ok()
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| existing.get(index))
        .unwrap_or(selector)
}

/// Remove every word named by `selectors`.
///
/// All selectors are resolved against the original list before anything is
/// filtered, so indices never shift mid-operation.
pub fn remove_words<S: AsRef<str>>(existing: &WordList, selectors: &[S]) -> Removal {
    let mut removal_set: HashSet<&str> = HashSet::new();
    let mut removed = Vec::new();

    for selector in selectors {
        let word = resolve_selector(existing, selector.as_ref());
        if removal_set.insert(word) {
            removed.push(word.to_string());
        }
    }

    let mut remaining = existing.clone();
    remaining.retain(|word| !removal_set.contains(word));

    Removal { remaining, removed }
}

/// Service for reading and mutating the user dictionary.
///
/// Generic over store and restarter to maintain the clean architecture
/// boundary -- no infrastructure dependencies in core.
pub struct DictionaryService<S: WordStore, R: ServiceRestarter> {
    store: S,
    restarter: R,
}

impl<S: WordStore, R: ServiceRestarter> DictionaryService<S, R> {
    /// Create a new DictionaryService.
    pub fn new(store: S, restarter: R) -> Self {
        Self { store, restarter }
    }

    /// Access the store adapter.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All words in file order.
    pub fn list(&self) -> Result<WordList, DictionaryError> {
        let words = self.store.fetch()?;
        debug!(count = words.len(), "fetched dictionary");
        Ok(words)
    }

    /// Add words, persist, and restart the spell service.
    ///
    /// The file is rewritten even when nothing new was added. A restart
    /// failure is returned after the file was already written.
    #[tracing::instrument(skip_all, fields(requested = words.len()))]
    pub fn learn<W: AsRef<str>>(&self, words: &[W]) -> Result<Addition, DictionaryError> {
        let existing = self.store.fetch()?;
        let addition = add_words(&existing, words);

        self.store.persist(&addition.words)?;
        info!(
            added = addition.added.len(),
            total = addition.words.len(),
            "dictionary updated"
        );

        self.restarter.restart()?;
        Ok(addition)
    }

    /// Remove words by literal value or zero-based index, persist, and
    /// restart the spell service.
    #[tracing::instrument(skip_all, fields(selectors = selectors.len()))]
    pub fn forget<T: AsRef<str>>(&self, selectors: &[T]) -> Result<Removal, DictionaryError> {
        let existing = self.store.fetch()?;
        let removal = remove_words(&existing, selectors);

        self.store.persist(&removal.remaining)?;
        info!(
            removed = removal.removed.len(),
            remaining = removal.remaining.len(),
            "dictionary updated"
        );

        self.restarter.restart()?;
        Ok(removal)
    }
}
