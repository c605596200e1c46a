//! `localdic forget`: remove words by value or index.

use anyhow::{Context, Result};
use console::style;

use localdic_core::repository::word_store::WordStore;
use localdic_core::service::dictionary::DictionaryService;
use localdic_core::service::restart::ServiceRestarter;

use super::{plural, styled_word};

/// Remove words and restart the spell service.
///
/// Each selector is an index from `localdic list` when it is a valid one,
/// otherwise a literal word.
pub fn forget_words<S: WordStore, R: ServiceRestarter>(
    service: &DictionaryService<S, R>,
    selectors: &[String],
    json: bool,
) -> Result<()> {
    let removal = service
        .forget(selectors)
        .context("Failed to forget words")?;

    if json {
        let result = serde_json::json!({
            "removed": removal.removed,
            "remaining": removal.remaining.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Words below are removed successfully.",
        style("ok").green().bold()
    );
    println!();
    for word in &removal.removed {
        println!("  {}", styled_word(word));
    }
    println!();
    println!(
        "  {} word{} left in the dictionary",
        style(removal.remaining.len()).bold(),
        plural(removal.remaining.len())
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use localdic_core::service::restart::NoopRestarter;
    use localdic_infra::filesystem::FileWordStore;
    use tempfile::tempdir;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_forget_resolves_indexes_before_removing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LocalDictionary");
        std::fs::write(&path, "a\nb\nc").unwrap();
        let service = DictionaryService::new(FileWordStore::new(&path), NoopRestarter);

        forget_words(&service, &args(&["0", "2"]), false).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "b");
    }

    #[test]
    fn test_forget_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("LocalDictionary");
        let service = DictionaryService::new(FileWordStore::new(&path), NoopRestarter);

        let err = forget_words(&service, &args(&["a"]), true).unwrap_err();

        assert_eq!(err.to_string(), "Failed to forget words");
        assert!(!path.exists());
    }
}
