//! `localdic list`: print every word with its zero-based index.

use anyhow::{Context, Result};
use console::style;

use localdic_core::repository::word_store::WordStore;
use localdic_core::service::dictionary::DictionaryService;
use localdic_core::service::restart::ServiceRestarter;

use super::{plural, styled_word};

/// List all words. The indexes printed here are the ones `forget` accepts.
pub fn list_words<S: WordStore, R: ServiceRestarter>(
    service: &DictionaryService<S, R>,
    json: bool,
) -> Result<()> {
    let words = service
        .list()
        .context("Failed to read the local dictionary")?;

    if json {
        let entries: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(index, word)| serde_json::json!({"index": index, "word": word}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if words.is_empty() {
        println!();
        println!(
            "  {} The local dictionary is empty. Add words with: {}",
            style("i").blue().bold(),
            style("localdic learn <word>").yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("  {}", style("All words in the local dictionary.").green());
    println!();
    for (index, word) in words.iter().enumerate() {
        println!("  {} {}", style(format!("{index}:")).red(), styled_word(word));
    }
    println!();
    println!(
        "  {} word{}",
        style(words.len()).bold(),
        plural(words.len())
    );
    println!();

    Ok(())
}
