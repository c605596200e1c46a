//! `localdic learn`: add words to the dictionary.

use anyhow::{Context, Result};
use console::style;

use localdic_core::repository::word_store::WordStore;
use localdic_core::service::dictionary::DictionaryService;
use localdic_core::service::restart::ServiceRestarter;

use super::{plural, styled_word};

/// Add words and restart the spell service.
///
/// # Examples
///
/// ```bash
/// localdic learn ffmpeg llvm
/// ```
pub fn learn_words<S: WordStore, R: ServiceRestarter>(
    service: &DictionaryService<S, R>,
    words: &[String],
    json: bool,
) -> Result<()> {
    let addition = service
        .learn(words)
        .context("Failed to learn words")?;

    if json {
        let result = serde_json::json!({
            "added": addition.added,
            "total": addition.words.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    if addition.added.is_empty() {
        println!(
            "  {} All words are already in the local dictionary.",
            style("i").blue().bold()
        );
    } else {
        println!(
            "  {} Words below are added successfully.",
            style("ok").green().bold()
        );
        println!();
        for word in &addition.added {
            println!("  {}", styled_word(word));
        }
    }
    println!();
    println!(
        "  {} word{} in the dictionary",
        style(addition.words.len()).bold(),
        plural(addition.words.len())
    );
    println!();

    Ok(())
}
