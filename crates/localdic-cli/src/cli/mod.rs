//! CLI command definitions and dispatch for the `localdic` binary.
//!
//! Uses clap derive macros for argument parsing. Each subcommand maps to one
//! dictionary operation (e.g., `localdic learn ffmpeg`, `localdic forget 2`).

pub mod forget;
pub mod learn;
pub mod list;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use console::{StyledObject, style};

const EXAMPLES: &str = "\
Examples:
  localdic list
  localdic learn ffmpeg llvm
  localdic forget llvm ffmpeg";

const FORGET_EXAMPLES: &str = "\
Examples:
  localdic forget llvm ffmpeg    remove words by value
  localdic forget 2 6            remove words by the indexes shown by `localdic list`
  localdic forget 2 llvm         mix indexes and words";

/// A tool for managing the local spelling dictionary on your Mac.
#[derive(Parser)]
#[command(name = "localdic", version, about, long_about = None)]
#[command(propagate_version = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all words in the local dictionary.
    #[command(alias = "ls")]
    List,

    /// Save words to the local dictionary.
    Learn {
        /// Words to add. Words already in the dictionary are skipped.
        #[arg(required = true, value_name = "WORD")]
        words: Vec<String>,
    },

    /// Remove words from the local dictionary.
    #[command(after_help = FORGET_EXAMPLES)]
    Forget {
        /// Words or zero-based indexes to remove.
        #[arg(required = true, value_name = "WORD_OR_INDEX")]
        selectors: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// "word" or "words" for a count.
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Dictionary words are printed cyan by every command.
pub(crate) fn styled_word(word: &str) -> StyledObject<&str> {
    style(word).cyan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_words_are_styled_cyan() {
        let rendered = styled_word("llvm").force_styling(true).to_string();
        assert!(rendered.contains("\u{1b}[36m"));
        assert!(rendered.contains("llvm"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["localdic"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_learn_collects_words() {
        let cli = Cli::try_parse_from(["localdic", "learn", "ffmpeg", "llvm", "ffmpeg"]).unwrap();
        match cli.command {
            Some(Commands::Learn { words }) => assert_eq!(words, vec!["ffmpeg", "llvm", "ffmpeg"]),
            _ => panic!("expected learn"),
        }
    }

    #[test]
    fn test_learn_requires_a_word() {
        assert!(Cli::try_parse_from(["localdic", "learn"]).is_err());
    }

    #[test]
    fn test_forget_accepts_indexes_and_words() {
        let cli = Cli::try_parse_from(["localdic", "forget", "2", "llvm"]).unwrap();
        match cli.command {
            Some(Commands::Forget { selectors }) => assert_eq!(selectors, vec!["2", "llvm"]),
            _ => panic!("expected forget"),
        }
    }

    #[test]
    fn test_forget_requires_a_selector() {
        assert!(Cli::try_parse_from(["localdic", "forget"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["localdic", "list", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_ls_alias() {
        let cli = Cli::try_parse_from(["localdic", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_version_flag_exits_with_display_version() {
        let err = Cli::try_parse_from(["localdic", "--version"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(3), "s");
    }
}
