//! localdic entry point.
//!
//! Binary name: `localdic`
//!
//! Parses CLI arguments, resolves the dictionary location, then dispatches
//! to the appropriate command handler.

mod cli;
mod state;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,localdic=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "localdic", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init()?;
    tracing::debug!(
        path = %state.config.dictionary_path.display(),
        service = %state.config.spell_service,
        "using dictionary"
    );

    match command {
        Commands::List => {
            cli::list::list_words(&state.dictionary, cli.json)?;
        }

        Commands::Learn { words } => {
            cli::learn::learn_words(&state.dictionary, &words, cli.json)?;
        }

        Commands::Forget { selectors } => {
            cli::forget::forget_words(&state.dictionary, &selectors, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
