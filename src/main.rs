//! Wordrow - CLI
//!
//! Terminal word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordrow::{
    commands::{run_share, run_simple},
    engine::{GameConfig, Session},
    interactive::{App, run_tui},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordrow",
    about = "Guess the secret word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom answer list file (requires --accepted)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Custom accepted-guess list file (requires --answers)
    #[arg(long, global = true)]
    accepted: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct GameArgs {
    /// Secret word length (4-8)
    #[arg(short, long, default_value = "5")]
    length: usize,

    /// Seed for a reproducible puzzle
    #[arg(short, long)]
    seed: Option<u32>,

    /// Challenge token pinning the exact secret (wins over --length/--seed)
    #[arg(short, long)]
    challenge: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(GameArgs),

    /// Line-based CLI mode without the TUI
    Simple(GameArgs),

    /// Print the challenge token for a word
    Share {
        /// Word to share
        word: String,
    },
}

/// Load the word lists from the --answers/--accepted overrides, or use the
/// embedded ones
fn load_dictionary(answers: Option<&PathBuf>, accepted: Option<&PathBuf>) -> Result<Dictionary> {
    match (answers, accepted) {
        (None, None) => Ok(Dictionary::embedded()),
        (Some(answers_path), Some(accepted_path)) => {
            let answers = load_from_file(answers_path)
                .with_context(|| format!("reading {}", answers_path.display()))?;
            let accepted = load_from_file(accepted_path)
                .with_context(|| format!("reading {}", accepted_path.display()))?;
            Ok(Dictionary::new(answers, accepted))
        }
        _ => bail!("--answers and --accepted must be used together"),
    }
}

fn game_config(args: &GameArgs) -> Result<GameConfig> {
    if args.challenge.is_none() && !(4..=8).contains(&args.length) {
        bail!("word length must be between 4 and 8, got {}", args.length);
    }

    Ok(GameConfig {
        word_length: args.length,
        seed: args.seed,
        challenge: args.challenge.clone(),
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.answers.as_ref(), cli.accepted.as_ref())?;

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or(Commands::Play(GameArgs {
            length: 5,
            seed: None,
            challenge: None,
        }));

    match command {
        Commands::Play(args) => {
            let config = game_config(&args)?;
            let session = Session::new(&dictionary, &config)?;
            run_tui(App::new(session))
        }
        Commands::Simple(args) => {
            let config = game_config(&args)?;
            run_simple(&dictionary, &config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Share { word } => {
            run_share(&dictionary, &word).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
