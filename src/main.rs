//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build scored sub-words from a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{CheckConfig, analyze_root, check_words, run_simple},
    dictionary::{Language, WordListDictionary},
    output::{print_analysis_result, print_check_result},
    validation::Validator,
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    start_words: Option<PathBuf>,

    /// Dictionary word list, one word per line (default: built-in English dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Dictionary language code
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Seed for root word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Submit words against a given root word and show the score
    Check {
        /// Root word to play against
        #[arg(short, long)]
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word that can be made from a root word
    Analyze {
        /// Root word to analyze
        root: String,
    },
}

/// Load the root word list from the -w flag, or the built-in list
///
/// A list that cannot be read is fatal: there is no session without root words.
fn load_start_words(path: Option<&PathBuf>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Could not load root words from {}", path.display())),
        None => Ok(words_from_slice(START_WORDS)),
    }
}

/// Load the dictionary from the -d flag, or the built-in English dictionary
///
/// The -l language only tags a -d file; the built-in dictionary stays English.
fn load_dictionary(path: Option<&PathBuf>, language: &Language) -> Result<WordListDictionary> {
    WordListDictionary::load(path.map(PathBuf::as_path), language.clone()).with_context(|| {
        format!(
            "Could not load dictionary from {}",
            path.map_or_else(|| "<built-in>".into(), |p| p.display().to_string())
        )
    })
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `default_filter`
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log lines would tear through the alternate screen, so the TUI stays quiet by default
    let tui = matches!(cli.command, None | Some(Commands::Play));
    init_tracing(if tui { "off" } else { "word_scramble=warn" });

    let language = Language::new(cli.language.clone());

    let start_words = load_start_words(cli.start_words.as_ref())?;
    let dictionary = load_dictionary(cli.dictionary.as_ref(), &language)?;
    tracing::info!(
        start_words = start_words.len(),
        dictionary = dictionary.len(),
        %language,
        "Loaded word lists"
    );

    let validator = Validator::new(&dictionary, language.clone());
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(validator, &start_words, rng),
        Commands::Simple => {
            let mut rng = rng;
            run_simple(&validator, &start_words, &mut rng)
        }
        Commands::Check { root, words } => {
            let result = check_words(CheckConfig::new(root, words), &validator);
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { root } => {
            let result =
                analyze_root(&root, &dictionary, &language).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    validator: Validator<'_, WordListDictionary>,
    start_words: &[String],
    rng: StdRng,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(validator, start_words, rng);
    run_tui(app)
}
