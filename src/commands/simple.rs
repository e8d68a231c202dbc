//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use super::analyze::analyze_root;
use crate::dictionary::WordListDictionary;
use crate::output::display::print_score_summary;
use crate::output::{print_outcome, print_used_words};
use crate::session::{GameSession, Outcome};
use crate::validation::Validator;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewGame,
    ListWords,
    Help,
    Unknown(&'a str),
    Submit(&'a str),
}

impl<'a> Command<'a> {
    /// Lines starting with `/` are commands, anything else is a submission
    fn parse(line: &'a str) -> Self {
        match line.trim().strip_prefix('/') {
            Some("quit" | "q" | "exit") => Self::Quit,
            Some("new" | "n") => Self::NewGame,
            Some("words" | "w") => Self::ListWords,
            Some("help" | "h" | "?") => Self::Help,
            Some(other) => Self::Unknown(other),
            None => Self::Submit(line),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the prompt.
pub fn run_simple<R: Rng + ?Sized>(
    validator: &Validator<'_, WordListDictionary>,
    word_list: &[String],
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Each word scores one point per letter.\n");
    print_help();

    let mut session = GameSession::start(word_list, rng);
    let mut max_score = max_score_for(&session, validator);
    print_root(&session, max_score);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next() else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let line = line.context("Failed to read input")?;

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing! Final score: {}\n", session.score());
                return Ok(());
            }
            Command::NewGame => {
                println!("\nFinal score: {}", session.score());
                session.restart(word_list, rng);
                max_score = max_score_for(&session, validator);
                println!("\n🔄 New game started!");
                print_root(&session, max_score);
            }
            Command::ListWords => {
                print_used_words(session.used_words());
                print_score_summary(session.score(), max_score);
            }
            Command::Help => print_help(),
            Command::Unknown(other) => {
                println!("❌ Unknown command '/{other}'. Type /help for commands.");
            }
            Command::Submit(text) => {
                let outcome = session.submit_word(text, validator);
                print_outcome(&outcome);
                if let Outcome::Accepted { .. } = outcome {
                    print_score_summary(session.score(), max_score);
                }
            }
        }
    }
}

fn max_score_for(
    session: &GameSession,
    validator: &Validator<'_, WordListDictionary>,
) -> Option<usize> {
    analyze_root(
        session.root_word().text(),
        validator.dictionary(),
        validator.language(),
    )
    .ok()
    .map(|analysis| analysis.max_score)
}

fn print_root(session: &GameSession, max_score: Option<usize>) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Root word: {}",
        session.root_word().text().to_uppercase().bright_yellow().bold()
    );
    if let Some(max) = max_score {
        // Case-variant resubmissions can push the score past this
        println!("Dictionary max: {max} points");
    }
    println!("────────────────────────────────────────────────────────────\n");
}

fn print_help() {
    println!("Commands: /words to list your words, /new for a new root word, /quit to exit\n");
}
