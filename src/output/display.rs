//! Display functions for command results

use super::formatters::{circled_number, score_bar, word_with_length};
use crate::commands::{AnalysisResult, CheckResult};
use crate::core::letter_count;
use crate::session::Outcome;
use colored::Colorize;

/// Print what happened to one submission
///
/// Ignored submissions print nothing.
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Ignored => {}
        Outcome::Accepted { word, points } => {
            println!(
                "  {} {} {}",
                "✓".green().bold(),
                word.bright_white().bold(),
                format!("+{points}").bright_cyan()
            );
        }
        Outcome::Rejected(reason) => {
            println!("  {} {}", "✗".red().bold(), reason.title().red().bold());
            println!("    {}", reason.message().bright_black());
        }
    }
}

/// Print the used-word list, most recent first
pub fn print_used_words(used_words: &[String]) {
    if used_words.is_empty() {
        println!("  {}", "No words yet".bright_black());
        return;
    }

    for word in used_words {
        println!("  {}", word_with_length(word));
    }
}

/// Print the result of checking a list of words
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Root word: {}", result.root.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        if step.outcome == Outcome::Ignored {
            continue;
        }
        println!("\n{}", step.input.trim().to_uppercase());
        print_outcome(&step.outcome);
    }

    println!();
    println!(
        "{}",
        format!(
            "Score: {} ({} of {} accepted)",
            result.score,
            result.accepted(),
            result.steps.len()
        )
        .green()
        .bold()
    );
}

/// Print the result of root word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} dictionary words:",
        result.dictionary_size
    );
    println!("   Playable words: {}", result.words.len());
    println!(
        "   Max score:      {}",
        result.max_score.to_string().bright_yellow().bold()
    );

    let mut current_len = None;
    for word in &result.words {
        let len = letter_count(word);
        if current_len != Some(len) {
            current_len = Some(len);
            println!("\n{} {}", circled_number(len), "letters".bright_black());
        }
        println!("   {word}");
    }
}

/// Print a one-line score summary with a progress bar toward `max_score`
pub fn print_score_summary(score: usize, max_score: Option<usize>) {
    match max_score {
        Some(max) => println!(
            "Score: {} [{}] dictionary max {max}",
            score.to_string().bright_yellow().bold(),
            score_bar(score, max, 20).green()
        ),
        None => println!("Score: {}", score.to_string().bright_yellow().bold()),
    }
}
