//! Formatting utilities for terminal output

use crate::core::letter_count;

/// Format a count as a circled number (`5` -> `⑤`)
///
/// Counts without a circled glyph fall back to `(n)`.
#[must_use]
pub fn circled_number(n: usize) -> String {
    match n {
        0 => "⓪".to_string(),
        1..=20 => char::from_u32(0x2460 + n as u32 - 1)
            .map_or_else(|| format!("({n})"), |ch| ch.to_string()),
        _ => format!("({n})"),
    }
}

/// Format a used word with its length badge
#[must_use]
pub fn word_with_length(word: &str) -> String {
    format!("{} {word}", circled_number(letter_count(word)))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the best possible score reached, as a bar
#[must_use]
pub fn score_bar(score: usize, max_score: usize, width: usize) -> String {
    create_progress_bar(score as f64, max_score as f64, width)
}
