//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format a feedback code as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .digits()
        .iter()
        .map(|&digit| match digit {
            2 => '🟩', // Exact
            1 => '🟨', // Present elsewhere
            _ => '⬜', // Absent
        })
        .collect()
}

/// Format a feedback code as its typed digit string
#[must_use]
pub fn feedback_to_digits(feedback: Feedback) -> String {
    feedback
        .digits()
        .iter()
        .map(|&digit| char::from(b'0' + digit))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an information score (nats) as a bar
#[must_use]
pub fn score_bar(nats: f64, width: usize) -> String {
    let max_nats = 8.0; // Roughly ln of a few-thousand-word vocabulary
    create_progress_bar(nats, max_nats, width)
}
