//! Formatting utilities for terminal output

/// Describe a ladder distance in words
#[must_use]
pub fn format_distance(distance: Option<usize>) -> String {
    match distance {
        None => "unreachable".to_string(),
        Some(1) => "1 step".to_string(),
        Some(n) => format!("{n} steps"),
    }
}

/// Render `to` with the letters that differ from `from` in uppercase
///
/// Letters past the end of the shorter word count as changed.
#[must_use]
pub fn highlight_change(from: &str, to: &str) -> String {
    to.chars()
        .enumerate()
        .map(|(i, ch)| {
            if from.chars().nth(i) == Some(ch) {
                ch
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
