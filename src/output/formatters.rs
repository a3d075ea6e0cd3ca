//! Formatting utilities for terminal output

use crate::core::Match;

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

/// Bar showing a score relative to the best score in a result set
#[must_use]
pub fn score_bar(score: u32, best: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(best), width)
}

/// One plain-text result line: rank, padded word and score
#[must_use]
pub fn format_match(rank: usize, m: &Match, word_width: usize) -> String {
    format!(
        "{rank:>3}. {:<word_width$} {:>3}",
        m.word(),
        m.score()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_relative_to_best() {
        assert_eq!(score_bar(16, 16, 4), "████");
        assert_eq!(score_bar(8, 16, 4), "██░░");
    }

    #[test]
    fn format_match_pads_columns() {
        let line = format_match(1, &Match::new("CAT", 5), 6);
        assert_eq!(line, "  1. CAT      5");
    }
}
