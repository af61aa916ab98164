//! Percentage-based rating thresholds and score display helpers.
//!
//! One canonical threshold table is used everywhere, including the
//! overflow-clamp path: ≥95 Exemplary, ≥75 Strong, ≥55 Moderate, ≥35 Weak,
//! >0 Very Poor, else Invalid.

use crate::credibility::Rating;

/// Map a score percentage (0–100) to its qualitative rating.
pub fn rating_for_percentage(percentage: f64) -> Rating {
    if percentage >= 95.0 {
        Rating::Exemplary
    } else if percentage >= 75.0 {
        Rating::Strong
    } else if percentage >= 55.0 {
        Rating::Moderate
    } else if percentage >= 35.0 {
        Rating::Weak
    } else if percentage > 0.0 {
        Rating::VeryPoor
    } else {
        Rating::Invalid
    }
}

/// Normalize a score with a dynamic maximum onto the 0–10 display scale.
/// Invalid maximums yield 0.
pub fn normalized_score(total_score: f64, max_total_score: f64) -> f64 {
    if max_total_score <= 0.0 || !total_score.is_finite() || !max_total_score.is_finite() {
        return 0.0;
    }
    (total_score / max_total_score) * 10.0
}

/// Percentage of the maximum, rounded to the nearest whole number.
pub fn score_percentage(total_score: f64, max_total_score: f64) -> i64 {
    if max_total_score <= 0.0 {
        return 0;
    }
    ((total_score / max_total_score) * 100.0).round() as i64
}

/// Format a score for display on the 0–10 scale, e.g. "8.9/10".
pub fn format_normalized_score(total_score: f64, max_total_score: f64, decimals: usize) -> String {
    format!(
        "{:.*}/10",
        decimals,
        normalized_score(total_score, max_total_score)
    )
}
