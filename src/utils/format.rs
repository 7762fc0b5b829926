// src/utils/format.rs
use console::{style, Style};

use crate::models::{StrengthAssessment, StrengthRating};

pub const METER_WIDTH: usize = 20;

// Entropy at which the meter is full
const METER_FULL_BITS: f64 = 100.0;

pub fn rating_style(rating: StrengthRating) -> Style {
    match rating {
        StrengthRating::Weak => Style::new().red(),
        StrengthRating::Fair => Style::new().yellow(),
        StrengthRating::Good => Style::new().green(),
        StrengthRating::Strong => Style::new().green().bright().bold(),
    }
}

/// Number of filled cells for a meter of `width` cells.
pub fn meter_fill(entropy_bits: f64, width: usize) -> usize {
    let ratio = (entropy_bits / METER_FULL_BITS).clamp(0.0, 1.0);
    (ratio * width as f64).round() as usize
}

// Plain meter text, e.g. "[#######-------------]"
pub fn strength_meter(assessment: &StrengthAssessment) -> String {
    let filled = meter_fill(assessment.entropy_bits, METER_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

pub fn format_strength(assessment: &StrengthAssessment) -> String {
    let styled = rating_style(assessment.rating);
    format!(
        "{} {} {}",
        styled.apply_to(strength_meter(assessment)),
        styled.apply_to(assessment.rating.to_string()),
        style(format!("({:.1} bits)", assessment.entropy_bits)).dim()
    )
}
