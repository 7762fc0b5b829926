// src/generators/strength.rs
use crate::generators::alphabet::{build_alphabet, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use crate::models::{GenerationConfig, StrengthAssessment, StrengthRating};

/// Entropy of `length` characters drawn uniformly from `alphabet_size`.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if length == 0 || alphabet_size <= 1 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

/// Score a password that was drawn from an alphabet of `alphabet_size`.
pub fn assess(password: &str, alphabet_size: usize) -> StrengthAssessment {
    let bits = entropy_bits(password.chars().count(), alphabet_size);
    StrengthAssessment {
        entropy_bits: bits,
        rating: StrengthRating::from_entropy(bits),
    }
}

/// Score a configuration before anything is generated.
pub fn assess_config(config: &GenerationConfig) -> StrengthAssessment {
    let bits = entropy_bits(config.length, build_alphabet(config).size());
    StrengthAssessment {
        entropy_bits: bits,
        rating: StrengthRating::from_entropy(bits),
    }
}

// Guess the alphabet of a password we did not generate from the classes it uses.
// Anything outside ASCII letters and digits is counted as a symbol.
pub fn infer_alphabet_size(password: &str) -> usize {
    let (mut upper, mut lower, mut digit, mut symbol) = (false, false, false, false);
    for c in password.chars() {
        if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else {
            symbol = true;
        }
    }

    [
        (upper, UPPERCASE.len()),
        (lower, LOWERCASE.len()),
        (digit, DIGITS.len()),
        (symbol, SYMBOLS.len()),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, size)| size)
    .sum()
}
