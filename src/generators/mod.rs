// src/generators/mod.rs
use thiserror::Error;

use crate::models::{GeneratedPassword, GenerationConfig, StrengthAssessment};

pub mod alphabet;
pub mod password;
pub mod strength;

pub use alphabet::build_alphabet;
pub use password::PasswordGenerator;
pub use strength::{assess_config, infer_alphabet_size};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("No characters available: select at least one character type")]
    EmptyAlphabet,
}

/// Generate a password with the operating system's random source.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedPassword, GeneratorError> {
    PasswordGenerator::new().generate_password(config)
}

/// Strength of `password` given the size of the alphabet it was drawn from.
pub fn assess(password: &str, alphabet_size: usize) -> StrengthAssessment {
    strength::assess(password, alphabet_size)
}
