// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::config::Config;
use crate::models::{CharClass, CustomWordList, GenerationConfig, GenerationMode, StrengthAssessment, StrengthRating};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// "password" or "pin" (default: password)
    pub mode: Option<GenerationMode>,
    /// Length in characters (default: configured length for the mode)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Leave out I, L, O, i, l, o, 0 and 1 (default: configured value)
    pub avoid_ambiguous: Option<bool>,
    /// Words placed at the start of the password, in random order
    pub custom_words: Option<Vec<String>>,
}

impl PasswordGenerationRequest {
    pub fn to_generation_config(&self, config: &Config) -> GenerationConfig {
        let mode = self.mode.unwrap_or(GenerationMode::Password);
        let length = self.length.unwrap_or_else(|| config.default_length(mode));
        let avoid_ambiguous = self.avoid_ambiguous.unwrap_or(config.default_avoid_ambiguous);

        if mode == GenerationMode::Pin {
            return GenerationConfig::pin(length, avoid_ambiguous);
        }

        let mut generation = GenerationConfig {
            length,
            avoid_ambiguous,
            ..GenerationConfig::default()
        };

        generation.set_class(CharClass::Upper, self.include_uppercase.unwrap_or(true));
        generation.set_class(CharClass::Lower, self.include_lowercase.unwrap_or(true));
        generation.set_class(CharClass::Digit, self.include_numbers.unwrap_or(true));
        generation.set_class(CharClass::Symbol, self.include_symbols.unwrap_or(true));

        if let Some(words) = &self.custom_words {
            generation.custom_words = CustomWordList::from_words(words).to_vec();
        }

        generation
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Length of the password in characters
    pub length: Option<usize>,
    /// Entropy estimate and rating
    pub strength: Option<StrengthAssessment>,
    /// Size of the alphabet the password was drawn from
    pub alphabet_size: Option<usize>,
    /// When the password was generated
    pub generated_at: Option<DateTime<Utc>>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            length: None,
            strength: None,
            alphabet_size: None,
            generated_at: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthPreviewResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Entropy estimate and rating for a password of the requested settings
    pub strength: Option<StrengthAssessment>,
    /// Size of the alphabet the settings resolve to
    pub alphabet_size: usize,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnalysisQuery {
    /// Alphabet size the password was drawn from (default: inferred)
    pub alphabet_size: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Entropy in bits
    pub entropy_bits: f64,
    /// Rating derived from the entropy
    pub rating: StrengthRating,
    /// Alphabet size used for the estimate
    pub alphabet_size: usize,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_uses_configured_defaults() {
        let config = Config::default();
        let generation = PasswordGenerationRequest::default().to_generation_config(&config);
        assert_eq!(generation, config.default_generation_config());
    }

    #[test]
    fn pin_request_defaults_to_pin_length() {
        let config = Config::default();
        let request = PasswordGenerationRequest {
            mode: Some(GenerationMode::Pin),
            ..Default::default()
        };
        assert_eq!(request.to_generation_config(&config).length, config.default_pin_length);
    }

    #[test]
    fn request_words_are_cleaned() {
        let request = PasswordGenerationRequest {
            include_symbols: Some(false),
            custom_words: Some(vec![" sun ".to_string(), "".to_string(), "sun".to_string()]),
            ..Default::default()
        };
        let generation = request.to_generation_config(&Config::default());
        assert_eq!(generation.custom_words, vec!["sun".to_string()]);
        assert!(!generation.has_class(CharClass::Symbol));
        assert!(generation.has_class(CharClass::Upper));
    }
}
