// src/models.rs
use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Password,
    Pin,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Password => write!(f, "password"),
            GenerationMode::Pin => write!(f, "PIN"),
        }
    }
}

// Variant order is the order classes are concatenated into the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase letters (A-Z)",
            CharClass::Lower => "Lowercase letters (a-z)",
            CharClass::Digit => "Numbers (0-9)",
            CharClass::Symbol => "Symbols (!@#$...)",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the composer needs for one invocation.
///
/// The caller validates `length` and, in password mode, that at least one
/// class is enabled; the composer reports an empty alphabet as an error
/// instead of guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerationConfig {
    pub mode: GenerationMode,
    pub length: usize,
    #[schema(value_type = Vec<CharClass>)]
    pub classes: BTreeSet<CharClass>,
    pub avoid_ambiguous: bool,
    pub custom_words: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Password,
            length: 16,
            classes: CharClass::ALL.into_iter().collect(),
            avoid_ambiguous: false,
            custom_words: Vec::new(),
        }
    }
}

impl GenerationConfig {
    pub fn pin(length: usize, avoid_ambiguous: bool) -> Self {
        Self {
            mode: GenerationMode::Pin,
            length,
            classes: BTreeSet::new(),
            avoid_ambiguous,
            custom_words: Vec::new(),
        }
    }

    pub fn has_class(&self, class: CharClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub text: String,
    /// Length in characters
    pub length: usize,
    /// Size of the alphabet the random characters were drawn from
    pub alphabet_size: usize,
}

impl GeneratedPassword {
    pub fn new(text: String, alphabet_size: usize) -> Self {
        let length = text.chars().count();
        Self { text, length, alphabet_size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrengthRating {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthRating {
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 28.0 {
            StrengthRating::Weak
        } else if bits < 60.0 {
            StrengthRating::Fair
        } else if bits < 80.0 {
            StrengthRating::Good
        } else {
            StrengthRating::Strong
        }
    }
}

impl std::fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthRating::Weak => write!(f, "Weak"),
            StrengthRating::Fair => write!(f, "Fair"),
            StrengthRating::Good => write!(f, "Good"),
            StrengthRating::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StrengthAssessment {
    pub entropy_bits: f64,
    pub rating: StrengthRating,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordListError {
    #[error("Custom word is empty")]
    Empty,

    #[error("Custom word '{0}' is already in the list")]
    Duplicate(String),
}

/// Caller-owned list of words to embed at the start of generated passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWordList {
    words: Vec<String>,
}

impl CustomWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from untrusted input, skipping blanks and repeats.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            if let Err(e) = list.add(word.as_ref()) {
                log::debug!("Skipping custom word: {}", e);
            }
        }
        list
    }

    pub fn add(&mut self, word: &str) -> Result<(), WordListError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordListError::Empty);
        }
        if self.words.iter().any(|w| w == word) {
            return Err(WordListError::Duplicate(word.to_string()));
        }
        self.words.push(word.to_string());
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.words.len() {
            Some(self.words.remove(index))
        } else {
            None
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Snapshot for a single generation call.
    pub fn to_vec(&self) -> Vec<String> {
        self.words.clone()
    }
}
