// src/generators/alphabet.rs
use crate::crypto::{self, RandomSource};
use crate::models::{CharClass, GenerationConfig, GenerationMode};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

// Same sets without I/L/O, i/l/o and 0/1
pub const UPPERCASE_UNAMBIGUOUS: &str = "ABCDEFGHJKMNPQRSTUVWXYZ";
pub const LOWERCASE_UNAMBIGUOUS: &str = "abcdefghjkmnpqrstuvwxyz";
pub const DIGITS_UNAMBIGUOUS: &str = "23456789";

/// Characters a generated password may draw from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// One uniformly chosen character. The alphabet must not be empty.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> char {
        self.chars[crypto::uniform_index(rng, self.chars.len())]
    }

    fn push_set(&mut self, set: &str) {
        self.chars.extend(set.chars());
    }
}

#[cfg(test)]
impl Alphabet {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Character set for one class, honouring the ambiguity filter.
pub fn class_chars(class: CharClass, avoid_ambiguous: bool) -> &'static str {
    match (class, avoid_ambiguous) {
        (CharClass::Upper, false) => UPPERCASE,
        (CharClass::Upper, true) => UPPERCASE_UNAMBIGUOUS,
        (CharClass::Lower, false) => LOWERCASE,
        (CharClass::Lower, true) => LOWERCASE_UNAMBIGUOUS,
        (CharClass::Digit, false) => DIGITS,
        (CharClass::Digit, true) => DIGITS_UNAMBIGUOUS,
        (CharClass::Symbol, _) => SYMBOLS,
    }
}

/// Resolve the alphabet for a configuration.
///
/// PIN mode ignores `classes` and always yields digits. In password mode the
/// enabled classes are concatenated in `CharClass` order; an empty result
/// means nothing can be generated.
pub fn build_alphabet(config: &GenerationConfig) -> Alphabet {
    let mut alphabet = Alphabet::default();

    match config.mode {
        GenerationMode::Pin => {
            alphabet.push_set(class_chars(CharClass::Digit, config.avoid_ambiguous));
        }
        GenerationMode::Password => {
            for class in &config.classes {
                alphabet.push_set(class_chars(*class, config.avoid_ambiguous));
            }
        }
    }

    alphabet
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn password_config(classes: &[CharClass], avoid_ambiguous: bool) -> GenerationConfig {
        GenerationConfig {
            classes: classes.iter().copied().collect(),
            avoid_ambiguous,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn class_set_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 32);
        assert_eq!(UPPERCASE_UNAMBIGUOUS.len(), 23);
        assert_eq!(LOWERCASE_UNAMBIGUOUS.len(), 23);
        assert_eq!(DIGITS_UNAMBIGUOUS.len(), 8);
    }

    #[test]
    fn symbols_are_unique_ascii_punctuation() {
        let unique: BTreeSet<char> = SYMBOLS.chars().collect();
        assert_eq!(unique.len(), 32);
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn alphanumeric_alphabet_has_62_characters() {
        let config = password_config(&[CharClass::Upper, CharClass::Lower, CharClass::Digit], false);
        assert_eq!(build_alphabet(&config).size(), 62);
    }

    #[test]
    fn every_class_reduced() {
        let config = password_config(&CharClass::ALL, true);
        let alphabet = build_alphabet(&config);
        assert_eq!(alphabet.size(), 23 + 23 + 8 + 32);
        for c in ['I', 'L', 'O', 'i', 'l', 'o', '0', '1'] {
            assert!(!alphabet.contains(c), "{c} should be excluded");
        }
    }

    #[test]
    fn classes_concatenate_in_fixed_order() {
        let config = password_config(&[CharClass::Symbol, CharClass::Digit], false);
        let alphabet = build_alphabet(&config);
        let text: String = alphabet.chars().iter().collect();
        assert_eq!(text, format!("{DIGITS}{SYMBOLS}"));
    }

    #[test]
    fn pin_alphabet_ignores_classes() {
        let mut config = GenerationConfig::pin(4, false);
        config.classes = CharClass::ALL.into_iter().collect();
        assert_eq!(build_alphabet(&config).chars().iter().collect::<String>(), DIGITS);

        let config = GenerationConfig::pin(4, true);
        assert_eq!(build_alphabet(&config).chars().iter().collect::<String>(), "23456789");
    }

    #[test]
    fn no_classes_gives_empty_alphabet() {
        let config = password_config(&[], false);
        assert!(build_alphabet(&config).is_empty());
    }
}
