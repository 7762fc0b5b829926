// src/generators/password.rs
use crate::crypto::{self, OsRandom, RandomSource};
use crate::generators::alphabet::{build_alphabet, Alphabet};
use crate::generators::GeneratorError;
use crate::models::{GeneratedPassword, GenerationConfig, GenerationMode};

pub const WORD_SEPARATOR: char = '-';

pub struct PasswordGenerator<R = OsRandom> {
    rng: R,
}

impl PasswordGenerator<OsRandom> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRandom }
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword, GeneratorError> {
        let alphabet = build_alphabet(config);
        let text = self.compose(config, &alphabet)?;
        log::debug!(
            "Generated {} of {} characters from an alphabet of {}",
            config.mode,
            config.length,
            alphabet.size()
        );
        Ok(GeneratedPassword::new(text, alphabet.size()))
    }

    /// Build exactly `config.length` characters from `alphabet`.
    ///
    /// In password mode any custom words are shuffled, joined with `-` and
    /// placed first; the rest is random filler. The result is always cut to
    /// the requested length, so long word segments are truncated and no
    /// filler is drawn for them.
    pub fn compose(&mut self, config: &GenerationConfig, alphabet: &Alphabet) -> Result<String, GeneratorError> {
        if alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        let length = config.length;

        if config.mode == GenerationMode::Pin || config.custom_words.is_empty() {
            return Ok(self.filler(alphabet, length));
        }

        let mut segment = self.core_segment(&config.custom_words);
        let segment_len = segment.chars().count();
        let remaining = if segment_len > length {
            segment = segment.chars().take(length).collect();
            0
        } else {
            length - segment_len
        };

        segment.push_str(&self.filler(alphabet, remaining));
        Ok(segment.chars().take(length).collect())
    }

    fn core_segment(&mut self, words: &[String]) -> String {
        let mut order: Vec<&str> = words.iter().map(String::as_str).collect();
        crypto::shuffle(&mut self.rng, &mut order);
        order.join(&WORD_SEPARATOR.to_string())
    }

    fn filler(&mut self, alphabet: &Alphabet, count: usize) -> String {
        (0..count).map(|_| alphabet.sample(&mut self.rng)).collect()
    }
}
