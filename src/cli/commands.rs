// src/cli/commands.rs
use std::path::PathBuf;
use clap::{Args, Subcommand};

use crate::core::config::Config;
use crate::models::{CharClass, CustomWordList, GenerationConfig, GenerationMode};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password or PIN
    Generate(GenerateArgs),

    /// Estimate the strength of a password
    Assess {
        /// Password to assess
        #[arg(required = true)]
        password: String,

        /// Size of the alphabet the password was drawn from (inferred when omitted)
        #[arg(long, short)]
        alphabet_size: Option<usize>,
    },

    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "API_ADDRESS")]
        address: Option<String>,

        /// API server port
        #[arg(long, short, env = "API_PORT")]
        port: Option<u16>,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Length in characters (default: configured length for the mode)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Generate a numeric PIN instead of a password
    #[arg(long)]
    pub pin: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out I, L, O, i, l, o, 0 and 1
    #[arg(long)]
    pub avoid_ambiguous: bool,

    /// Word to place at the start of the password (repeatable)
    #[arg(long = "word", short = 'w')]
    pub words: Vec<String>,

    /// Also write the password to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Seed for a reproducible, non-secret password
    #[arg(long, hide = true)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn to_generation_config(&self, config: &Config) -> GenerationConfig {
        let mode = if self.pin { GenerationMode::Pin } else { GenerationMode::Password };
        let length = self.length.unwrap_or_else(|| config.default_length(mode));
        let avoid_ambiguous = self.avoid_ambiguous || config.default_avoid_ambiguous;

        if mode == GenerationMode::Pin {
            return GenerationConfig::pin(length, avoid_ambiguous);
        }

        let mut generation = GenerationConfig {
            length,
            avoid_ambiguous,
            ..GenerationConfig::default()
        };

        generation.set_class(CharClass::Upper, !self.no_upper);
        generation.set_class(CharClass::Lower, !self.no_lower);
        generation.set_class(CharClass::Digit, !self.no_digits);
        generation.set_class(CharClass::Symbol, !self.no_symbols);
        generation.custom_words = CustomWordList::from_words(&self.words).to_vec();

        generation
    }
}
