// src/cli/menu.rs
use inquire::{Confirm, CustomType, InquireError, MultiSelect, Select, Text};

use crate::cli::handlers::generate_with;
use crate::core::config::Config;
use crate::crypto::OsRandom;
use crate::generators;
use crate::models::{CharClass, CustomWordList, GeneratedPassword, GenerationConfig, GenerationMode};
use crate::utils;

const GENERATE: &str = "🎲  Generate";
const LENGTH: &str = "📏  Change length";
const MODE: &str = "🔀  Switch password / PIN";
const CLASSES: &str = "🔤  Choose character types";
const AMBIGUOUS: &str = "👓  Toggle avoid ambiguous characters";
const ADD_WORD: &str = "➕  Add custom word";
const REMOVE_WORD: &str = "➖  Remove custom word";
const SAVE: &str = "💾  Save last password to file";
const QUIT: &str = "🚪  Quit";

/// Settings and results that live for one interactive session.
pub struct MenuState {
    pub options: GenerationConfig,
    pub words: CustomWordList,
    pub last: Option<GeneratedPassword>,
}

impl MenuState {
    pub fn new(config: &Config) -> Self {
        Self {
            options: config.default_generation_config(),
            words: CustomWordList::new(),
            last: None,
        }
    }

    /// Options for the next generation, with the current word list attached.
    pub fn snapshot(&self) -> GenerationConfig {
        let mut options = self.options.clone();
        options.custom_words = self.words.to_vec();
        options
    }

    pub fn switch_mode(&mut self, config: &Config) {
        let mode = match self.options.mode {
            GenerationMode::Password => GenerationMode::Pin,
            GenerationMode::Pin => GenerationMode::Password,
        };
        self.options.mode = mode;
        self.options.length = config.default_length(mode);
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} · {} chars", self.options.mode, self.options.length)];
        if self.options.mode == GenerationMode::Password {
            let classes: Vec<&str> = self
                .options
                .classes
                .iter()
                .map(|c| match c {
                    CharClass::Upper => "A-Z",
                    CharClass::Lower => "a-z",
                    CharClass::Digit => "0-9",
                    CharClass::Symbol => "!@#",
                })
                .collect();
            parts.push(if classes.is_empty() { "no character types".to_string() } else { classes.join(" ") });
            if !self.words.is_empty() {
                parts.push(format!("words: {}", self.words.words().join(", ")));
            }
        }
        if self.options.avoid_ambiguous {
            parts.push("no ambiguous".to_string());
        }
        parts.join(" | ")
    }
}

pub fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSFORGE GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = MenuState::new(config);
    generate(&mut state);

    loop {
        println!();
        println!("⚙️  {}", state.summary());
        println!("Preview: {}", utils::format_strength(&generators::assess_config(&state.snapshot())));

        let mut choices = vec![GENERATE, LENGTH, MODE];
        if state.options.mode == GenerationMode::Password {
            choices.extend([CLASSES, AMBIGUOUS, ADD_WORD]);
            if !state.words.is_empty() {
                choices.push(REMOVE_WORD);
            }
        } else {
            choices.push(AMBIGUOUS);
        }
        if state.last.is_some() {
            choices.push(SAVE);
        }
        choices.push(QUIT);

        let selection = match Select::new("What would you like to do?", choices).prompt() {
            Ok(selection) => selection,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match selection {
            GENERATE => generate(&mut state),
            LENGTH => {
                let length = CustomType::<usize>::new("Length:")
                    .with_default(state.options.length)
                    .with_error_message("Please enter a whole number")
                    .prompt()?;
                if config.length_in_bounds(length) {
                    state.options.length = length;
                } else {
                    println!(
                        "❌ Length must be between {} and {}",
                        config.min_password_length, config.max_password_length
                    );
                }
            }
            MODE => state.switch_mode(config),
            CLASSES => {
                let defaults: Vec<usize> = CharClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| state.options.has_class(**c))
                    .map(|(i, _)| i)
                    .collect();
                let chosen = MultiSelect::new("Character types:", CharClass::ALL.to_vec())
                    .with_default(&defaults)
                    .prompt()?;
                if chosen.is_empty() {
                    println!("❌ Please select at least one character type for password generation.");
                } else {
                    state.options.classes = chosen.into_iter().collect();
                }
            }
            AMBIGUOUS => {
                state.options.avoid_ambiguous = !state.options.avoid_ambiguous;
            }
            ADD_WORD => {
                let word = Text::new("Custom word:").prompt()?;
                match state.words.add(&word) {
                    Ok(()) => println!("✅ Added '{}'", word.trim()),
                    Err(e) => println!("❌ {}", e),
                }
            }
            REMOVE_WORD => {
                let words = state.words.to_vec();
                let word = Select::new("Remove which word?", words.clone()).prompt()?;
                if let Some(index) = words.iter().position(|w| *w == word) {
                    state.words.remove(index);
                    println!("🗑️  Removed '{}'", word);
                }
            }
            SAVE => save_last(&state, config)?,
            QUIT => break,
            _ => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate(state: &mut MenuState) {
    match generate_with(OsRandom, &state.snapshot()) {
        Ok(output) => {
            println!("\n🔑 {}", output.password.text);
            println!("{}", utils::format_strength(&output.strength));
            state.last = Some(output.password);
        }
        Err(e) => println!("❌ {}", e),
    }
}

fn save_last(state: &MenuState, config: &Config) -> anyhow::Result<()> {
    let Some(password) = &state.last else {
        return Ok(());
    };

    let default_path = utils::resolve_output_path(&config.output_file);
    let path = Text::new("Save to:")
        .with_default(&default_path.to_string_lossy())
        .prompt()?;

    let path = std::path::PathBuf::from(path);
    if path.exists() && !Confirm::new("File exists. Overwrite?").with_default(false).prompt()? {
        return Ok(());
    }

    match utils::save_password(&path, &password.text) {
        Ok(()) => println!("✅ Saved to {}", path.display()),
        Err(e) => println!("❌ Failed to save password: {}", e),
    }
    Ok(())
}
