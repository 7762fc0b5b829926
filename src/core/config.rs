// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::models::{GenerationConfig, GenerationMode};

// Runtime configuration for the generator front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_pin_length: usize,
    pub default_avoid_ambiguous: bool,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Web Interface
    pub api_address: String,
    pub api_port: u16,

    // Output
    pub output_file: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,
            default_pin_length: 4,
            default_avoid_ambiguous: false,
            min_password_length: 4,
            max_password_length: 128,

            // Web Interface
            api_address: "127.0.0.1".to_string(),
            api_port: 5000,

            // Output
            output_file: PathBuf::from("generated-password.txt"),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    // Load configuration from an arbitrary key lookup
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        set_parsed(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length);
        set_parsed(&lookup, "DEFAULT_PIN_LENGTH", &mut config.default_pin_length);
        set_parsed(&lookup, "DEFAULT_AVOID_AMBIGUOUS", &mut config.default_avoid_ambiguous);
        set_parsed(&lookup, "MIN_PASSWORD_LENGTH", &mut config.min_password_length);
        set_parsed(&lookup, "MAX_PASSWORD_LENGTH", &mut config.max_password_length);

        if config.min_password_length == 0 {
            log::warn!("MIN_PASSWORD_LENGTH must be at least 1, using 1");
            config.min_password_length = 1;
        }
        if config.max_password_length < config.min_password_length {
            log::warn!(
                "MAX_PASSWORD_LENGTH {} is below the minimum, using {}",
                config.max_password_length,
                config.min_password_length
            );
            config.max_password_length = config.min_password_length;
        }
        config.default_password_length = config.clamp_length(config.default_password_length);
        config.default_pin_length = config.clamp_length(config.default_pin_length);

        // Web Interface
        if let Some(address) = lookup("API_ADDRESS") {
            config.api_address = address;
        }
        set_parsed(&lookup, "API_PORT", &mut config.api_port);

        // Output
        if let Some(file) = lookup("OUTPUT_FILE") {
            config.output_file = PathBuf::from(file);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE").filter(|f| !f.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_password_length, self.max_password_length)
    }

    pub fn length_in_bounds(&self, length: usize) -> bool {
        (self.min_password_length..=self.max_password_length).contains(&length)
    }

    pub fn default_length(&self, mode: GenerationMode) -> usize {
        match mode {
            GenerationMode::Password => self.default_password_length,
            GenerationMode::Pin => self.default_pin_length,
        }
    }

    // Starting point for an interactive session or a request with no overrides
    pub fn default_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_password_length,
            avoid_ambiguous: self.default_avoid_ambiguous,
            ..GenerationConfig::default()
        }
    }
}

fn set_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring invalid value '{}' for {}", val, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.default_pin_length, 4);
        assert_eq!(config.api_port, 5000);
        assert_eq!(config.api_address, "127.0.0.1");
        assert_eq!(config.output_file, PathBuf::from("generated-password.txt"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn environment_overrides() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_AVOID_AMBIGUOUS", "true"),
            ("API_PORT", "8080"),
            ("LOG_LEVEL", "DEBUG"),
            ("OUTPUT_FILE", "/tmp/pw.txt"),
        ]);
        assert_eq!(config.default_password_length, 24);
        assert!(config.default_avoid_ambiguous);
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.output_file, PathBuf::from("/tmp/pw.txt"));

        let generation = config.default_generation_config();
        assert_eq!(generation.length, 24);
        assert!(generation.avoid_ambiguous);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let config = load(&[
            ("DEFAULT_PASSWORD_LENGTH", "lots"),
            ("API_PORT", "99999"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.api_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn defaults_are_clamped_into_bounds() {
        let config = load(&[
            ("MIN_PASSWORD_LENGTH", "0"),
            ("MAX_PASSWORD_LENGTH", "10"),
            ("DEFAULT_PASSWORD_LENGTH", "32"),
        ]);
        assert_eq!(config.min_password_length, 1);
        assert_eq!(config.default_password_length, 10);
        assert!(config.length_in_bounds(1));
        assert!(!config.length_in_bounds(11));
        assert_eq!(config.default_length(GenerationMode::Pin), 4);
    }
}
