// src/cli/handlers.rs
use anyhow::Context;
use serde::Serialize;

use crate::cli::commands::GenerateArgs;
use crate::core::config::Config;
use crate::crypto::{OsRandom, RandomSource, SeededRandom};
use crate::generators::{self, PasswordGenerator};
use crate::models::{GeneratedPassword, GenerationConfig, StrengthAssessment};
use crate::utils;

#[derive(Debug, Serialize)]
pub struct GenerationOutput {
    #[serde(flatten)]
    pub password: GeneratedPassword,
    pub strength: StrengthAssessment,
}

#[derive(Debug, Serialize)]
pub struct AssessmentOutput {
    pub alphabet_size: usize,
    #[serde(flatten)]
    pub strength: StrengthAssessment,
}

// Generate with the given source and score the result against its alphabet
pub fn generate_with<R: RandomSource>(
    rng: R,
    options: &GenerationConfig,
) -> anyhow::Result<GenerationOutput> {
    let password = PasswordGenerator::with_source(rng).generate_password(options)?;
    let strength = generators::assess(&password.text, password.alphabet_size);
    Ok(GenerationOutput { password, strength })
}

pub fn handle_generate(args: &GenerateArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let options = args.to_generation_config(config);
    if options.length == 0 || options.length > config.max_password_length {
        anyhow::bail!(
            "Length must be between 1 and {} characters",
            config.max_password_length
        );
    }

    let output = match args.seed {
        Some(seed) => {
            log::warn!("Using a fixed seed; the output is reproducible and not secret");
            generate_with(SeededRandom::new(seed), &options)?
        }
        None => generate_with(OsRandom, &options)?,
    };

    if let Some(path) = &args.output {
        utils::save_password(path, &output.password.text)
            .with_context(|| format!("Failed to save password to {}", path.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.password.text);
        println!("{}", utils::format_strength(&output.strength));
        if let Some(path) = &args.output {
            println!("💾 Saved to {}", path.display());
        }
    }

    Ok(())
}

pub fn assess_password(password: &str, alphabet_size: Option<usize>) -> AssessmentOutput {
    let alphabet_size = alphabet_size.unwrap_or_else(|| generators::infer_alphabet_size(password));
    AssessmentOutput {
        alphabet_size,
        strength: generators::assess(password, alphabet_size),
    }
}

pub fn handle_assess(password: &str, alphabet_size: Option<usize>, json: bool) -> anyhow::Result<()> {
    let output = assess_password(password, alphabet_size);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Alphabet size: {}", output.alphabet_size);
        println!("{}", utils::format_strength(&output.strength));
    }

    Ok(())
}

pub async fn handle_serve(mut config: Config, address: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(address) = address {
        config.api_address = address;
    }
    if let Some(port) = port {
        config.api_port = port;
    }

    println!("🚀 API server starting on http://{}:{}", config.api_address, config.api_port);
    println!("📖 Docs at http://{}:{}/swagger-ui/", config.api_address, config.api_port);

    crate::api::start_server(config)
        .await
        .context("API server failed")
}
