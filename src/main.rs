use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod utils;
mod models;
mod crypto;
mod generators;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        builder.target(env_logger::Target::Pipe(Box::new(std::fs::File::create(log_file)?)));
    }

    builder.try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config)?;

    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate(generate_args)) => {
            cli::handlers::handle_generate(&generate_args, &config, args.json)
        }
        Some(CliCommand::Assess { password, alphabet_size }) => {
            cli::handlers::handle_assess(&password, alphabet_size, args.json)
        }
        Some(CliCommand::Serve { address, port }) => {
            cli::handlers::handle_serve(config, address, port).await
        }
        None => cli::menu::run_cli_menu(&config),
    }
}
