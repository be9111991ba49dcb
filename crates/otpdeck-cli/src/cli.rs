//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use otpdeck_core::config::{self, Config};

#[derive(Parser)]
#[command(name = "otpdeck")]
#[command(version = "0.1")]
#[command(about = "Terminal credential deck")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // default to the interactive session
    let Some(command) = cli.command else {
        let config = Config::load().context("load config")?;
        return crate::session::run(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config::paths::config_path().display());
                Ok(())
            }
            ConfigCommands::Init => {
                let path = config::paths::config_path();
                Config::init_at(&path)?;
                println!("Created config at {}", path.display());
                Ok(())
            }
        },
    }
}
