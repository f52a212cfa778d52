use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use contract_settings::{resolve, EnvInputs, Network, Settings};

#[derive(Parser)]
#[command(name = "contract-settings")]
#[command(about = "Resolve compiler and network settings for contract builds and deployments")]
struct Cli {
    /// Env file to load before reading variables (defaults to .env if present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved settings
    Show {
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },
    /// Check that every required setting is present and well-formed
    Validate,
    /// Print one network profile as JSON
    Network {
        /// Network name (goerli/mumbai)
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Summary,
    Json,
    Toml,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // Resolved once, then passed by reference
    let env = EnvInputs::load(cli.env_file.as_deref())?;
    let settings = resolve(&env);

    match cli.command {
        Commands::Show { format } => show(&settings, format),
        Commands::Validate => {
            settings.validated()?;
            println!("Configuration is valid");
            Ok(())
        }
        Commands::Network { name } => {
            let network: Network = name.parse()?;
            let profile = settings.require_network(network)?;
            println!("{}", serde_json::to_string_pretty(profile)?);
            Ok(())
        }
    }
}

fn show(settings: &Settings, format: Format) -> Result<()> {
    match format {
        Format::Summary => print!("{}", settings.summary()),
        Format::Json => println!("{}", settings.to_framework_json()?),
        Format::Toml => print!("{}", settings.to_toml()?),
    }
    Ok(())
}
