use anyhow::Result;
use clap::{Parser, Subcommand};
use issues::commands::{Command, CommandContext, EndpointsCommand, OpenCommand};
use issues::{config::Config, constants, logging};

#[derive(Parser)]
#[command(name = "issues")]
#[command(about = "A cli tool to browse the issues of hosted repositories")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the open issues of a repository
    Open {
        /// Repository as owner/name or a clone URL
        repository: String,

        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,

        /// Tracker API base URL (overrides config and ISSUES_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show the URL templates of the tracker API
    Endpoints {
        /// Configuration file path
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        config: String,

        /// Tracker API base URL (overrides config and ISSUES_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Open {
            repository,
            config,
            base_url,
            json,
        } => {
            let context = build_context(&config, base_url)?;
            OpenCommand { repository, json }.execute(&context).await?;
        }
        Commands::Endpoints { config, base_url } => {
            let context = build_context(&config, base_url)?;
            EndpointsCommand.execute(&context).await?;
        }
    }

    Ok(())
}

/// Config file, then environment, then command line flags
fn build_context(config_path: &str, base_url: Option<String>) -> Result<CommandContext> {
    let mut config = Config::load_or_default(config_path)?;
    config.apply_env();

    if let Some(base_url) = base_url {
        config.base_url = Some(base_url);
    }

    Ok(CommandContext { config })
}
