use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use starfall::cli::{self, SubmitArgs};

/// starfall - Starfall Web Design website
#[derive(Parser)]
#[command(name = "starfall")]
#[command(about = "Marketing site and contact form relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a contact form submission to a running server
    Submit(SubmitArgs),
    /// Validate the configuration and print a summary
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = starfall::config::Config::load(cli.config.clone())?;

    starfall::observability::init_logging(&config.observability.log_level, config.environment)?;

    match cli.command {
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow!(e))?;
            cli::serve(config, host, port).await
        }
        Commands::Submit(args) => cli::submit(args).await,
        Commands::CheckConfig => cli::check_config(&config),
    }
}
