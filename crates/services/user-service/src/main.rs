//! User Service - command-line front end for the user use cases.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::UserServiceConfig;
use user_service_lib::UserCommand;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management against a relational store")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// User name (3-20 bytes)
        name: String,
    },
    /// Print a user as JSON, or `null` if absent
    Get {
        /// User id
        id: String,
    },
    /// Rename a user
    Update {
        /// User id
        id: String,
        /// New user name; omit to rewrite the user unchanged
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User id
        id: String,
    },
}

impl From<Commands> for UserCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Register { name } => UserCommand::Register { name },
            Commands::Get { id } => UserCommand::Get { id },
            Commands::Update { id, name } => UserCommand::Update { id, name },
            Commands::Delete { id } => UserCommand::Delete { id },
        }
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = UserServiceConfig::from_env();
    tracing::debug!("Configuration loaded");

    if user_service_lib::run_command(cli.command.into(), config)
        .await
        .is_err()
    {
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
