//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use sesam_core::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "sesam")]
#[command(version)]
#[command(about = "Terminal login client for the Sesam member portal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the portal base URL
    #[arg(long, env = "SESAM_BASE_URL", value_name = "URL", global = true)]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Attempt one login without the interactive screen
    Login {
        /// Username to log in with
        #[arg(short, long)]
        username: String,

        /// Password to log in with
        #[arg(short, long)]
        password: String,
    },

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

    let _log_guard = sesam_core::logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(url) = cli.base_url {
        config.portal.base_url = Some(url);
    }

    // default to the interactive login screen
    let Some(command) = cli.command else {
        return commands::screen::run(&config);
    };

    match command {
        Commands::Login { username, password } => {
            commands::login::run(&config, &username, &password).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
