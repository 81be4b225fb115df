use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comment_raffle::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "comment-raffle",
    version,
    about = "Collect CSDN article comments and draw giveaway winners",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the configured format
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML config file (defaults to environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every comment of an article
    Fetch {
        /// Article URL (prompted for when omitted)
        url: Option<String>,

        /// Include folded comments
        #[arg(long, default_value = "false")]
        fold: bool,

        /// Include replies
        #[arg(long, default_value = "false")]
        replies: bool,
    },

    /// Draw winners among distinct commenters
    Lottery {
        /// Article URL (prompted for when omitted)
        url: Option<String>,

        /// Include folded comments
        #[arg(long, default_value = "false")]
        fold: bool,

        /// Include replies
        #[arg(long, default_value = "false")]
        replies: bool,

        /// Number of winners
        #[arg(short = 'n', long, default_value = "1")]
        winners: usize,
    },

    /// Serve the JSON API
    Serve {
        /// Override the configured bind address
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    // Initialize tracing/logging
    let format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(format, &config.logging.level, cli.verbose)?;

    match cli.command {
        Commands::Fetch { url, fold, replies } => {
            tracing::debug!(url = ?url, fold, replies, "Starting fetch command");
            commands::fetch(&config, url, fold, replies).await?;
        }

        Commands::Lottery {
            url,
            fold,
            replies,
            winners,
        } => {
            tracing::debug!(url = ?url, fold, replies, winners, "Starting lottery command");
            commands::lottery(&config, url, fold, replies, winners).await?;
        }

        Commands::Serve { bind } => {
            tracing::info!(bind = ?bind, "Starting serve command");
            commands::serve(config, bind).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("comment_raffle=debug,tower_http=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("comment_raffle={level},warn"))
        })
    };

    // Logs go to stderr; stdout carries the transcript
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
