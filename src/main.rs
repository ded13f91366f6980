//! CLI entry point for inkpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(version)]
#[command(about = "A markdown-file-backed personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name for the new post (defaults to the slugified title)
        #[arg(short, long)]
        filename: Option<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Print a single post
    Show {
        /// Post file name (e.g. my-post.md)
        filename: String,
    },

    /// Print the clean-text summary of a post
    Summary {
        /// Post file name (e.g. my-post.md)
        filename: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpost=debug,info"
    } else {
        "inkpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let blog = inkpost::Blog::new(&base_dir)?;

    match cli.command {
        Commands::New { title, filename } => {
            tracing::info!("Creating new post with title: {}", title);
            inkpost::commands::new::run(&blog, &title, filename.as_deref())?;
        }

        Commands::List => {
            inkpost::commands::list::run(&blog)?;
        }

        Commands::Show { filename } => {
            inkpost::commands::show::run(&blog, &filename)?;
        }

        Commands::Summary { filename } => {
            inkpost::commands::show::summary(&blog, &filename)?;
        }
    }

    Ok(())
}
