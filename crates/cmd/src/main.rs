//! `mediafs` - inspect and manage a blob-backed media filesystem.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod common;

#[derive(Debug, Parser)]
#[command(name = "mediafs", about = "Inspect and manage a blob-backed media filesystem")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, short, default_value = "mediafs.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload a local file
    Put {
        /// Destination path, relative to the container root
        path: String,
        /// Local file to upload
        file: PathBuf,
        /// Warn instead of silently replacing an existing file
        #[arg(long)]
        no_overwrite: bool,
    },
    /// Download a file to stdout or a local path
    Get {
        path: String,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Delete a file
    Rm { path: String },
    /// Delete a directory and everything under it
    Rmdir { path: String },
    /// List directories and files at a path
    Ls {
        #[arg(default_value = "")]
        path: String,
    },
    /// Print the public URL for a path
    Url { path: String },
    /// Print metadata for a file
    Stat { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    let config = common::load_config(&cli.config)?;
    let fs = common::build_filesystem(&config).await?;

    match cli.command {
        Command::Put {
            path,
            file,
            no_overwrite,
        } => commands::put::run(&fs, &path, &file, !no_overwrite).await,
        Command::Get { path, output } => commands::get::run(&fs, &path, output.as_deref()).await,
        Command::Rm { path } => commands::rm::file(&fs, &path).await,
        Command::Rmdir { path } => commands::rm::directory(&fs, &path).await,
        Command::Ls { path } => commands::ls::run(&fs, &path).await,
        Command::Url { path } => commands::url::run(&fs, &path),
        Command::Stat { path } => commands::stat::run(&fs, &path).await,
    }
}
