// crates/modgen-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "modgen", version)]
#[command(about = "Helpers for emitting generated source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dedent a template file and rejoin it with the chosen line ending
    Normalize(cmd::normalize::NormalizeArgs),

    /// Create a directory path (mkdir -p); prints the joined path
    Mkdir(cmd::mkdir::MkdirArgs),

    /// Uppercase the first character of a word
    Capitalize(cmd::capitalize::CapitalizeArgs),
}

fn main() -> anyhow::Result<()> {
    // stdout carries command output only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "modgen=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Mkdir(args) => cmd::mkdir::run(args),
        Commands::Capitalize(args) => cmd::capitalize::run(args),
    }
}
