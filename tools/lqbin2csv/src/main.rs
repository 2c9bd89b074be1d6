mod commands;
mod format;
mod writer;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{convert::ConvertArgs, list::ListArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lqbin2csv", about = "Extract config-table sheets from lqc.lqbin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one CSV file per sheet
    Convert(ConvertArgs),
    /// Print sheet schemas
    Schema(SchemaArgs),
    /// List tables and sheets with row counts
    List(ListArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => args.run(),
        Commands::Schema(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
