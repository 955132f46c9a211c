//! msgchunk command-line entry point

use clap::Parser;
use msgchunk_cli::commands::Commands;

/// Split long text into paste-sized chunks at natural boundaries
#[derive(Debug, Parser)]
#[command(name = "msgchunk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    }
}
