//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into bounded-length chunks
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                println!("text     - chunk contents separated by --- lines");
                println!("json     - JSON array of chunks with metadata");
                println!("markdown - numbered chunk sections with a summary");
            }
        }
        Ok(())
    }
}
