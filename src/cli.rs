//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// puptui - a terminal puppy adoption catalog browser
#[derive(Parser)]
#[command(name = "puptui")]
#[command(about = "Browse a catalog of adoptable puppies from your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive catalog browser (the default)
    Browse,
    /// Print the catalog to stdout without launching the TUI
    Catalog {
        /// Emit JSON instead of a plain listing
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
