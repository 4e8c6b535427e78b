//! Command-line interface.
//!
//! Running with no subcommand launches the TUI. A couple of small
//! non-interactive commands exist for scripting and shell setup.

use crate::menu::Catalog;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "barcarte", version, about = "A digital bar menu for the terminal")]
pub struct Cli {
    /// Path to a custom menu catalog (TOML); overrides the config file
    #[arg(long, value_name = "FILE")]
    pub menu: Option<PathBuf>,

    /// UI theme: dark, light or nocolor; overrides the config file
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Disable all UI colors (same as --theme nocolor)
    #[arg(long)]
    pub no_colors: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print the menu catalog and exit
    Show,
}

/// Write completions for the given shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "barcarte", &mut io::stdout());
}

/// Print the catalog in a plain, grep-friendly layout.
pub fn print_catalog(catalog: &Catalog) {
    for category in &catalog.categories {
        println!("{}", category.label);
        for item in &category.items {
            println!("  {} — {}", item.name, item.ingredient_summary());
        }
        println!();
    }
}
