// ABOUTME: CLI argument parsing and command routing for shipmate
//
// Provides:
// - Launching the interactive guide (tui, default)
// - Printing the step catalog (list)
// - Printing a single step's content (show)

pub mod list;
pub mod show;

use clap::{Parser, Subcommand, ValueEnum};

/// Interactive terminal guide for deploying Next.js to Vercel
#[derive(Parser)]
#[command(name = "shipmate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for non-interactive commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive guide (default if no command given)
    Tui,

    /// Print the step catalog
    List,

    /// Print one step's full content, commands included
    Show(ShowArgs),
}

/// Arguments for the show command
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Step number (1-5)
    pub step: u8,
}
