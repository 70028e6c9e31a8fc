//! CLI module - Command-line interface for Multiverse
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// Multiverse - episode aggregation gateway
/// Re-paginates and enriches an upstream episode catalog
#[derive(Parser)]
#[command(name = "multiverse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    Init,

    /// Show an episode with its characters and locations
    #[command(alias = "e")]
    Episode {
        /// Episode ID
        id: i32,
    },

    /// List episodes with a custom page size
    #[command(alias = "ls")]
    Episodes {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Episodes per page (1-100)
        #[arg(long, default_value_t = 10)]
        take: u32,

        /// Sort by episode code: ASC or DESC
        #[arg(long)]
        order: Option<String>,

        /// Filter by episode name
        #[arg(long)]
        name: Option<String>,
    },
}
