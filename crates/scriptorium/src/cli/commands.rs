//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scriptorium - generate illustrated books from a chapter outline
#[derive(Parser, Debug)]
#[command(name = "scriptorium")]
#[command(about = "Generate illustrated books from a chapter outline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Interface to bind (overrides [server].host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides [server].port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a book locally from an outline file
    Generate {
        /// Outline as JSON or TOML with the request fields
        #[arg(long)]
        outline: PathBuf,

        /// Where to write the document (defaults to "<title>.docx")
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Also save the book to the configured storage
        #[arg(long)]
        save: bool,
    },

    /// List stored books, newest first
    List {
        /// Page number starting at 1
        #[arg(long, default_value = "1")]
        page: u32,

        /// Books per page
        #[arg(long, default_value = "20")]
        page_size: u32,
    },

    /// Write a stored book to disk
    Fetch {
        /// Book identifier
        id: String,

        /// Where to write the document (defaults to "<title>.docx")
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
