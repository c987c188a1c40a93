//! Scriptorium CLI binary.
//!
//! This binary provides command-line access to Scriptorium:
//! - Serve the book generation API
//! - Generate a book locally from an outline file
//! - List and fetch stored books

use clap::Parser;
use scriptorium::{ScriptoriumConfig, init_logging};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, fetch_book, generate_book, list_books, serve};

    // Keys may come from a local .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.json_logs);

    let config = ScriptoriumConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            serve(config, host, port).await?;
        }

        Commands::Generate {
            outline,
            output,
            save,
        } => {
            generate_book(&config, &outline, output, save).await?;
        }

        Commands::List { page, page_size } => {
            list_books(&config, page, page_size).await?;
        }

        Commands::Fetch { id, output } => {
            fetch_book(&config, &id, output).await?;
        }
    }

    Ok(())
}
