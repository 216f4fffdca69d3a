//! Main CLI application structure

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::Output;
use crate::preprocess::{parse_input, write_book, HelloPreprocessor, Preprocessor};

#[derive(Parser)]
#[command(name = "mdbook-hello")]
#[command(author, version, about = "An mdBook preprocessor that rewrites the opening chapter")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output for debugging (written to stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer the host's renderer support query
    Supports {
        /// Renderer the host is about to run (e.g. "html")
        renderer: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);
    let preprocessor = HelloPreprocessor;

    match cli.command {
        Some(Commands::Supports { renderer }) => {
            output.verbose_ctx("supports", &format!("renderer support query: {}", renderer));

            // The host reads the answer from the exit status alone.
            if !preprocessor.supports_renderer(&renderer) {
                std::process::exit(1);
            }
        }

        None => {
            output.verbose("reading [context, book] pair from stdin");
            let (ctx, book) = parse_input(io::stdin().lock())?;
            output.verbose_ctx(
                "run",
                &format!(
                    "book has {} top-level sections ({} chapters)",
                    book.sections.len(),
                    book.chapters().count()
                ),
            );

            let book = preprocessor.run(&ctx, book)?;

            write_book(&book, io::stdout().lock())?;
            output.verbose("processed book written to stdout");
        }
    }

    Ok(())
}
