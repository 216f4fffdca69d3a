//! mdbook-hello - An mdBook preprocessor that rewrites the opening chapter

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = mdbook_hello::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
