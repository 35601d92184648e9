use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{bail, Context, Result};
use lang_lexer::{display_error, lexer::lexer::lex};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Lexes the file named on the command line. Returns whether lexing succeeded.
fn run() -> Result<bool> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        bail!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("lang_lexer"));
    }

    let file_path = PathBuf::from(&args[1]);
    let file_contents = read_to_string(&file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let start = Instant::now();
    let output = lex(&file_contents);
    info!(elapsed = ?start.elapsed(), tokens = output.tokens.len(), "tokenized");

    for token in &output.tokens {
        println!("{}", token);
    }

    match &output.error {
        Some(error) => {
            println!(
                "Lexed {} tokens, then failed at line {}: {}",
                output.tokens.len(),
                error.get_line(),
                error
            );
            display_error(error, &file_path, &file_contents);
            Ok(false)
        }
        None => Ok(true),
    }
}
