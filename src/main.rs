// malt - A small Lisp interpreter written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::error::Error;
use std::sync::Once;

use malt_core::Interpreter;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const PROMPT: &str = "user> ";

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber. Enable with `RUST_LOG=malt_core=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("malt v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing();
    run_repl(&Interpreter::new())
}

/// Run the interactive REPL until end of input.
fn run_repl(interp: &Interpreter) -> Result<(), Box<dyn Error>> {
    let mut rl = DefaultEditor::new()?;
    tracing::debug!("repl started");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                rl.add_history_entry(input)?;

                match interp.rep(input) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => {
                        tracing::debug!(kind = ?e.kind(), "evaluation failed");
                        eprintln!("Error: {}", e);
                    }
                }
            }
            // Ctrl-C drops the line being edited
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
