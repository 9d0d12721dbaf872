//! Command-line front end: interprets one source file and prints the final
//! symbol table, or dumps its token stream with `--tokens`.

use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use minic::{
    config::{InterpreterConfig, RecoveryPolicy, SkipMode},
    errors::sink::Diagnostics,
    get_line_at_position, interpret,
    lexer::{lexer::tokenize, tokens::TokenKind},
    render_error,
};

#[derive(Parser)]
#[command(name = "minic", about = "Interpreter for a small C-like statement language")]
struct Cli {
    /// Source file to interpret.
    #[arg(default_value = "source.txt")]
    file: PathBuf,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,

    /// Print the token stream instead of interpreting.
    #[arg(long)]
    tokens: bool,

    /// Stop at the first unexpected token instead of skipping over it.
    #[arg(long)]
    halt_on_mismatch: bool,

    /// Count nested braces when skipping the body of a false `if`.
    #[arg(long)]
    balanced_skip: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read {}: {e}", cli.file.display());
            process::exit(1);
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    if source.trim().is_empty() {
        info!("{} is empty, nothing to analyze", cli.file.display());
    }

    if cli.tokens {
        print_tokens(&source, file_name);
        return;
    }

    let config = InterpreterConfig {
        on_mismatch: if cli.halt_on_mismatch {
            RecoveryPolicy::Halt
        } else {
            RecoveryPolicy::ReportAndAdvance
        },
        skip_mode: if cli.balanced_skip {
            SkipMode::Balanced
        } else {
            SkipMode::Flat
        },
    };
    debug!(?config, "interpreting {}", cli.file.display());

    let start = Instant::now();
    // Verbose runs also log each diagnostic the moment it is raised.
    let mut diagnostics = if cli.verbose {
        Diagnostics::with_tracing()
    } else {
        Diagnostics::new()
    };
    let symbols = interpret(&source, file_name, config, &mut diagnostics);
    info!("Interpreted in {:?}", start.elapsed());

    for error in diagnostics.errors() {
        eprintln!("{}\n", render_error(error, &source));
    }

    for (name, value) in symbols.iter() {
        println!("{} = {}", name, value);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints `(kind, text, line)` for every token up to the first `End`.
fn print_tokens(source: &str, file_name: Option<String>) {
    let (tokens, errors) = tokenize(source, file_name);

    for error in &errors {
        eprintln!("{}\n", render_error(error, source));
    }

    let tokens: Vec<_> = tokens
        .into_iter()
        .filter(|token| token.kind != TokenKind::End)
        .collect();

    if tokens.is_empty() {
        println!("no tokens");
        return;
    }

    for token in tokens {
        let line = get_line_at_position(source, token.span.start.0).map_or(1, |(line, _, _)| line);
        println!("({}, {}, {})", token.kind, token.value, line);
    }
}
