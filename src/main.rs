//! Command-line entry point: a line REPL and a file parser.

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser as ClapParser};
use rustyline::{error::ReadlineError, DefaultEditor};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use monkey::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse,
};

const PROMPT: &str = ">> ";

/// Tokenizer and parser for the Monkey language
#[derive(Debug, ClapParser)]
#[command(name = "monkey", version, about, long_about = None)]
struct Cli {
    /// Source file to parse; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Echo the parsed program instead of the token stream in the REPL
    #[arg(long)]
    parse: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.file {
        Some(path) => run_file(path),
        None => run_repl(cli.parse).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "monkey=warn",
        1 => "monkey=debug",
        _ => "monkey=trace",
    }
}

/// Parses a whole file. Returns whether it parsed without errors.
fn run_file(path: &Path) -> Result<bool, CliError> {
    let source = read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = source.len(), "parsing file");
    Ok(report(&source))
}

fn run_repl(echo_program: bool) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;

    println!("Welcome to the Monkey REPL!");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    warn!("could not record history: {err}");
                }

                if echo_program {
                    report(&line);
                } else {
                    echo_tokens(&line);
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

fn echo_tokens(line: &str) {
    for echoed in token_echo(line) {
        println!("{echoed}");
    }
}

/// One `Kind (literal)` line per token, up to but not including `EOF`.
fn token_echo(line: &str) -> Vec<String> {
    let mut lexer = Lexer::new(line);
    let mut lines = vec![];

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            break;
        }
        lines.push(token.to_string());
    }

    lines
}

/// Prints the parsed program followed by any syntax errors.
fn report(source: &str) -> bool {
    let (program, errors) = parse(source);

    if !program.is_empty() {
        println!("{program}");
    }
    for error in &errors {
        eprintln!("parse error: {error}");
    }

    errors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "monkey=warn");
        assert_eq!(directive_for_verbosity(1), "monkey=debug");
        assert_eq!(directive_for_verbosity(5), "monkey=trace");
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["monkey", "--parse", "-vv"]).unwrap();

        assert!(cli.parse);
        assert_eq!(cli.verbose, 2);
        assert!(cli.file.is_none());
    }

    #[test]
    fn token_echo_keeps_every_literal() {
        assert_eq!(
            token_echo("let x = 5;"),
            vec![
                "Let (let)",
                "Identifier (x)",
                "Assign (=)",
                "Integer (5)",
                "Semicolon (;)",
            ]
        );
        assert_eq!(token_echo("@ =="), vec!["Illegal ()", "Equals (==)"]);
        assert!(token_echo("   ").is_empty());
    }

    #[test]
    fn report_flags_errors() {
        assert!(report("let x = 1;"));
        assert!(!report("let = 1;"));
    }
}
