//! rlox: The rlox command-line driver.
//!
//! Usage:
//!   rlox [options] [script]
//!
//! With a script path, scans the file and prints its tokens. Without one,
//! starts an interactive prompt that scans each line as it is entered.

use clap::Parser as ClapParser;
use miette::{IntoDiagnostic, WrapErr};
use rlox_core::text::LineMap;
use rlox_core::RloxError;
use rlox_diagnostics::{Diagnostic, DiagnosticCollection};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(ClapParser, Debug)]
#[command(name = "rlox", about = "rlox - a scanner for the lox scripting language", version)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Do not print the token stream.
    #[arg(short, long)]
    quiet: bool,

    /// Disable coloured diagnostics.
    #[arg(long = "no-color")]
    no_color: bool,
}

// Exit codes from sysexits.h
const EX_DATAERR: i32 = 65;
const EX_IOERR: i32 = 74;

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    process::exit(exit_code(try_main(&cli)));
}

/// Map the outcome of a run to the process exit status, printing the
/// report for failures that stopped the run.
fn exit_code(result: miette::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{:?}", report);
            EX_IOERR
        }
    }
}

fn try_main(cli: &Cli) -> miette::Result<i32> {
    let use_color = !cli.no_color && atty_is_terminal();
    match cli.script {
        Some(ref path) => run_file(path, cli, use_color),
        None => {
            run_prompt(cli, use_color)?;
            Ok(0)
        }
    }
}

fn run_file(path: &Path, cli: &Cli, use_color: bool) -> miette::Result<i32> {
    let source = read_script(path).into_diagnostic()?;
    info!(path = %path.display(), bytes = source.len(), "scanning script");

    if run(&source, cli, use_color) {
        Ok(EX_DATAERR)
    } else {
        Ok(0)
    }
}

fn read_script(path: &Path) -> rlox_core::Result<String> {
    std::fs::read_to_string(path).map_err(|e| RloxError::io(path, e))
}

fn run_prompt(cli: &Cli, use_color: bool) -> miette::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .into_diagnostic()
            .wrap_err("failed to write prompt")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.into_diagnostic().wrap_err("failed to read from stdin")?;

        // Errors on one line do not carry over to the next.
        let had_error = run(&line, cli, use_color);
        debug!(had_error, "prompt line scanned");
    }
}

/// Scan `source`, print its tokens and diagnostics, and report whether any
/// lexical error occurred.
fn run(source: &str, cli: &Cli, use_color: bool) -> bool {
    let mut diagnostics = DiagnosticCollection::new();
    let tokens = rlox_scanner::scan_tokens(source, &mut diagnostics);

    if !cli.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for token in &tokens {
            // A closed pipe is not worth failing the run over.
            let _ = writeln!(out, "{}", token);
        }
    }

    let line_map = LineMap::new(source);
    for diag in diagnostics.diagnostics() {
        print_diagnostic(diag, &line_map, use_color);
    }

    diagnostics.has_errors()
}

fn print_diagnostic(diag: &Diagnostic, line_map: &LineMap, use_color: bool) {
    let position = line_map.line_and_column_of(diag.span.start);
    if use_color {
        eprintln!(
            "{}{}{}: {}{}{}{}",
            CYAN, position, RESET, BOLD, RED, diag, RESET
        );
    } else {
        eprintln!("{}: {}", position, diag);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
