//! rlox_scanner: Lexer/tokenizer for rlox source code.
//!
//! Produces the ordered token sequence for a source text in one pass:
//! - Grouping punctuation and single-character operators
//! - One-or-two character comparison operators (`!=`, `==`, `<=`, `>=`)
//! - Line comments, which are skipped
//! - Recovery from unexpected characters, reported as diagnostics

mod char_codes;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

use rlox_diagnostics::DiagnosticReporter;

/// Scan `source` into tokens, reporting lexical errors to `reporter`.
///
/// The returned sequence always ends with exactly one `Eof` token.
pub fn scan_tokens(source: &str, reporter: &mut dyn DiagnosticReporter) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}
