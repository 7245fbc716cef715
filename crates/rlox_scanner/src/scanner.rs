//! The rlox scanner.
//!
//! Converts source text into the token sequence the parser consumes. A scan
//! is a single forward pass over the bytes of the source. Each iteration of
//! the driver loop starts a new lexeme at `current` and consumes exactly one
//! token or one trivia character. Unexpected characters are reported to the
//! caller's [`DiagnosticReporter`] and the pass continues with the next one.

use crate::char_codes::*;
use crate::token::{Token, TokenKind};
use memchr::memchr;
use rlox_core::text::{text_pos, TextSpan, MAX_SOURCE_LEN};
use rlox_diagnostics::{messages, Diagnostic, DiagnosticReporter};
use tracing::{debug, trace};

/// The scanner converts rlox source text into tokens.
///
/// A scanner is built for one source text and consumed by
/// [`Scanner::scan_tokens`]; it cannot be resumed or reused.
pub struct Scanner<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// Start of the lexeme being scanned.
    start: usize,
    /// Next unread byte.
    current: usize,
    /// Current 1-based line.
    line: u32,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Number of diagnostics reported during this pass.
    error_count: usize,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner for the given source text.
    ///
    /// The source must be at most [`MAX_SOURCE_LEN`] bytes long so that
    /// every offset fits in a span.
    pub fn new(source: &'src str) -> Self {
        debug_assert!(
            source.len() <= MAX_SOURCE_LEN,
            "source of {} bytes is too large to scan",
            source.len()
        );
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            error_count: 0,
        }
    }

    /// Scan the whole source and return its tokens, terminated by `Eof`.
    ///
    /// Never fails: unexpected characters go to `reporter` and produce no
    /// token, and scanning carries on after them.
    pub fn scan_tokens(mut self, reporter: &mut dyn DiagnosticReporter) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        self.tokens.push(Token::eof(self.line, text_pos(self.current)));
        debug!(
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.line,
            "scan complete"
        );
        self.tokens
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consume and return the next byte. Callers check `is_at_end` first.
    #[inline]
    fn advance(&mut self) -> u8 {
        let ch = self.bytes()[self.current];
        self.current += 1;
        ch
    }

    /// Look at the next unread byte without consuming it.
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.current).copied()
    }

    /// Consume the next byte only if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn scan_token(&mut self, reporter: &mut dyn DiagnosticReporter) {
        let ch = self.advance();
        match ch {
            OPEN_PAREN => self.add_token(TokenKind::LeftParen),
            CLOSE_PAREN => self.add_token(TokenKind::RightParen),
            OPEN_BRACE => self.add_token(TokenKind::LeftBrace),
            CLOSE_BRACE => self.add_token(TokenKind::RightBrace),
            COMMA => self.add_token(TokenKind::Comma),
            DOT => self.add_token(TokenKind::Dot),
            MINUS => self.add_token(TokenKind::Minus),
            PLUS => self.add_token(TokenKind::Plus),
            SEMICOLON => self.add_token(TokenKind::Semicolon),
            ASTERISK => self.add_token(TokenKind::Star),

            EXCLAMATION => self.scan_with_equals(TokenKind::BangEqual, TokenKind::Bang),
            EQUALS => self.scan_with_equals(TokenKind::EqualEqual, TokenKind::Equal),
            LESS_THAN => self.scan_with_equals(TokenKind::LessEqual, TokenKind::Less),
            GREATER_THAN => self.scan_with_equals(TokenKind::GreaterEqual, TokenKind::Greater),

            SLASH => {
                if self.match_char(SLASH) {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            LINE_FEED => self.line += 1,
            c if is_white_space_single_line(c) => {}

            lead => {
                // Consume the whole character so a multi-byte character is
                // reported once and `current` stays on a char boundary.
                self.current = self.start + utf8_sequence_len(lead);
                self.report_unexpected_character(reporter);
            }
        }
    }

    /// Emit `double` if the next byte is `=` (consuming it), else `single`.
    fn scan_with_equals(&mut self, double: TokenKind, single: TokenKind) {
        let kind = if self.match_char(EQUALS) { double } else { single };
        self.add_token(kind);
    }

    /// Skip to the end of the line. The newline itself is left for the
    /// driver loop so the line counter is bumped in one place.
    fn skip_line_comment(&mut self) {
        match memchr(LINE_FEED, &self.bytes()[self.current..]) {
            Some(offset) => self.current += offset,
            None => self.current = self.source.len(),
        }
    }

    fn lexeme_span(&self) -> TextSpan {
        TextSpan::from_bounds(text_pos(self.start), text_pos(self.current))
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = &self.source[self.start..self.current];
        let span = self.lexeme_span();
        self.tokens.push(Token::new(kind, lexeme, self.line, span));
    }

    fn report_unexpected_character(&mut self, reporter: &mut dyn DiagnosticReporter) {
        let span = self.lexeme_span();
        trace!(
            line = self.line,
            character = &self.source[self.start..self.current],
            "unexpected character"
        );
        self.error_count += 1;
        reporter.report(Diagnostic::new(
            &messages::UNEXPECTED_CHARACTER,
            self.line,
            span,
        ));
    }
}
