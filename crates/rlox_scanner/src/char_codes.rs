//! Byte constants for the characters the scanner dispatches on.

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const TAB: u8 = b'\t';
pub const SPACE: u8 = b' ';

pub const OPEN_PAREN: u8 = b'(';
pub const CLOSE_PAREN: u8 = b')';
pub const OPEN_BRACE: u8 = b'{';
pub const CLOSE_BRACE: u8 = b'}';
pub const COMMA: u8 = b',';
pub const DOT: u8 = b'.';
pub const MINUS: u8 = b'-';
pub const PLUS: u8 = b'+';
pub const SEMICOLON: u8 = b';';
pub const ASTERISK: u8 = b'*';
pub const SLASH: u8 = b'/';

pub const EXCLAMATION: u8 = b'!';
pub const EQUALS: u8 = b'=';
pub const LESS_THAN: u8 = b'<';
pub const GREATER_THAN: u8 = b'>';

/// Whitespace the scanner skips without touching the line counter.
#[inline]
pub fn is_white_space_single_line(ch: u8) -> bool {
    matches!(ch, SPACE | CARRIAGE_RETURN | TAB)
}

/// Length in bytes of the UTF-8 sequence introduced by `lead`.
///
/// Continuation bytes and invalid leads count as one byte so the scanner
/// always makes progress.
#[inline]
pub fn utf8_sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
