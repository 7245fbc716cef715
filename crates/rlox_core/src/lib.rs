//! rlox_core: Core utilities for the rlox interpreter.
//!
//! Provides source location types and the error type shared by the
//! scanner and the command-line driver.

pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::{Result, RloxError};
pub use text::{text_pos, LineAndColumn, LineMap, TextPos, TextSpan, MAX_SOURCE_LEN};
