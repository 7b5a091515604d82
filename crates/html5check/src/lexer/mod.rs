//! HTML lexer.
//!
//! Turns document text into a flat stream of [`Token`]s: doctypes, start and
//! end tags with their attributes, text runs, comments, CDATA sections and
//! processing instructions. Every token carries the line and column of its
//! first character.
//!
//! The lexer does not know about nesting. `script` and `style` are the only
//! elements it treats specially: their content is read verbatim as a single
//! text token, up to the matching end tag.

/// Lexer state and the tag readers.
pub mod core;
/// Errors for input the lexer cannot tokenize.
pub mod error;
/// Scanning primitives.
mod helpers;
/// Token types produced by the lexer.
pub mod token;

pub use self::core::{Lexer, tokenize};
pub use error::LexError;
pub use token::{Attribute, AttributeValue, Attributes, Position, Token, TokenKind};
