use thiserror::Error;

use super::token::Position;

/// Malformed markup the lexer cannot recover from.
///
/// Lexical errors abort a run in every validation mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A quoted attribute value or doctype identifier never closed.
    #[error("{position} - unterminated quoted value")]
    UnterminatedQuote {
        /// Where the opening quote is.
        position: Position,
    },

    /// A tag whose contents could not be read as `name key=value ... /?>`.
    #[error("{position} - confused parsing a tag \"{name}\"")]
    MalformedTag {
        /// The tag name read so far.
        name: String,
        /// Where parsing gave up.
        position: Position,
    },

    /// `<>` or `</>`.
    #[error("{position} - tag has no name")]
    MissingTagName {
        /// Where the tag starts.
        position: Position,
    },

    /// Input ended in the middle of a tag.
    #[error("{position} - unexpected end of input inside {context}")]
    UnexpectedEof {
        /// What was being read.
        context: &'static str,
        /// Where the construct starts.
        position: Position,
    },

    /// `<!--` without a matching `-->`.
    #[error("{position} - comment is never closed with \"-->\"")]
    UnterminatedComment {
        /// Where the comment starts.
        position: Position,
    },

    /// `<![CDATA[` without a matching `]]>`.
    #[error("{position} - CDATA section is never closed with \"]]>\"")]
    UnterminatedCData {
        /// Where the section starts.
        position: Position,
    },

    /// A `script` or `style` element whose end tag never appears.
    #[error("{position} - <{name}> content is never closed with \"</{name}\"")]
    UnterminatedRawText {
        /// The raw-text element name.
        name: String,
        /// Where the content starts.
        position: Position,
    },
}

impl LexError {
    /// Where the failure was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnterminatedQuote { position }
            | Self::MalformedTag { position, .. }
            | Self::MissingTagName { position }
            | Self::UnexpectedEof { position, .. }
            | Self::UnterminatedComment { position }
            | Self::UnterminatedCData { position }
            | Self::UnterminatedRawText { position, .. } => *position,
        }
    }
}
