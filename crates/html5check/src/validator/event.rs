use core::fmt;

use serde::Serialize;

use crate::lexer::Attributes;

/// What the validator made of a token, after normalization and implicit
/// closing.
///
/// One token can produce several events: a start tag may first close the
/// elements it implies the end of, and a text run splits into whitespace and
/// character data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    /// `<!DOCTYPE ...>`
    Doctype {
        /// The root element name.
        name: Option<String>,
        /// The public identifier.
        public_id: Option<String>,
        /// The system identifier.
        system_id: Option<String>,
    },
    /// An element was opened.
    StartTag {
        /// Normalized element name.
        name: String,
        /// Normalized attributes.
        attributes: Attributes,
    },
    /// A void (or self-closed foreign) element; nothing was opened.
    VoidTag {
        /// Normalized element name.
        name: String,
        /// Normalized attributes.
        attributes: Attributes,
    },
    /// An element was closed.
    EndTag {
        /// Normalized element name.
        name: String,
        /// True when no end tag for this element was written.
        implied: bool,
    },
    /// Whitespace around character data.
    Whitespace {
        /// The whitespace.
        content: String,
    },
    /// Character data with surrounding whitespace removed.
    Characters {
        /// The text.
        content: String,
    },
    /// `<!-- ... -->`
    Comment {
        /// The comment body.
        content: String,
    },
    /// `<![CDATA[ ... ]]>`
    CData {
        /// The section body.
        content: String,
    },
    /// `<?name ...?>`
    ProcessingInstruction {
        /// The target name.
        name: String,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype { name, .. } => {
                write!(f, "DOCTYPE {}", name.as_deref().unwrap_or_default())
            }
            Self::StartTag { name, attributes } => {
                write!(f, "START {name}")?;
                for attr in attributes {
                    write!(f, " {}={}", attr.name, attr.value)?;
                }
                Ok(())
            }
            Self::VoidTag { name, attributes } => {
                write!(f, "VOID {name}")?;
                for attr in attributes {
                    write!(f, " {}={}", attr.name, attr.value)?;
                }
                Ok(())
            }
            Self::EndTag { name, implied } => {
                if *implied {
                    write!(f, "END {name} (implied)")
                } else {
                    write!(f, "END {name}")
                }
            }
            Self::Whitespace { content } => write!(f, "SPACE {content:?}"),
            Self::Characters { content } => write!(f, "TEXT {content:?}"),
            Self::Comment { content } => write!(f, "COMMENT {content:?}"),
            Self::CData { content } => write!(f, "CDATA {content:?}"),
            Self::ProcessingInstruction { name } => write!(f, "PI {name}"),
        }
    }
}
