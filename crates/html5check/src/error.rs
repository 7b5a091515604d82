//! Validation errors.
//!
//! A [`Violation`] is a single broken rule, located by line, column and the
//! chain of elements open at that point. An [`Error`] is what a validation run
//! fails with: a lexical failure (always fatal) or, in fail-fast mode, the
//! first violation.

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::lexer::{LexError, Position};

/// The kinds of rule a document can break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize,
)]
pub enum ErrorKind {
    /// The input is empty or whitespace only.
    EmptyPage,
    /// An unknown tag name, or an end tag for a void element.
    InvalidTag,
    /// An element with no legal ancestor open, or nested inside itself where
    /// that is forbidden.
    MisplacedElement,
    /// An end tag matching no open element, or closing over elements that
    /// cannot be closed implicitly.
    MisplacedEndTag,
    /// An attribute no allow-list accepts, or a repeated attribute.
    InvalidAttribute,
    /// Elements still open at the end of the document.
    UnclosedTags,
    /// A token the validator has no handling for.
    UnknownNodeType,
    /// No `<!DOCTYPE>` in a run that requires one.
    MissingDoctype,
}

/// Where a violation or warning was found: the token position plus the
/// names of the elements open at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Start of the offending token.
    #[serde(flatten)]
    pub position: Position,
    /// Open elements, outermost first.
    pub ancestors: Vec<String>,
}

impl Location {
    /// Create a location.
    #[must_use]
    pub const fn new(position: Position, ancestors: Vec<String>) -> Self {
        Self {
            position,
            ancestors,
        }
    }
}

impl fmt::Display for Location {
    /// `line:column:html>body>div`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position, self.ancestors.join(">"))
    }
}

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{location} (ERROR) - {message}")]
pub struct Violation {
    /// Which rule was broken.
    pub kind: ErrorKind,
    /// Where.
    pub location: Location,
    /// Human-readable detail.
    pub message: String,
}

impl Violation {
    /// Create a violation.
    #[must_use]
    pub const fn new(kind: ErrorKind, location: Location, message: String) -> Self {
        Self {
            kind,
            location,
            message,
        }
    }
}

/// Why a validation run stopped without producing a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The first violation, in fail-fast mode.
    #[error(transparent)]
    Invalid(#[from] Violation),
}

impl Error {
    /// The violated rule, or `None` for a lexical error.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Lex(_) => None,
            Self::Invalid(violation) => Some(violation.kind),
        }
    }

    /// Where the run stopped.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(error) => error.position(),
            Self::Invalid(violation) => violation.location.position,
        }
    }
}
