//! Lightweight HTML5 validator.
//!
//! # Scope
//!
//! This crate implements:
//! - **Lexer** - a hand-written scanner producing doctype, tag, text,
//!   comment, CDATA and processing-instruction tokens with line/column
//!   positions; `script` and `style` content is read as raw text
//! - **Validator** - a stack of open elements checked against the
//!   [`RuleTables`]:
//!   - legal ancestors per element, implied `<head>`/`<body>`
//!   - implied end tags (`<li>` closes `<li>`) and end tags that close open
//!     children (`</ul>` closes `<li>`)
//!   - global and per-element attribute allow-lists
//!   - case-sensitive names inside `svg` subtrees
//!
//! Runs either stop at the first violation ([`Mode::FailFast`]) or collect
//! everything into a [`Report`] ([`Mode::Accumulate`]).
//!
//! # Not Implemented
//!
//! - DOM construction
//! - Character encoding detection
//! - Attribute value validation
//!
//! ```
//! use html5check::{Options, validate};
//!
//! let report = validate("<ul><li>one<li>two</ul>", Options::default()).unwrap();
//! assert!(report.is_valid());
//! ```

/// Run options and configuration files.
pub mod config;
/// Violations and run errors.
pub mod error;
/// HTML lexer.
pub mod lexer;
/// Structural and attribute validation.
pub mod validator;

pub use config::{Config, Mode, Options};
pub use error::{Error, ErrorKind, Location, Violation};
pub use html5check_rules::{RuleOverrides, RuleTables};
pub use lexer::{LexError, Lexer, Position, Token, TokenKind, tokenize};
pub use validator::{Event, Report, Validator, Warning, WarningKind};

/// Validate `text` against the default HTML5 rules.
///
/// # Errors
///
/// See [`validate_with`].
pub fn validate(text: &str, options: Options) -> Result<Report, Error> {
    validate_with(text, RuleTables::shared(), options)
}

/// Validate `text` against `rules`.
///
/// Empty or whitespace-only input is [`ErrorKind::EmptyPage`] and is never
/// lexed.
///
/// # Errors
///
/// Returns [`Error::Lex`] if the text cannot be tokenized. In fail-fast mode,
/// returns [`Error::Invalid`] with the first violation; in accumulate mode
/// violations are in the returned [`Report`] instead.
pub fn validate_with(text: &str, rules: &RuleTables, options: Options) -> Result<Report, Error> {
    validate_inspecting(text, rules, options, |_, _| {})
}

/// Validate `text` against `rules`, passing every token and the [`Event`]s
/// it produced to `inspect`.
///
/// # Errors
///
/// See [`validate_with`].
pub fn validate_inspecting<F>(
    text: &str,
    rules: &RuleTables,
    options: Options,
    inspect: F,
) -> Result<Report, Error>
where
    F: FnMut(&Token, Vec<Event>),
{
    let validator = Validator::new(rules, options);
    if text.trim().is_empty() {
        return Ok(validator.reject_empty_page()?);
    }
    validator.run_inspecting(Lexer::new(text), inspect)
}
