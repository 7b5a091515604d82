use html5check_rules::RuleTables;

use super::event::Event;
use super::report::{Diagnostics, Report, Warning, WarningKind};
use super::stack::OpenElements;
use super::text::TextParts;
use crate::config::Options;
use crate::error::{Error, ErrorKind, Location, Violation};
use crate::lexer::{Attributes, LexError, Position, Token, TokenKind};

/// Stack-based structural and attribute validator.
///
/// Consumes tokens in document order, keeping the names of the open elements
/// on a stack. Every start tag is checked for placement against the
/// elements above it and for attribute legality; end tags close elements,
/// implicitly closing those whose end tags may be omitted.
///
/// A validator holds a shared reference to immutable [`RuleTables`] and
/// private state for exactly one document.
pub struct Validator<'r> {
    rules: &'r RuleTables,
    options: Options,

    /// The names of the open elements, outermost first.
    pub(super) stack_of_open_elements: OpenElements,

    doctype_seen: bool,

    /// Start of the token being processed; used for every location.
    position: Position,

    diagnostics: Diagnostics,
}

impl<'r> Validator<'r> {
    /// Create a validator for one document.
    #[must_use]
    pub const fn new(rules: &'r RuleTables, options: Options) -> Self {
        Self {
            rules,
            options,
            stack_of_open_elements: OpenElements::new(),
            doctype_seen: false,
            position: Position::START,
            diagnostics: Diagnostics::new(options.mode),
        }
    }

    /// The rule tables in use.
    #[must_use]
    pub const fn rules(&self) -> &'r RuleTables {
        self.rules
    }

    /// The names of the currently open elements, outermost first.
    #[must_use]
    pub fn open_elements(&self) -> &[String] {
        self.stack_of_open_elements.names()
    }

    /// Validate every token from `tokens`, then finish the document.
    ///
    /// Any source of tokens works; the [`Lexer`](crate::Lexer) is the usual
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] for the first lexical error, and in fail-fast
    /// mode [`Error::Invalid`] for the first violation.
    pub fn run<I>(self, tokens: I) -> Result<Report, Error>
    where
        I: IntoIterator<Item = Result<Token, LexError>>,
    {
        self.run_inspecting(tokens, |_, _| {})
    }

    /// Like [`run`](Self::run), handing each token and the events it
    /// produced to `inspect` as the run goes.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run). The token that stops the run is not inspected.
    pub fn run_inspecting<I, F>(mut self, tokens: I, mut inspect: F) -> Result<Report, Error>
    where
        I: IntoIterator<Item = Result<Token, LexError>>,
        F: FnMut(&Token, Vec<Event>),
    {
        tracing::trace!(mode = %self.options.mode, "validation started");
        for token in tokens {
            let token = token?;
            let events = self.process_token(&token)?;
            inspect(&token, events);
        }
        Ok(self.finish()?)
    }

    /// Record [`ErrorKind::EmptyPage`] and end the run without looking at any
    /// tokens.
    ///
    /// # Errors
    ///
    /// Returns the violation in fail-fast mode.
    pub fn reject_empty_page(mut self) -> Result<Report, Violation> {
        self.error(ErrorKind::EmptyPage, "Empty page.".to_string())?;
        Ok(self.diagnostics.into_report(self.doctype_seen))
    }

    /// Validate one token, returning the events it produced.
    ///
    /// # Errors
    ///
    /// In fail-fast mode, returns the first violation the token causes.
    pub fn process_token(&mut self, token: &Token) -> Result<Vec<Event>, Violation> {
        self.position = token.position;
        let mut events = Vec::new();

        match &token.kind {
            TokenKind::Doctype {
                name,
                public_id,
                system_id,
            } => {
                self.doctype_seen = true;
                events.push(Event::Doctype {
                    name: name.clone(),
                    public_id: public_id.clone(),
                    system_id: system_id.clone(),
                });
            }
            TokenKind::StartTag {
                name,
                attributes,
                self_closing,
            } => self.process_start_tag(name, attributes, *self_closing, &mut events)?,
            TokenKind::EndTag { name } => self.process_end_tag(name, &mut events)?,
            TokenKind::Text { content } => self.process_text(content, &mut events),
            TokenKind::Comment { content } => events.push(Event::Comment {
                content: content.clone(),
            }),
            TokenKind::CData { content } => events.push(Event::CData {
                content: content.clone(),
            }),
            TokenKind::ProcessingInstruction { name } => {
                events.push(Event::ProcessingInstruction { name: name.clone() });
            }
            TokenKind::Unrecognized { description } => {
                self.error(
                    ErrorKind::UnknownNodeType,
                    format!("Unknown node type: {description}"),
                )?;
            }
        }

        Ok(events)
    }

    /// End of document: everything must have been closed.
    ///
    /// # Errors
    ///
    /// In fail-fast mode, returns [`ErrorKind::UnclosedTags`] or
    /// [`ErrorKind::MissingDoctype`].
    pub fn finish(mut self) -> Result<Report, Violation> {
        if !self.stack_of_open_elements.is_empty() {
            let open = self.stack_of_open_elements.names().join(", ");
            self.error(
                ErrorKind::UnclosedTags,
                format!("Unclosed tags at end of document: {open}"),
            )?;
        }
        if self.options.require_doctype && !self.doctype_seen {
            self.error(
                ErrorKind::MissingDoctype,
                "Document has no <!DOCTYPE>.".to_string(),
            )?;
        }

        let report = self.diagnostics.into_report(self.doctype_seen);
        tracing::debug!(
            valid = report.valid,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validation finished"
        );
        Ok(report)
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    fn process_start_tag(
        &mut self,
        name: &str,
        attributes: &Attributes,
        self_closing: bool,
        events: &mut Vec<Event>,
    ) -> Result<(), Violation> {
        let name = self.normalize(name);
        let rules = self.rules;

        if rules.is_void(&name) || (self_closing && rules.is_optional_void(&name)) {
            self.check_placement(&name)?;
            let attributes = self.check_attributes(&name, attributes)?;
            events.push(Event::VoidTag { name, attributes });
            return Ok(());
        }

        if self_closing {
            self.warn(
                WarningKind::SelfClosingNonVoid,
                format!("{name} is not a void element; \"/>\" is ignored."),
            );
        }

        // A new <li> closes the previous one, <tbody> closes <thead>, ...
        while let Some(current) = self.stack_of_open_elements.current()
            && rules.implies_end_of(current, &name)
        {
            if let Some(closed) = self.stack_of_open_elements.pop() {
                tracing::debug!("{}: <{name}> implies </{closed}>", self.location());
                events.push(Event::EndTag {
                    name: closed,
                    implied: true,
                });
            }
        }

        if rules.is_non_recursable(&name) && self.stack_of_open_elements.contains(&name) {
            self.error(
                ErrorKind::MisplacedElement,
                format!("{name} cannot be inside {name}"),
            )?;
        } else {
            self.check_placement(&name)?;
        }
        let attributes = self.check_attributes(&name, attributes)?;

        self.stack_of_open_elements.push(name.clone());
        events.push(Event::StartTag { name, attributes });
        Ok(())
    }

    fn process_end_tag(&mut self, name: &str, events: &mut Vec<Event>) -> Result<(), Violation> {
        let name = self.normalize(name);
        let rules = self.rules;

        if rules.is_void(&name) {
            return self.error(
                ErrorKind::InvalidTag,
                format!("{name} is a void (contentless) element, and so shouldn't have a closing tag."),
            );
        }

        if !self.stack_of_open_elements.contains(&name) {
            return self.error(
                ErrorKind::MisplacedEndTag,
                format!("End tag for {name} when not inside"),
            );
        }

        while let Some(current) = self.stack_of_open_elements.current() {
            if current == name {
                let _ = self.stack_of_open_elements.pop();
                events.push(Event::EndTag {
                    name: name.clone(),
                    implied: false,
                });
                break;
            }

            if rules.closed_by_parent(current, &name) {
                if let Some(closed) = self.stack_of_open_elements.pop() {
                    tracing::debug!("{}: </{name}> closes <{closed}>", self.location());
                    events.push(Event::EndTag {
                        name: closed,
                        implied: true,
                    });
                }
                continue;
            }

            let still_open = self.stack_of_open_elements.above(&name).join(", ");
            self.error(
                ErrorKind::MisplacedEndTag,
                format!("End tag for '{name}' while other elements ({still_open}) still open"),
            )?;

            // Recover by closing everything up to and including `name`.
            while let Some(closed) = self.stack_of_open_elements.pop() {
                let implied = closed != name;
                events.push(Event::EndTag {
                    name: closed,
                    implied,
                });
                if !implied {
                    break;
                }
            }
            break;
        }

        // Unknown names were already reported by their start tag.
        if rules.is_known_tag(&name) {
            self.check_placement(&name)?;
        }
        Ok(())
    }

    fn process_text(&mut self, content: &str, events: &mut Vec<Event>) {
        let parts = TextParts::split(content);
        if !parts.leading.is_empty() {
            events.push(Event::Whitespace {
                content: parts.leading.to_string(),
            });
        }
        if !parts.has_content() {
            return;
        }

        // Character data belongs in <body>.
        if self.stack_of_open_elements.current() == Some("head") {
            let _ = self.stack_of_open_elements.pop();
            self.open_implied("body");
        } else if self.stack_of_open_elements.is_only_html() {
            self.open_implied("body");
        }

        events.push(Event::Characters {
            content: parts.core.to_string(),
        });
        if !parts.trailing.is_empty() {
            events.push(Event::Whitespace {
                content: parts.trailing.to_string(),
            });
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Tag and attribute names are lower-cased outside `svg` subtrees.
    pub(super) fn normalize(&self, name: &str) -> String {
        if self.stack_of_open_elements.in_svg() {
            name.to_string()
        } else {
            name.to_ascii_lowercase()
        }
    }

    /// Push a section element whose start tag was omitted.
    pub(super) fn open_implied(&mut self, name: &str) {
        tracing::debug!("{}: implied <{name}>", self.location());
        self.stack_of_open_elements.push(name.to_string());
    }

    pub(super) fn location(&self) -> Location {
        Location::new(self.position, self.stack_of_open_elements.names().to_vec())
    }

    pub(super) fn error(&mut self, kind: ErrorKind, message: String) -> Result<(), Violation> {
        let violation = Violation::new(kind, self.location(), message);
        self.diagnostics.error(violation)
    }

    pub(super) fn warn(&mut self, kind: WarningKind, message: String) {
        let warning = Warning {
            kind,
            location: self.location(),
            message,
        };
        self.diagnostics.warn(warning);
    }
}
