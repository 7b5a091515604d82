use core::iter::FusedIterator;

use super::error::LexError;
use super::token::{Attributes, AttributeValue, Position, Token, TokenKind};

/// Elements whose content is consumed verbatim up to their end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A single-pass lexer turning HTML text into [`Token`]s.
///
/// The lexer is an [`Iterator`] producing tokens lazily in document order.
/// It stops after the first [`LexError`]; a fresh lexer is needed for every
/// input.
///
/// ```
/// use html5check::{Lexer, TokenKind};
///
/// let tokens: Vec<_> = Lexer::new("<p>hi</p>").collect::<Result<_, _>>().unwrap();
/// assert!(matches!(tokens[1].kind, TokenKind::Text { .. }));
/// ```
pub struct Lexer<'a> {
    pub(super) input: &'a str,
    pub(super) current_pos: usize,
    pub(super) line: usize,
    pub(super) column: usize,

    /// Set right after a `script`/`style` start tag: the next read scans
    /// verbatim for the matching end tag.
    pub(super) raw_text_element: Option<String>,

    pub(super) finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            current_pos: 0,
            line: Position::START.line,
            column: Position::START.column,
            raw_text_element: None,
            finished: false,
        }
    }

    /// Produce the next token, or None at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(name) = self.raw_text_element.take()
            && let Some(token) = self.read_raw_text(name)?
        {
            return Ok(Some(token));
        }

        let mut text_start: Option<(usize, Position)> = None;
        loop {
            match self.peek_codepoint(0) {
                None => {
                    return Ok(text_start.map(|(start, position)| self.text_token(start, position)));
                }
                // A '<' followed by whitespace (or nothing) is just text.
                Some('<')
                    if self
                        .peek_codepoint(1)
                        .is_some_and(|c| !Self::is_whitespace_char(c)) =>
                {
                    if let Some((start, position)) = text_start {
                        return Ok(Some(self.text_token(start, position)));
                    }
                    let token = self.read_tag()?;
                    if let TokenKind::StartTag { name, .. } = &token.kind
                        && let Some(raw) = RAW_TEXT_ELEMENTS
                            .iter()
                            .find(|raw| name.eq_ignore_ascii_case(raw))
                    {
                        self.raw_text_element = Some((*raw).to_string());
                    }
                    return Ok(Some(token));
                }
                Some(_) => {
                    if text_start.is_none() {
                        text_start = Some((self.current_pos, self.current_position()));
                    }
                    self.advance();
                }
            }
        }
    }

    fn text_token(&self, start: usize, position: Position) -> Token {
        let content = self.input[start..self.current_pos].to_string();
        Token::new(TokenKind::Text { content }, position)
    }

    /// Scan the body of a raw-text element up to (not including) its end tag.
    fn read_raw_text(&mut self, name: String) -> Result<Option<Token>, LexError> {
        let input = self.input;
        let start = self.current_pos;
        let position = self.current_position();
        let terminator = format!("</{name}");
        let after_terminator = terminator.chars().count();

        // `</scripts>` does not end a script.
        loop {
            if self.read_until(&terminator, true).is_none() {
                return Err(LexError::UnterminatedRawText { name, position });
            }
            let ends_name = self
                .peek_codepoint(after_terminator)
                .is_none_or(|c| Self::is_whitespace_char(c) || matches!(c, '/' | '>'));
            if ends_name {
                break;
            }
            self.advance();
        }

        let content = &input[start..self.current_pos];
        if content.is_empty() {
            return Ok(None);
        }
        let content = content.to_string();
        Ok(Some(Token::new(TokenKind::Text { content }, position)))
    }

    /// Read one tag, starting at its `<`.
    fn read_tag(&mut self) -> Result<Token, LexError> {
        let position = self.current_position();
        self.advance();

        // Markup declarations
        if self.next_few_characters_are("!--") {
            self.consume_string("!--");
            let Some(content) = self.read_until("-->", false) else {
                return Err(LexError::UnterminatedComment { position });
            };
            self.consume_string("-->");
            let content = content.to_string();
            return Ok(Token::new(TokenKind::Comment { content }, position));
        }
        if self.next_few_characters_are("![CDATA[") {
            self.consume_string("![CDATA[");
            let Some(content) = self.read_until("]]>", false) else {
                return Err(LexError::UnterminatedCData { position });
            };
            self.consume_string("]]>");
            let content = content.to_string();
            return Ok(Token::new(TokenKind::CData { content }, position));
        }
        if self.next_few_characters_are_case_insensitive("!doctype") {
            self.consume_string("!doctype");
            return self.read_doctype(position);
        }
        if self.next_few_characters_are("!") {
            // Bogus declaration, kept as a comment.
            self.advance();
            let Some(content) = self.read_until(">", false) else {
                return Err(LexError::UnexpectedEof {
                    context: "a markup declaration",
                    position,
                });
            };
            self.advance();
            let content = content.to_string();
            return Ok(Token::new(TokenKind::Comment { content }, position));
        }

        let is_end_tag = self.peek_codepoint(0) == Some('/');
        if is_end_tag {
            self.advance();
        }

        if self.peek_codepoint(0) == Some('?') {
            self.advance();
            return self.read_processing_instruction(position);
        }

        let name = self.read_word().to_string();
        if name.is_empty() {
            return Err(match self.peek_codepoint(0) {
                None => LexError::UnexpectedEof {
                    context: "a tag",
                    position,
                },
                Some(_) => LexError::MissingTagName { position },
            });
        }

        let (attributes, self_closing) = self.read_attributes(&name, position)?;
        let kind = if is_end_tag {
            TokenKind::EndTag { name }
        } else {
            TokenKind::StartTag {
                name,
                attributes,
                self_closing,
            }
        };
        Ok(Token::new(kind, position))
    }

    /// Read `key[=value]` pairs up to and including the closing `>`.
    fn read_attributes(
        &mut self,
        name: &str,
        position: Position,
    ) -> Result<(Attributes, bool), LexError> {
        let mut attributes = Attributes::new();
        let mut self_closing = false;

        loop {
            self.absorb_whitespace();
            match self.peek_codepoint(0) {
                None => {
                    return Err(LexError::UnexpectedEof {
                        context: "a tag",
                        position,
                    });
                }
                Some('>') => break,
                Some('/') => {
                    self.advance();
                    match self.peek_codepoint(0) {
                        Some('>') => {
                            self_closing = true;
                            break;
                        }
                        None => {
                            return Err(LexError::UnexpectedEof {
                                context: "a tag",
                                position,
                            });
                        }
                        Some(_) => {
                            return Err(LexError::MalformedTag {
                                name: name.to_string(),
                                position: self.current_position(),
                            });
                        }
                    }
                }
                Some(_) => {}
            }

            let key = self.read_word();
            if key.is_empty() {
                return Err(LexError::MalformedTag {
                    name: name.to_string(),
                    position: self.current_position(),
                });
            }

            self.absorb_whitespace();
            let value = if self.peek_codepoint(0) == Some('=') {
                self.advance();
                self.absorb_whitespace();
                self.read_attribute_value()?
            } else {
                AttributeValue::Present
            };
            attributes.insert(key.to_string(), value);
        }

        // The '>'
        self.advance();
        Ok((attributes, self_closing))
    }

    fn read_attribute_value(&mut self) -> Result<AttributeValue, LexError> {
        match self.peek_codepoint(0) {
            Some(quote @ ('"' | '\'')) => {
                let value = self.read_quoted(quote)?;
                Ok(AttributeValue::Text(value.to_string()))
            }
            None | Some('>') => Ok(AttributeValue::Present),
            Some(_) => {
                let value = self.read_unquoted_value();
                if value.is_empty() {
                    Ok(AttributeValue::Present)
                } else {
                    Ok(AttributeValue::Text(value.to_string()))
                }
            }
        }
    }

    /// `<!DOCTYPE name [PUBLIC "public" ["system"] | SYSTEM "system"]>`,
    /// entered after the keyword.
    fn read_doctype(&mut self, position: Position) -> Result<Token, LexError> {
        let mut parts = Vec::new();
        loop {
            self.absorb_whitespace();
            match self.peek_codepoint(0) {
                None => {
                    return Err(LexError::UnexpectedEof {
                        context: "a doctype",
                        position,
                    });
                }
                Some('>') => {
                    self.advance();
                    break;
                }
                Some(quote @ ('"' | '\'')) => parts.push(self.read_quoted(quote)?.to_string()),
                Some(_) => {
                    let word = self.read_word();
                    if word.is_empty() {
                        // A stray '=' or '/'.
                        self.advance();
                    } else {
                        parts.push(word.to_string());
                    }
                }
            }
        }

        let mut parts = parts.into_iter();
        let name = parts.next();
        let (public_id, system_id) = match parts.next() {
            Some(keyword) if keyword.eq_ignore_ascii_case("public") => (parts.next(), parts.next()),
            Some(keyword) if keyword.eq_ignore_ascii_case("system") => (None, parts.next()),
            _ => (None, None),
        };

        Ok(Token::new(
            TokenKind::Doctype {
                name,
                public_id,
                system_id,
            },
            position,
        ))
    }

    /// `<?name ...?>`, entered after the `?`.
    fn read_processing_instruction(&mut self, position: Position) -> Result<Token, LexError> {
        let word = self.read_word();
        let name = word.trim_end_matches('?').to_string();

        // `<?name?>`: the word already swallowed the '?'.
        if word.ends_with('?') && self.peek_codepoint(0) == Some('>') {
            self.advance();
        } else {
            if self.read_until("?>", false).is_none() {
                return Err(LexError::UnexpectedEof {
                    context: "a processing instruction",
                    position,
                });
            }
            self.consume_string("?>");
        }
        Ok(Token::new(
            TokenKind::ProcessingInstruction { name },
            position,
        ))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lex all of `input` at once.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).collect()
}
