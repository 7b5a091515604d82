use core::fmt;

use serde::Serialize;

/// A line/column pair, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number, counting `\n` characters.
    pub line: usize,
    /// Column in characters within the line.
    pub column: usize,
}

impl Position {
    /// The first character of the input.
    pub const START: Self = Self { line: 1, column: 1 };

    /// Create a position from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The value of an attribute: quoted or unquoted text, or bare presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// `key=value`, `key="value"` or `key='value'`
    Text(String),
    /// A bare `key` with no `=`.
    Present,
}

impl AttributeValue {
    /// The textual value; a bare attribute reads as the empty string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Present => "",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Present => write!(f, "true"),
        }
    }
}

/// An attribute on a start tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The attribute name, as written unless normalized.
    pub name: String,
    /// The attribute value.
    pub value: AttributeValue,
}

/// The ordered attribute map of one start tag.
///
/// Repeated `style` attributes are merged by joining their values with `;`.
/// Any other repeated name keeps its first value and is remembered in
/// [`Attributes::duplicates`] so the validator can report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    entries: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    duplicates: Vec<String>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    /// Add an attribute, applying the duplicate rules.
    pub fn insert(&mut self, name: String, value: AttributeValue) {
        match self.entries.iter().position(|attr| attr.name == name) {
            None => self.entries.push(Attribute { name, value }),
            Some(index) if name == "style" => {
                let existing = &mut self.entries[index];
                let merged = format!("{};{}", existing.value.as_str(), value.as_str());
                existing.value = AttributeValue::Text(merged);
            }
            Some(_) => self.duplicates.push(name),
        }
    }

    /// Look up an attribute by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }

    /// Iterate over attributes in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    /// Number of distinct attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tag carried no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that were repeated on the tag (other than `style`).
    #[must_use]
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Copy of this map with names lower-cased unless `case_sensitive`.
    ///
    /// Names that only collide after lower-casing follow the same duplicate
    /// rules as exact repeats.
    #[must_use]
    pub fn normalized(&self, case_sensitive: bool) -> Self {
        let fold = |name: &str| {
            if case_sensitive {
                name.to_string()
            } else {
                name.to_ascii_lowercase()
            }
        };

        let mut normalized = Self {
            entries: Vec::with_capacity(self.entries.len()),
            duplicates: self.duplicates.iter().map(|name| fold(name)).collect(),
        };
        for attr in &self.entries {
            normalized.insert(fold(&attr.name), attr.value.clone());
        }
        normalized
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, AttributeValue)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// The kinds of token the lexer produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `<!DOCTYPE name PUBLIC "public" "system">`
    Doctype {
        /// The root element name, usually `html`.
        name: Option<String>,
        /// The public identifier, if given.
        public_id: Option<String>,
        /// The system identifier, if given.
        system_id: Option<String>,
    },

    /// `<name key=value ...>` or `<name ... />`
    StartTag {
        /// The tag name, exactly as written.
        name: String,
        /// The tag's attributes.
        attributes: Attributes,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },

    /// `</name>`
    EndTag {
        /// The tag name, exactly as written.
        name: String,
    },

    /// A run of character data between tags.
    Text {
        /// The raw text, whitespace included.
        content: String,
    },

    /// `<!-- content -->`
    Comment {
        /// Everything between the delimiters.
        content: String,
    },

    /// `<![CDATA[ content ]]>`
    CData {
        /// Everything between the delimiters.
        content: String,
    },

    /// `<?name ...?>`
    ProcessingInstruction {
        /// The target name following `?`.
        name: String,
    },

    /// A node an alternate token source could not map onto markup.
    /// The lexer never produces this.
    Unrecognized {
        /// What the source had in hand.
        description: String,
    },
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where it starts.
    pub position: Position,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Returns true if this is a start tag with the given name (ASCII
    /// case-insensitive).
    #[must_use]
    pub fn is_start_tag_named(&self, tag: &str) -> bool {
        matches!(&self.kind, TokenKind::StartTag { name, .. } if name.eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.position)?;
        match &self.kind {
            TokenKind::Doctype {
                name,
                public_id,
                system_id,
            } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                if let Some(public) = public_id {
                    write!(f, " PUBLIC \"{public}\"")?;
                }
                if let Some(system) = system_id {
                    write!(f, " SYSTEM \"{system}\"")?;
                }
                Ok(())
            }
            TokenKind::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    match &attr.value {
                        AttributeValue::Text(value) => write!(f, " {}=\"{value}\"", attr.name)?,
                        AttributeValue::Present => write!(f, " {}", attr.name)?,
                    }
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            TokenKind::EndTag { name } => write!(f, "</{name}>"),
            TokenKind::Text { content } => write!(f, "TEXT({content:?})"),
            TokenKind::Comment { content } => write!(f, "<!--{content}-->"),
            TokenKind::CData { content } => write!(f, "<![CDATA[{content}]]>"),
            TokenKind::ProcessingInstruction { name } => write!(f, "<?{name}?>"),
            TokenKind::Unrecognized { description } => write!(f, "UNRECOGNIZED({description})"),
        }
    }
}
