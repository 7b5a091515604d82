/// A text run split as `(leading whitespace)(core)(trailing whitespace)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TextParts<'a> {
    pub(crate) leading: &'a str,
    pub(crate) core: &'a str,
    pub(crate) trailing: &'a str,
}

impl<'a> TextParts<'a> {
    /// Split `text`. Whitespace-only text is all `leading`.
    pub(crate) fn split(text: &'a str) -> Self {
        let core = text.trim();
        if core.is_empty() {
            return Self {
                leading: text,
                core,
                trailing: "",
            };
        }
        let core_start = text.len() - text.trim_start().len();
        let core_end = core_start + core.len();
        Self {
            leading: &text[..core_start],
            core,
            trailing: &text[core_end..],
        }
    }

    /// Returns true if there is character data besides whitespace.
    pub(crate) const fn has_content(&self) -> bool {
        !self.core.is_empty()
    }
}
