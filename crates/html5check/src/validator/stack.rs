/// The names of the currently open elements, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OpenElements {
    names: Vec<String>,
}

impl OpenElements {
    pub(crate) const fn new() -> Self {
        Self { names: Vec::new() }
    }

    pub(crate) fn push(&mut self, name: String) {
        self.names.push(name);
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    /// The innermost open element.
    pub(crate) fn current(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|open| open == name)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    /// Exactly `[html]`: past the document element, before any section.
    pub(crate) fn is_only_html(&self) -> bool {
        matches!(self.names.as_slice(), [only] if only == "html")
    }

    /// Inside an `svg` subtree, where names are case-sensitive.
    pub(crate) fn in_svg(&self) -> bool {
        self.contains("svg")
    }

    /// Not rooted at `html`: the input is a document fragment.
    pub(crate) fn is_fragment(&self) -> bool {
        self.names.first().is_none_or(|outermost| outermost != "html")
    }

    /// The elements open above the innermost `name`.
    pub(crate) fn above(&self, name: &str) -> &[String] {
        self.names
            .iter()
            .rposition(|open| open == name)
            .map_or(&[][..], |index| &self.names[index + 1..])
    }
}

#[cfg(test)]
mod tests {
    use super::OpenElements;

    fn stack(names: &[&str]) -> OpenElements {
        let mut stack = OpenElements::new();
        for name in names {
            stack.push((*name).to_string());
        }
        stack
    }

    #[test]
    fn test_only_html() {
        assert!(stack(&["html"]).is_only_html());
        assert!(!stack(&["html", "body"]).is_only_html());
        assert!(!stack(&[]).is_only_html());
    }

    #[test]
    fn test_fragment() {
        assert!(stack(&[]).is_fragment());
        assert!(stack(&["div", "p"]).is_fragment());
        assert!(!stack(&["html", "body"]).is_fragment());
    }

    #[test]
    fn test_above() {
        let open = stack(&["html", "body", "div", "p", "span"]);
        assert_eq!(open.above("div"), ["p".to_string(), "span".to_string()]);
        assert!(open.above("span").is_empty());
        assert!(open.above("table").is_empty());
    }

    #[test]
    fn test_current() {
        let mut open = stack(&["svg", "g"]);
        assert!(open.in_svg());
        assert_eq!(open.current(), Some("g"));
        assert_eq!(open.pop().as_deref(), Some("g"));
        assert_eq!(open.current(), Some("svg"));
    }
}
