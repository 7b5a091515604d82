//! Placement rules: may an element appear with the current elements open?

use super::core::Validator;
use crate::error::{ErrorKind, Violation};

impl Validator<'_> {
    /// Check that `name` has a legal ancestor on the stack of open elements.
    ///
    /// `<head>` and `<body>` may be omitted, so this also opens and closes
    /// them implicitly: a non-metadata element after `<head>` moves on to an
    /// implied `<body>`, and an element directly inside `<html>` opens the
    /// section it belongs in.
    ///
    /// When the outermost open element is not `html` the input is a fragment
    /// and `body` counts as an open ancestor.
    pub(super) fn check_placement(&mut self, name: &str) -> Result<(), Violation> {
        let rules = self.rules();

        // The document element and its sections, before anything else.
        if self.stack_of_open_elements.is_empty() && matches!(name, "html" | "head" | "body") {
            return Ok(());
        }

        let Some(parents) = rules.legal_parents(name) else {
            return self.error(
                ErrorKind::InvalidTag,
                format!("{name} is not a valid HTML5 tag."),
            );
        };

        if rules.is_metadata(name)
            && (self.stack_of_open_elements.is_empty() || self.stack_of_open_elements.is_only_html())
        {
            return Ok(());
        }

        if self.stack_of_open_elements.current() == Some("head") {
            if name == "body" {
                tracing::debug!("{}: <body> implies </head>", self.location());
                let _ = self.stack_of_open_elements.pop();
            } else if !rules.is_metadata(name) {
                tracing::debug!("{}: <{name}> implies </head>", self.location());
                let _ = self.stack_of_open_elements.pop();
                self.open_implied("body");
            }
        }

        let has_parent = |parent: &str| parents.iter().any(|p| p == parent);
        if self.stack_of_open_elements.is_only_html() {
            if has_parent("head") {
                self.open_implied("head");
            } else if has_parent("body") {
                self.open_implied("body");
            }
        }

        let placeable = parents
            .iter()
            .any(|parent| self.stack_of_open_elements.contains(parent))
            || (has_parent("body") && self.stack_of_open_elements.is_fragment());
        if placeable {
            Ok(())
        } else {
            self.error(
                ErrorKind::MisplacedElement,
                format!("{name} must be inside one of: {}", parents.join(", ")),
            )
        }
    }
}
