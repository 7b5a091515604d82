//! Attribute rules.

use super::core::Validator;
use super::report::WarningKind;
use crate::error::{ErrorKind, Violation};
use crate::lexer::Attributes;

impl Validator<'_> {
    /// Check every attribute of the element `name`, returning the normalized
    /// attributes.
    ///
    /// Attribute names follow the same case rule as tag names. An attribute
    /// is accepted if it is global or specific to `name`. `data-*`,
    /// deprecated and SVG attributes are accepted with a warning. Anything
    /// else, and any repeated name, is an error.
    pub(super) fn check_attributes(
        &mut self,
        name: &str,
        attributes: &Attributes,
    ) -> Result<Attributes, Violation> {
        let rules = self.rules();
        let in_svg = self.stack_of_open_elements.in_svg();
        let attributes = attributes.normalized(in_svg);

        for duplicate in attributes.duplicates() {
            self.error(
                ErrorKind::InvalidAttribute,
                format!("\"{duplicate}\" is repeated on {name}"),
            )?;
        }

        for attr in &attributes {
            let key = attr.name.as_str();

            if rules.is_global_attribute(key) || rules.is_element_attribute(name, key) {
                continue;
            }
            if key.starts_with("data-") {
                self.warn(
                    WarningKind::DataAttribute,
                    "data-attributes aren't checked for validity yet".to_string(),
                );
                continue;
            }
            if rules.is_deprecated_attribute(name, key) {
                self.warn(
                    WarningKind::DeprecatedAttribute,
                    format!("{name} should NOT have {key}={} in HTML5.", attr.value),
                );
                continue;
            }
            if in_svg || name == "svg" {
                self.warn(
                    WarningKind::SvgAttribute,
                    "svg attributes aren't checked for validity yet".to_string(),
                );
                continue;
            }

            self.error(
                ErrorKind::InvalidAttribute,
                format!("\"{key}\" is not a valid attribute for {name}"),
            )?;
        }

        Ok(attributes)
    }
}
