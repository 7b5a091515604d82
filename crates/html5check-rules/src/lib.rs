//! Rule tables for the html5check validator.
//!
//! # Scope
//!
//! This crate holds the reference data the validator queries for every tag:
//! - **Placement** - legal ancestors per element, metadata/void sets,
//!   elements that may not nest inside themselves
//! - **Implicit closing** ([WHATWG § 13.1.2.4](https://html.spec.whatwg.org/multipage/syntax.html#optional-tags))
//!   - start tags that close the open element, end tags that close it from above
//! - **Attributes** - global and per-element allow-lists, deprecated attributes
//!
//! A [`RuleTables`] value is built once and never changes afterwards. Callers
//! that need extra attributes apply a [`RuleOverrides`] while constructing it;
//! the validator only ever holds a shared reference.

mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Deserialize;

static SHARED: LazyLock<RuleTables> = LazyLock::new(RuleTables::html5);

/// User additions applied on top of the HTML5 tables.
///
/// Deserialized from the `rules` section of a configuration file:
///
/// ```json
/// { "global_attributes": ["hx-get"], "attribute_prefixes": ["ng-", "v-"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverrides {
    /// Extra attribute names accepted on every element.
    pub global_attributes: Vec<String>,
    /// Attribute name prefixes accepted on every element without a warning.
    pub attribute_prefixes: Vec<String>,
    /// Extra attribute names accepted on specific elements.
    pub element_attributes: HashMap<String, Vec<String>>,
}

impl RuleOverrides {
    /// Returns true if applying these overrides would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global_attributes.is_empty()
            && self.attribute_prefixes.is_empty()
            && self.element_attributes.is_empty()
    }
}

/// Immutable HTML5 placement and attribute rules.
#[derive(Debug, Clone)]
pub struct RuleTables {
    legal_parents: HashMap<String, Vec<String>>,
    metadata_elements: HashSet<String>,
    void_elements: HashSet<String>,
    optional_void_elements: HashSet<String>,
    non_recursable: HashSet<String>,
    implied_end_tags: HashMap<String, HashSet<String>>,
    closed_by_parent: HashMap<String, HashSet<String>>,
    global_attributes: HashSet<String>,
    global_attribute_prefixes: Vec<String>,
    element_attributes: HashMap<String, HashSet<String>>,
    deprecated_attributes: HashMap<String, HashSet<String>>,
}

fn set_of(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn map_of_sets(entries: &[(&str, &[&str])]) -> HashMap<String, HashSet<String>> {
    entries
        .iter()
        .map(|(key, names)| ((*key).to_string(), set_of(names)))
        .collect()
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::html5()
    }
}

impl RuleTables {
    /// Build the default HTML5 tables.
    #[must_use]
    pub fn html5() -> Self {
        Self {
            legal_parents: tables::LEGAL_PARENTS
                .iter()
                .map(|(tag, parents)| {
                    let parents = parents.iter().map(|p| (*p).to_string()).collect();
                    ((*tag).to_string(), parents)
                })
                .collect(),
            metadata_elements: set_of(tables::METADATA_ELEMENTS),
            void_elements: set_of(tables::VOID_ELEMENTS),
            optional_void_elements: set_of(tables::OPTIONAL_VOID_ELEMENTS),
            non_recursable: set_of(tables::NON_RECURSABLE),
            implied_end_tags: map_of_sets(tables::IMPLIED_END_TAGS),
            closed_by_parent: map_of_sets(tables::CLOSED_BY_PARENT),
            global_attributes: set_of(tables::GLOBAL_ATTRIBUTES),
            global_attribute_prefixes: tables::GLOBAL_ATTRIBUTE_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            element_attributes: map_of_sets(tables::ELEMENT_ATTRIBUTES),
            deprecated_attributes: map_of_sets(tables::DEPRECATED_ATTRIBUTES),
        }
    }

    /// The process-wide default tables, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Build the HTML5 tables with `overrides` applied.
    #[must_use]
    pub fn with_overrides(overrides: &RuleOverrides) -> Self {
        let mut rules = Self::html5();
        rules
            .global_attributes
            .extend(overrides.global_attributes.iter().cloned());
        rules
            .global_attribute_prefixes
            .extend(overrides.attribute_prefixes.iter().cloned());
        for (tag, names) in &overrides.element_attributes {
            rules
                .element_attributes
                .entry(tag.clone())
                .or_default()
                .extend(names.iter().cloned());
        }
        rules
    }

    /// Legal ancestors of `tag`, or `None` if the tag is unknown.
    ///
    /// The document element has an empty list.
    #[must_use]
    pub fn legal_parents(&self, tag: &str) -> Option<&[String]> {
        self.legal_parents.get(tag).map(Vec::as_slice)
    }

    /// Returns true if `tag` appears in the known-tag table.
    #[must_use]
    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.legal_parents.contains_key(tag)
    }

    /// § 3.2.5.2.1 Metadata content
    #[must_use]
    pub fn is_metadata(&self, tag: &str) -> bool {
        self.metadata_elements.contains(tag)
    }

    /// § 13.1.2 Void elements: never have content or an end tag.
    #[must_use]
    pub fn is_void(&self, tag: &str) -> bool {
        self.void_elements.contains(tag)
    }

    /// Foreign elements that open nothing when written self-closed.
    #[must_use]
    pub fn is_optional_void(&self, tag: &str) -> bool {
        self.optional_void_elements.contains(tag)
    }

    /// Returns true if `tag` may not be nested inside itself.
    #[must_use]
    pub fn is_non_recursable(&self, tag: &str) -> bool {
        self.non_recursable.contains(tag)
    }

    /// Returns true if a start tag named `incoming` implicitly closes the
    /// currently open `open` element.
    #[must_use]
    pub fn implies_end_of(&self, open: &str, incoming: &str) -> bool {
        self.implied_end_tags
            .get(open)
            .is_some_and(|closers| closers.contains(incoming))
    }

    /// Returns true if the end tag of the ancestor `end_tag` may close the
    /// open element `open` whose own end tag was omitted.
    #[must_use]
    pub fn closed_by_parent(&self, open: &str, end_tag: &str) -> bool {
        self.closed_by_parent
            .get(open)
            .is_some_and(|parents| parents.contains(end_tag))
    }

    /// Returns true if `attribute` is allowed on every element.
    #[must_use]
    pub fn is_global_attribute(&self, attribute: &str) -> bool {
        self.global_attributes.contains(attribute)
            || self
                .global_attribute_prefixes
                .iter()
                .any(|prefix| attribute.starts_with(prefix.as_str()))
    }

    /// Returns true if `attribute` is in the allow-list specific to `tag`.
    #[must_use]
    pub fn is_element_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.element_attributes
            .get(tag)
            .is_some_and(|names| names.contains(attribute))
    }

    /// Returns true if `attribute` on `tag` is obsolete but tolerated.
    #[must_use]
    pub fn is_deprecated_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.deprecated_attributes
            .get(tag)
            .is_some_and(|names| names.contains(attribute))
    }
}
