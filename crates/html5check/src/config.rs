//! Run configuration.
//!
//! [`Options`] selects how a single run behaves. [`Config`] is the on-disk
//! form, which additionally carries [`RuleOverrides`] for the rule tables:
//!
//! ```json
//! {
//!   "mode": "accumulate",
//!   "require_doctype": true,
//!   "rules": { "attribute_prefixes": ["ng-", "v-"] }
//! }
//! ```

use std::borrow::Cow;

use html5check_rules::{RuleOverrides, RuleTables};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// What the validator does with a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Record every violation and keep going.
    Accumulate,
}

/// Per-run validation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Fail-fast or accumulate.
    pub mode: Mode,
    /// Report [`MissingDoctype`](crate::ErrorKind::MissingDoctype) when the
    /// document has no `<!DOCTYPE>`.
    pub require_doctype: bool,
}

impl Options {
    /// Options for an accumulating run.
    #[must_use]
    pub const fn accumulate() -> Self {
        Self {
            mode: Mode::Accumulate,
            require_doctype: false,
        }
    }

    /// Same options with the doctype requirement set.
    #[must_use]
    pub const fn with_require_doctype(mut self, require_doctype: bool) -> Self {
        self.require_doctype = require_doctype;
        self
    }
}

/// Configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fail-fast or accumulate.
    pub mode: Mode,
    /// Require a `<!DOCTYPE>`.
    pub require_doctype: bool,
    /// Additions to the HTML5 rule tables.
    pub rules: RuleOverrides,
}

impl Config {
    /// The run options this configuration selects.
    #[must_use]
    pub const fn options(&self) -> Options {
        Options {
            mode: self.mode,
            require_doctype: self.require_doctype,
        }
    }

    /// The rule tables to validate against.
    ///
    /// Without overrides this is the shared default; otherwise a fresh copy
    /// with the overrides applied.
    #[must_use]
    pub fn rule_tables(&self) -> Cow<'static, RuleTables> {
        if self.rules.is_empty() {
            Cow::Borrowed(RuleTables::shared())
        } else {
            Cow::Owned(RuleTables::with_overrides(&self.rules))
        }
    }
}
