use core::fmt;

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::config::Mode;
use crate::error::{Location, Violation};

/// Markup that is accepted but not fully checked, or tolerated but obsolete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
pub enum WarningKind {
    /// A `data-*` attribute; their values are not validated.
    DataAttribute,
    /// An attribute that HTML5 made obsolete.
    DeprecatedAttribute,
    /// An attribute inside an `svg` subtree; SVG attributes are not
    /// validated.
    SvgAttribute,
    /// `<div/>`: the self-closing flag is ignored on non-void elements.
    SelfClosingNonVoid,
}

/// A tolerated problem. Warnings never make a document invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// What was tolerated.
    pub kind: WarningKind,
    /// Where.
    pub location: Location,
    /// Human-readable detail.
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (WARNING) - {}", self.location, self.message)
    }
}

/// The outcome of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// True when no errors were recorded.
    pub valid: bool,
    /// Violations, in document order.
    pub errors: Vec<Violation>,
    /// Warnings, in document order.
    pub warnings: Vec<Warning>,
    /// Whether a `<!DOCTYPE>` was seen.
    pub doctype_seen: bool,
}

impl Report {
    /// Returns true if the document passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid && self.errors.is_empty()
    }
}

/// The single place violations and warnings go.
///
/// In fail-fast mode a violation comes straight back as `Err` so the caller
/// can `?` it out of the run; in accumulate mode it is recorded and `Ok`
/// lets processing continue.
#[derive(Debug)]
pub(crate) struct Diagnostics {
    mode: Mode,
    errors: Vec<Violation>,
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub(crate) const fn new(mode: Mode) -> Self {
        Self {
            mode,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, violation: Violation) -> Result<(), Violation> {
        tracing::error!("{violation}");
        match self.mode {
            Mode::FailFast => Err(violation),
            Mode::Accumulate => {
                self.errors.push(violation);
                Ok(())
            }
        }
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub(crate) fn into_report(self, doctype_seen: bool) -> Report {
        Report {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            doctype_seen,
        }
    }
}
