//! Structural and attribute validation over a token stream.

mod attributes;
/// The validator state machine.
pub mod core;
/// Events produced while validating.
pub mod event;
mod placement;
/// Reports, warnings and the diagnostics sink.
pub mod report;
mod stack;
mod text;

pub use self::core::Validator;
pub use event::Event;
pub use report::{Report, Warning, WarningKind};
