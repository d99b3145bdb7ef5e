//! Report data structures for commands.
//!
//! Commands run an operation, wrap its outcome in a report, then render the
//! report to an Output target.

mod catalog;
mod merge;
mod output;
mod patterns;

pub use catalog::{BackupsReport, CacheClearReport, GlobalInitReport, ListReport, TemplateReport};
pub use merge::{AutoReport, OutcomeReport};
pub use output::{Output, Report, TerminalOutput};
pub use patterns::PatternsReport;
