//! Template merging and `.gitignore` operations for gitig.
//!
//! [`MergeEngine`] combines resolved templates with an existing ignore file;
//! the [`ops`] module builds the user-facing commands on top of it.

pub mod backup;
pub mod detect;
mod engine;
mod index;
mod names;
pub mod ops;

pub use engine::{
    AppliedTemplate, MergeEngine, MergeOutcome, MergeStrategy, SkippedTemplate,
};
pub use index::PatternIndex;
pub use names::NameList;
