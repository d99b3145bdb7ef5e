//! Core utilities and types for the gitig `.gitignore` generator.
//!
//! This crate provides the error type, settings, well-known paths and the
//! line tokenizer shared by the template and merge crates.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
pub mod lines;
mod paths;
mod settings;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, WriteResult, ensure_dir};
pub use paths::{AUTO_TEMPLATE, AppDirs, GITIGNORE, GLOBAL_GITIGNORE};
pub use settings::{DEFAULT_CACHE_DURATION, Settings};

/// Version stamped into generated file headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
