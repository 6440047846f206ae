//! Core INI document module

pub mod codec;
pub mod document;
pub mod file;
pub mod format;
pub mod types;

pub use document::Document;
pub use types::error::{IniError, Result};
pub use types::models::{DuplicateSections, FileOptions, ParseOptions, Section, Sections};
