//! # ini-parser
//!
//! Parses simple INI text into a section → key → value [`Document`] and
//! writes it back out in a canonical, sorted form.
//!
//! ```
//! use ini_parser::Document;
//!
//! let mut doc = Document::parse("[owner]\nname = John Doe").unwrap();
//! doc.set("owner", "organization", "Acme Widgets Inc.");
//! assert_eq!(doc.get("owner", "name"), Some("John Doe"));
//! assert_eq!(
//!     doc.serialize(),
//!     "[owner]\nname = John Doe\norganization = Acme Widgets Inc.\n\n"
//! );
//! ```
pub mod ini;

// Re-export the main types for convenience
pub use ini::{
    Document,
    IniError,
    Result,
    types::models::{
        DuplicateSections,
        FileOptions,
        ParseOptions,
        Section,
        Sections,
    },
};
