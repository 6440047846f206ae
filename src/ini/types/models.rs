//! Data structures shared by the parser, the writer and the file adapters.

use std::collections::BTreeMap;
use encoding_rs::Encoding;
use super::error::Result;
use crate::ini::codec;

/// Key/value pairs of a single section, ordered by key.
pub type Section = BTreeMap<String, String>;

/// All sections of a document, ordered by section name.
pub type Sections = BTreeMap<String, Section>;

/// What happens when a section header appears a second time in the same input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateSections {
    /// Entries under the later header replace everything recorded under the earlier one.
    #[default]
    Reset,
    /// Entries under the later header are upserted into the existing section.
    Merge,
}

/// Options controlling how text is turned into a [`Document`](crate::Document).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicate_sections: DuplicateSections,
}

impl ParseOptions {
    pub fn with_duplicate_sections(mut self, policy: DuplicateSections) -> Self {
        self.duplicate_sections = policy;
        self
    }
}

/// Options for reading and writing documents on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileOptions {
    /// Text encoding of the file. `None` means UTF-8.
    ///
    /// A byte-order mark in the input always takes precedence.
    pub encoding: Option<&'static Encoding>,
    pub parse: ParseOptions,
}

impl FileOptions {
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Sets the encoding from a WHATWG label such as `"utf-8"` or `"windows-1252"`.
    pub fn with_encoding_label(self, label: &str) -> Result<Self> {
        Ok(self.with_encoding(codec::parse_encoding(label)?))
    }

    pub fn with_duplicate_sections(mut self, policy: DuplicateSections) -> Self {
        self.parse.duplicate_sections = policy;
        self
    }
}

/// Classification of a single trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Blank line or full-line comment.
    Skip,
    Header(&'a str),
    Entry { key: &'a str, value: &'a str },
}
