use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::file;
use super::format::{parser, writer};
use super::types::error::{IniError, Result};
use super::types::models::{FileOptions, ParseOptions, Section, Sections};

/// An in-memory INI document: section name → key → value.
///
/// Entries that precede any section header live under the empty section name.
/// Sections and keys are kept in ascending order, so [`serialize`](Self::serialize)
/// output does not depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: Sections,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses INI text with the default [`ParseOptions`].
    ///
    /// # Errors
    /// Returns [`IniError::Format`] naming the first malformed line.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses INI text with explicit options.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            sections: parser::parse(text, options)?,
        })
    }

    /// Replaces the content of this document with the parsed `text`.
    ///
    /// On error the document is left untouched.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        *self = Self::parse(text)?;
        Ok(())
    }

    /// Reads and parses a UTF-8 file.
    ///
    /// # Errors
    /// Returns [`IniError::Io`] if the file cannot be read, otherwise the
    /// errors of [`parse`](Self::parse).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, &FileOptions::default())
    }

    /// Reads and parses a file using the given encoding and parse options.
    pub fn from_file_with(path: impl AsRef<Path>, options: &FileOptions) -> Result<Self> {
        let text = file::read(path.as_ref(), options)?;
        Self::parse_with(&text, &options.parse)
    }

    /// Replaces the content of this document with the parsed file at `path`.
    ///
    /// On error the document is left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = Self::from_file(path)?;
        Ok(())
    }

    /// Writes the canonical serialization to `path` as UTF-8.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to_file_with(path, &FileOptions::default())
    }

    /// Writes the canonical serialization to `path` in the configured encoding.
    pub fn save_to_file_with(&self, path: impl AsRef<Path>, options: &FileOptions) -> Result<()> {
        file::write(path.as_ref(), &self.serialize(), options)
    }

    /// Returns all section names in ascending order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Returns the full section → key → value structure.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Looks up a value. `None` if either the section or the key is absent.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Stores `value` under `section`/`key`, creating the section if needed.
    ///
    /// Any strings are accepted, but the text format has no escaping. The
    /// entry will not survive [`serialize`](Self::serialize) followed by
    /// [`parse`](Self::parse) if any string contains a newline, or if:
    /// - the key is empty, starts with whitespace, `#`, `;` or `[`, contains
    ///   `" = "` or ends in `" ="`;
    /// - the value ends in `]` or in whitespace.
    ///
    /// Depending on the case, reparsing fails with [`IniError::Format`], drops
    /// the entry as a comment, or stores different strings.
    pub fn set(&mut self, section: impl Into<String>, key: impl Into<String>, value: impl Into<String>) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Renders the document in canonical form.
    ///
    /// Comments, blank lines and input order are not preserved.
    pub fn serialize(&self) -> String {
        writer::serialize(&self.sections)
    }

    /// Renders the document in canonical form into `out`.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writer::write_to(&self.sections, out)
    }
}

impl FromStr for Document {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
