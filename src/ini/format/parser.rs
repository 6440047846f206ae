//! Line-oriented INI parsing.
//!
//! Each line is trimmed and classified on its own; there is no lookahead.
//! The result is built into a fresh [`Sections`] map that is only handed back
//! once every line has been accepted.

use crate::ini::types::{
    error::{IniError, Result},
    models::{DuplicateSections, Line, ParseOptions, Section, Sections},
};

/// Separator between a key and its value.
pub const SEPARATOR: &str = " = ";

/// Characters that start a full-line comment.
pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Parses `text` into sections.
///
/// Entries that appear before the first header are stored under the empty
/// section name. A header without any following entry does not create a section.
///
/// # Errors
/// Returns [`IniError::Format`] for the first line that is not blank, a comment,
/// a `[name]` header or a `key = value` pair.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Sections> {
    let mut sections = Sections::new();
    let mut current = "";
    let mut reset_pending = false;

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        match classify_line(line).ok_or_else(|| IniError::format(index + 1, line))? {
            Line::Skip => {}
            Line::Header(name) => {
                current = name;
                reset_pending = options.duplicate_sections == DuplicateSections::Reset;
            }
            Line::Entry { key, value } => {
                if reset_pending {
                    sections.insert(current.to_string(), Section::new());
                    reset_pending = false;
                }
                sections
                    .entry(current.to_string())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
            }
        }
    }

    Ok(sections)
}

/// Classifies an already trimmed line. Returns `None` when the line is malformed.
pub(crate) fn classify_line(line: &str) -> Option<Line<'_>> {
    if line.is_empty() || line.starts_with(&COMMENT_MARKERS[..]) {
        return Some(Line::Skip);
    }

    match (line.starts_with('['), line.ends_with(']')) {
        (true, true) => Some(Line::Header(&line[1..line.len() - 1])),
        (false, false) => split_entry(line),
        // Half a header
        _ => None,
    }
}

fn split_entry(line: &str) -> Option<Line<'_>> {
    if let Some((key, value)) = line.split_once(SEPARATOR) {
        return Some(Line::Entry { key, value });
    }
    // `key = ` loses its trailing space to trimming.
    line.strip_suffix(SEPARATOR.trim_end())
        .map(|key| Line::Entry { key, value: "" })
}
