//! Canonical INI serialization.

use std::fmt::{self, Write};
use crate::ini::types::models::Sections;
use super::parser::SEPARATOR;

/// Writes `sections` in canonical form.
///
/// Sections and keys come out in ascending order (the maps are ordered).
/// Every section is a `[name]` header, one `key = value` line per entry and
/// a terminating blank line, including the last one.
pub fn write_to<W: Write>(sections: &Sections, out: &mut W) -> fmt::Result {
    for (name, section) in sections {
        writeln!(out, "[{}]", name)?;
        for (key, value) in section {
            writeln!(out, "{}{}{}", key, SEPARATOR, value)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Serializes `sections` into a new string.
pub fn serialize(sections: &Sections) -> String {
    let mut out = String::new();
    write_to(sections, &mut out).expect("writing to a String cannot fail");
    out
}
