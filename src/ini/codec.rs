//! Conversion between raw file bytes and document text.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use log::debug;
use super::types::error::{IniError, Result};

/// Looks up an encoding by its WHATWG label (case-insensitive, e.g. `"latin1"`, `"utf-16le"`).
pub fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| IniError::UnsupportedEncoding(label.to_string()))
}

/// Decodes file contents. A byte-order mark overrides `encoding`, which defaults to UTF-8.
pub fn decode(bytes: &[u8], encoding: Option<&'static Encoding>) -> Result<String> {
    let requested = encoding.unwrap_or(UTF_8);
    let (text, used, had_errors) = requested.decode(bytes);
    if used != requested {
        debug!("Byte-order mark selects {} over {}", used.name(), requested.name());
    }
    if had_errors {
        return Err(IniError::Decode { encoding: used.name() });
    }
    Ok(text.into_owned())
}

/// Encodes document text for writing. No byte-order mark is emitted.
///
/// `encoding_rs` only encodes to UTF-8 for the UTF-16 family, so those two
/// are produced from `str::encode_utf16` directly.
pub fn encode(text: &str, encoding: Option<&'static Encoding>) -> Result<Vec<u8>> {
    let requested = encoding.unwrap_or(UTF_8);
    if requested == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if requested == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }
    let (bytes, used, had_errors) = requested.encode(text);
    if had_errors {
        return Err(IniError::Encode { encoding: used.name() });
    }
    Ok(bytes.into_owned())
}
