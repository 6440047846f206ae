//! Byte-source and byte-sink adapters.
//!
//! Plain blocking reads and writes; failures are returned unchanged and never retried.

use std::fs;
use std::path::Path;
use log::{debug, info};
use super::codec;
use super::types::{error::Result, models::FileOptions};

/// Reads the file at `path` and decodes it to text.
pub fn read(path: &Path, options: &FileOptions) -> Result<String> {
    info!("Reading INI file: {}", path.display());
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    codec::decode(&bytes, options.encoding)
}

/// Encodes `text` and writes it to `path`, replacing any existing file.
pub fn write(path: &Path, text: &str, options: &FileOptions) -> Result<()> {
    let bytes = codec::encode(text, options.encoding)?;
    info!("Writing INI file: {} ({} bytes)", path.display(), bytes.len());
    fs::write(path, bytes)?;
    Ok(())
}
