//! Text format layer.
//!
//! - [`parser`]: text → sections, with per-line classification
//! - [`writer`]: sections → canonical text
//!
//! ```text
//! [section-name]      ← header, brackets on one line
//! key = value         ← split on the first " = "
//! ; note / # note     ← full-line comments, discarded
//!                     ← blank lines, discarded
//! ```

pub mod parser;
pub mod writer;
