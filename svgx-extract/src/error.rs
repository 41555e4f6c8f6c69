//! Error types for preview assembly.
//!
//! Extraction and conversion are total — malformed input degrades to smaller
//! results plus diagnostics, never an error. Only the preview surface has
//! genuinely failable operations: selecting a fragment that does not exist
//! and naming a theme that does not exist.

use std::fmt;

/// Errors that can occur while assembling preview output
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// Theme name not recognized
    UnknownTheme(String),
    /// Fragment index beyond the extracted component list
    ComponentIndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::UnknownTheme(name) => write!(f, "Unknown preview theme '{name}'"),
            PreviewError::ComponentIndexOutOfRange { index, len } => {
                write!(f, "Component index {index} out of range ({len} extracted)")
            }
        }
    }
}

impl std::error::Error for PreviewError {}
