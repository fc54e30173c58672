//! # Error Taxonomy
//!
//! Every stage of a run reports through [`Error`]. None of the variants are
//! recoverable: the binary prints the message and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Wrong token count, a token that is not a number, or a value out of range.
    #[error("invalid {field}: {reason}")]
    InputFormat { field: String, reason: String },

    /// The prompt stream could not be read (or written to).
    #[error("error reading input: {0}")]
    StreamRead(#[from] io::Error),

    /// Sampling interval, bounds or rendering options that cannot produce a plot.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The plotting sink could not produce the output file.
    #[error("could not save plot to '{}': {reason}", path.display())]
    Render { path: PathBuf, reason: String },
}

impl Error {
    pub fn input_format(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InputFormat {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn render(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Render {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
