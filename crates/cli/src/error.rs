//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: render error (unknown table key, opacity or tile size out of range)
//! - 11: I/O error (writing the output file)
//! - 12: input error (bad --params JSON, config that is not an object)
//! - 13: serialization error

use backdrop_core::BackdropError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A render-level error (unknown key, value out of range).
    Render(BackdropError),
    /// An I/O error (file write).
    Io(String),
    /// A user input error (bad JSON params).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Render(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Render(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<BackdropError> for CliError {
    fn from(e: BackdropError) -> Self {
        match e {
            BackdropError::InvalidConfig(msg) => CliError::Input(msg),
            other => CliError::Render(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
