//! Error types for the Sketch compiler
//!
//! Parsing and rendering are total functions; everything that can fail lives in the
//! surrounding glue (reading descriptions, loading config, writing previews).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SketchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty description: please enter a description")]
    EmptyDescription,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Theme error: {message}")]
    Theme { message: String },

    #[error("Watch error: {message}")]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, SketchError>;

impl SketchError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn theme(message: impl Into<String>) -> Self {
        Self::Theme {
            message: message.into(),
        }
    }

    pub fn watch(message: impl Into<String>) -> Self {
        Self::Watch {
            message: message.into(),
        }
    }
}
