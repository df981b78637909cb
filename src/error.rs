use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Location;

/// Main error type for shapeview operations
#[derive(Error, Diagnostic, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    #[diagnostic(code(shapeview::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shapeview::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(shapeview::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A single token carried more modifiers than allowed. Aborts the whole message.
    #[error("Limit of modifiers reached: '{key}' at {location} has {count} (max {limit})")]
    #[diagnostic(
        code(shapeview::modifier_limit),
        help("Split the instruction into several tokens")
    )]
    ModifierLimitExceeded {
        key: String,
        count: usize,
        limit: usize,
        location: Location,
    },

    #[error("Shape error: {message}")]
    #[diagnostic(code(shapeview::shape))]
    Shape {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(shapeview::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("You are not supposed to directly call {command}")]
    #[diagnostic(
        code(shapeview::direct_invocation),
        help("Embed shape tokens in a regular message instead")
    )]
    DirectInvocation { command: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
