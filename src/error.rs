use miette::Diagnostic;
use thiserror::Error;

use crate::types::CanvasId;

/// Main error type for tilegen operations
#[derive(Error, Diagnostic, Debug)]
pub enum TileError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tilegen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tilegen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tilegen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(tilegen::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    #[diagnostic(code(tilegen::out_of_range))]
    OutOfRange { x: i64, y: i64, width: u32, height: u32 },

    #[error("Not found: {}", path.display())]
    #[diagnostic(code(tilegen::not_found))]
    NotFound { path: std::path::PathBuf },

    #[error("Shape belongs to canvas {expected}, not canvas {found}")]
    #[diagnostic(
        code(tilegen::canvas_mismatch),
        help("Pass the canvas the shape was created against, or re-attach the shape")
    )]
    CanvasMismatch { expected: CanvasId, found: CanvasId },

    #[error("Unknown canvas: {name}")]
    #[diagnostic(code(tilegen::unknown_canvas))]
    UnknownCanvas { name: String },

    #[error("Unknown shape: {name}")]
    #[diagnostic(code(tilegen::unknown_shape))]
    UnknownShape { name: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(tilegen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TileError {
    /// Shorthand for an `InvalidArgument` without help text.
    pub fn invalid(message: impl Into<String>) -> Self {
        TileError::InvalidArgument {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TileError>;
