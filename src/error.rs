//! Error types for cabinet part derivation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for cabinet builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Spec file not found or unreadable (-1)
    FileNotFound = -1,
    /// Spec file is not valid JSON (-3)
    ParseError = -3,
    /// Non-positive envelope or derived dimension (E100)
    InvalidConfiguration = 100,
    /// Part with a non-positive dimension under the reject policy (E101)
    DegeneratePart = 101,
    /// Miter triangle collinear or extrusion range empty (E200)
    MiterGeometry = 200,
    /// Unknown cabinet type, slide type or material (E201)
    UnknownName = 201,
    /// Unrecognized part record shape (E202)
    UnrecognizedShape = 202,
    /// Geometry kernel failure (E300)
    Kernel = 300,
}

/// Main error type for cabinet builds.
#[derive(Debug, Error)]
pub enum CabinetError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {quantity} must be positive, got {value}")]
    InvalidConfiguration { quantity: String, value: f64 },

    #[error("Degenerate part '{key}': dimensions {w} x {h} x {d}")]
    DegeneratePart { key: String, w: f64, h: f64, d: f64 },

    #[error("Miter geometry failed for '{part}': {reason}")]
    MiterGeometry { part: String, reason: String },

    #[error("Unknown cabinet type: {0}")]
    UnknownCabinetType(String),

    #[error("Unknown slide type: {0}")]
    UnknownSlideType(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Unrecognized part record: {message}")]
    UnrecognizedShape { message: String },

    #[error("Geometry kernel error while {context}: {message}")]
    Kernel { context: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CabinetError {
    /// Shorthand for an invalid-configuration error.
    pub fn invalid(quantity: impl Into<String>, value: f64) -> Self {
        CabinetError::InvalidConfiguration {
            quantity: quantity.into(),
            value,
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CabinetError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CabinetError::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
            CabinetError::DegeneratePart { .. } => ErrorCode::DegeneratePart,
            CabinetError::MiterGeometry { .. } => ErrorCode::MiterGeometry,
            CabinetError::UnknownCabinetType(_) => ErrorCode::UnknownName,
            CabinetError::UnknownSlideType(_) => ErrorCode::UnknownName,
            CabinetError::UnknownMaterial(_) => ErrorCode::UnknownName,
            CabinetError::UnrecognizedShape { .. } => ErrorCode::UnrecognizedShape,
            CabinetError::Kernel { .. } => ErrorCode::Kernel,
            CabinetError::Io(_) => ErrorCode::FileNotFound,
            CabinetError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error aborts the whole build.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CabinetError::MiterGeometry { .. })
    }
}

/// Result type alias for cabinet operations.
pub type Result<T> = std::result::Result<T, CabinetError>;
