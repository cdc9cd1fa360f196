//! Error types for fiber section building

use thiserror::Error;

/// Main error type for section and model operations
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate {kind} tag {tag} already registered")]
    DuplicateTag { kind: &'static str, tag: u32 },

    #[error("Material {0} not registered in model")]
    MaterialNotFound(u32),

    #[error("Section {0} not registered in model")]
    SectionNotFound(u32),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for section operations
pub type SectionResult<T> = Result<T, SectionError>;
