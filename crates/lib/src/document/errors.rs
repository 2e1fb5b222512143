//! Error types for document decoding and conversion.
//!
//! This module provides structured error handling for document operations,
//! distinguishing reports of malformed input from type conversion failures.

use thiserror::Error;

/// Errors produced by [`Document`](super::Document) operations.
///
/// Path reads and writes are total and never error; failures here come from
/// the JSON boundary and from typed extraction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The supplied text is not syntactically valid JSON.
    #[error("malformed JSON input: {source}")]
    MalformedJson {
        #[source]
        source: serde_json::Error,
    },

    /// The decoded JSON nests containers deeper than the configured maximum.
    #[error("JSON input nested deeper than {max_depth} levels")]
    DepthExceeded { max_depth: usize },

    /// Encoding a document, or absorbing a serializable value, failed.
    #[error("JSON serialization failed: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// A typed extraction asked for a different type than the value holds.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl DocumentError {
    /// Returns true if this is a malformed JSON error.
    pub fn is_malformed_json(&self) -> bool {
        matches!(self, DocumentError::MalformedJson { .. })
    }

    /// Returns true if this is a nesting depth error.
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, DocumentError::DepthExceeded { .. })
    }

    /// Returns true for any failure produced while decoding JSON text.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            DocumentError::MalformedJson { .. } | DocumentError::DepthExceeded { .. }
        )
    }

    /// Returns true if this is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DocumentError::TypeMismatch { .. })
    }
}

// Conversion to the unified crate error type
impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}
