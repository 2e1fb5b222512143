//! Error types for the persistence codecs.

use thiserror::Error;

/// Errors produced by the codecs and the [`Encrypter`](super::Encrypter)
/// service.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// The provided encryption key has the wrong length.
    #[error("invalid encryption key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The encryption service failed to produce ciphertext.
    #[error("encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    /// The encryption service rejected or failed to reverse stored
    /// ciphertext. Covers malformed armor, tampering, and wrong keys.
    #[error("decryption failed: {reason}")]
    DecryptionFailed { reason: String },
}

impl CodecError {
    /// Returns true if this is a key length error.
    pub fn is_invalid_key_length(&self) -> bool {
        matches!(self, CodecError::InvalidKeyLength { .. })
    }

    /// Returns true if this is an encryption failure.
    pub fn is_encryption_failed(&self) -> bool {
        matches!(self, CodecError::EncryptionFailed { .. })
    }

    /// Returns true if this is a decryption failure.
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, CodecError::DecryptionFailed { .. })
    }
}

// Conversion to the unified crate error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
