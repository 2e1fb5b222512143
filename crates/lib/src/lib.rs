//! Burrow is a small library for working with JSON-shaped data through
//! dot-notation paths, plus codecs for persisting that data in plain or
//! encrypted text columns.
//!
//! ## Core Concepts
//!
//! * **Document**: An ordered mapping of keys to values, the in-memory form
//!   of one JSON object. Entries keep insertion order across round trips.
//! * **Path**: A dot-separated route into nested data, like
//!   `"user.profile.name"`. Mappings are walked by key, lists by index.
//! * **Value**: One JSON value: null, bool, number, text, list, or a nested
//!   document. A declared null is a real value, distinct from absence.
//! * **Codec**: The bridge between a document and its stored text form,
//!   optionally wrapped with an injected encryption service.
//!
//! ## Example
//!
//! ```
//! use burrow::Document;
//!
//! let mut doc = Document::from_json(r#"{"user":{"name":"Alice"}}"#)?;
//!
//! assert_eq!(doc.get("user.name"), Some(&"Alice".into()));
//! assert_eq!(doc.get("user.email"), None);
//!
//! doc.set("user.email", "alice@example.com");
//! doc.forget("user.name");
//!
//! assert_eq!(doc.to_json()?, r#"{"user":{"email":"alice@example.com"}}"#);
//! # Ok::<(), burrow::Error>(())
//! ```
//!
//! The library performs no I/O and no logging; every fallible operation
//! reports through [`Error`].

pub mod codec;
pub mod document;

#[cfg(feature = "encryption")]
pub use codec::AesGcmEncrypter;
pub use codec::{CodecError, DocumentCodec, EncryptedJsonCodec, Encrypter, JsonCodec};
pub use document::{DecodeOptions, Document, DocumentError, Path, Value};

/// Result type alias for operations that can fail with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all operations.
///
/// Module-specific errors are wrapped transparently, so `Display` shows the
/// underlying message. Helper predicates classify errors without matching on
/// the nested structure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document errors (JSON decoding, conversion)
    #[error(transparent)]
    Document(document::DocumentError),

    /// Codec errors (encryption service failures)
    #[error(transparent)]
    Codec(codec::CodecError),
}

impl Error {
    /// Returns the name of the module this error originated from.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Document(_) => "document",
            Error::Codec(_) => "codec",
        }
    }

    /// Returns true for any failure produced while decoding JSON text.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Document(e) if e.is_decode_error())
    }

    /// Returns true if the input was not syntactically valid JSON.
    pub fn is_malformed_json(&self) -> bool {
        matches!(self, Error::Document(e) if e.is_malformed_json())
    }

    /// Returns true if the input nested deeper than the configured limit.
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Error::Document(e) if e.is_depth_exceeded())
    }

    /// Returns true if a typed extraction failed.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::Document(e) if e.is_type_mismatch())
    }

    /// Returns true for any failure of the encryption service.
    pub fn is_crypto_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Returns true if stored ciphertext could not be reversed.
    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, Error::Codec(e) if e.is_decryption_failed())
    }
}
