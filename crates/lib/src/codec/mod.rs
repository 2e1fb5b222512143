//! Persistence codecs bridging documents and stored text.
//!
//! A [`DocumentCodec`] sits between an attribute-mapping layer and its
//! storage column: [`decode`](DocumentCodec::decode) turns the raw stored
//! value into a [`Document`] on read, [`encode`](DocumentCodec::encode) turns
//! the document back into its stored form on write. Both directions treat
//! `None` as "column not declared" and pass it through untouched.
//!
//! Two codecs are provided: [`JsonCodec`] for plain JSON columns and
//! [`EncryptedJsonCodec`], which wraps it with an [`Encrypter`] for
//! encrypted-at-rest columns.

pub mod encrypter;
pub mod errors;

#[cfg(feature = "encryption")]
pub use encrypter::AesGcmEncrypter;
pub use encrypter::Encrypter;
pub use errors::CodecError;

use std::fmt;
use std::sync::Arc;

use crate::Result;
use crate::document::{DecodeOptions, Document};

/// Converts between a document and its stored representation.
pub trait DocumentCodec {
    /// Decodes a stored raw value into a document.
    ///
    /// `None` decodes to `None` without touching any service.
    fn decode(&self, stored: Option<&str>) -> Result<Option<Document>>;

    /// Encodes a document into its stored form.
    ///
    /// `None` encodes to `None` without touching any service.
    fn encode(&self, document: Option<&Document>) -> Result<Option<String>>;
}

/// Plain JSON codec: the stored value is the document's compact JSON text.
///
/// ```
/// use burrow::codec::{DocumentCodec, JsonCodec};
///
/// let codec = JsonCodec::new();
/// let doc = codec.decode(Some(r#"{"a":1}"#))?.unwrap();
/// assert_eq!(codec.encode(Some(&doc))?, Some(r#"{"a":1}"#.to_string()));
/// assert_eq!(codec.decode(None)?, None);
/// # Ok::<(), burrow::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    options: DecodeOptions,
}

impl JsonCodec {
    /// Creates a codec with default decode options.
    pub fn new() -> Self {
        Self {
            options: DecodeOptions::default(),
        }
    }

    /// Creates a codec with explicit decode options.
    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }
}

impl DocumentCodec for JsonCodec {
    fn decode(&self, stored: Option<&str>) -> Result<Option<Document>> {
        match stored {
            None => Ok(None),
            Some(text) => Document::from_json_with(text, self.options).map(Some),
        }
    }

    fn encode(&self, document: Option<&Document>) -> Result<Option<String>> {
        match document {
            None => Ok(None),
            Some(document) => document.to_json().map(Some),
        }
    }
}

/// JSON codec wrapped with encryption at rest.
///
/// Encoding serializes the document with the inner [`JsonCodec`] and then
/// armors it through the [`Encrypter`]; decoding reverses both steps. The
/// `None` pass-throughs short-circuit before the encrypter is consulted, so
/// an undeclared column never exercises cryptography.
pub struct EncryptedJsonCodec {
    inner: JsonCodec,
    encrypter: Arc<dyn Encrypter>,
}

impl EncryptedJsonCodec {
    /// Creates an encrypted codec with default decode options.
    pub fn new(encrypter: Arc<dyn Encrypter>) -> Self {
        Self {
            inner: JsonCodec::new(),
            encrypter,
        }
    }

    /// Creates an encrypted codec around an explicit inner codec.
    pub fn with_codec(inner: JsonCodec, encrypter: Arc<dyn Encrypter>) -> Self {
        Self { inner, encrypter }
    }

    /// Resolves the encrypter the way per-model overrides work: the model's
    /// own service wins when present, the process-wide default otherwise.
    pub fn for_model(
        model_encrypter: Option<Arc<dyn Encrypter>>,
        default: Arc<dyn Encrypter>,
    ) -> Self {
        Self::new(model_encrypter.unwrap_or(default))
    }
}

impl DocumentCodec for EncryptedJsonCodec {
    fn decode(&self, stored: Option<&str>) -> Result<Option<Document>> {
        let armored = match stored {
            None => return Ok(None),
            Some(armored) => armored,
        };
        let plaintext = self.encrypter.decrypt(armored, None)?;
        let text = match String::from_utf8(plaintext) {
            Ok(text) => text,
            Err(e) => {
                let reason = e.utf8_error().to_string();
                encrypter::discard_plaintext(e.into_bytes());
                return Err(CodecError::DecryptionFailed {
                    reason: format!("decrypted payload is not UTF-8: {reason}"),
                }
                .into());
            }
        };
        self.inner.decode(Some(&text))
    }

    fn encode(&self, document: Option<&Document>) -> Result<Option<String>> {
        match self.inner.encode(document)? {
            None => Ok(None),
            Some(text) => Ok(Some(self.encrypter.encrypt(text.as_bytes(), None)?)),
        }
    }
}

impl fmt::Debug for EncryptedJsonCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedJsonCodec")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
