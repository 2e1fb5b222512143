//! The injected encryption service used by the encrypted codec.
//!
//! [`Encrypter`] is the seam between the codec and whatever key management
//! the application runs. The built-in [`AesGcmEncrypter`] (behind the
//! `encryption` feature) covers the common case: AES-256-GCM with a random
//! nonce per message, armored as base64 for text-column storage.

#[cfg(feature = "encryption")]
use aes_gcm::{
    Aes256Gcm, KeyInit, Nonce,
    aead::{Aead, AeadCore, OsRng, Payload},
};
#[cfg(feature = "encryption")]
use base64ct::{Base64, Encoding};
use zeroize::Zeroize;

use super::errors::CodecError;

/// Reversible encryption applied around the plain JSON codec.
///
/// `aad` is optional associated data authenticated alongside the ciphertext
/// without being stored in it. Both sides must pass the same bytes; the
/// codecs pass `None`.
pub trait Encrypter: Send + Sync {
    /// Encrypts `plaintext` into a self-contained text armor.
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<String, CodecError>;

    /// Reverses [`encrypt`](Encrypter::encrypt), returning the original
    /// plaintext bytes.
    fn decrypt(&self, armored: &str, aad: Option<&[u8]>) -> Result<Vec<u8>, CodecError>;
}

/// Nonce length for AES-GCM (12 bytes standard)
#[cfg(feature = "encryption")]
pub const NONCE_LENGTH: usize = 12;

/// Key length for AES-256 (32 bytes)
#[cfg(feature = "encryption")]
pub const KEY_LENGTH: usize = 32;

/// AES-256-GCM implementation of [`Encrypter`].
///
/// The armor layout is `base64(nonce || ciphertext)` with a fresh random
/// nonce per message, so encrypting the same plaintext twice produces
/// different armor.
#[cfg(feature = "encryption")]
pub struct AesGcmEncrypter {
    cipher: Aes256Gcm,
}

#[cfg(feature = "encryption")]
impl AesGcmEncrypter {
    /// Creates an encrypter from a 32-byte key.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self, CodecError> {
        let key = key.as_ref();
        if key.len() != KEY_LENGTH {
            return Err(CodecError::InvalidKeyLength {
                expected: KEY_LENGTH,
                actual: key.len(),
            });
        }
        let cipher = Aes256Gcm::new_from_slice(key).map_err(|e| CodecError::EncryptionFailed {
            reason: format!("failed to create cipher: {e}"),
        })?;
        Ok(Self { cipher })
    }

    /// Creates an encrypter with a fresh random key.
    ///
    /// The key never leaves the cipher; use this for ephemeral data only.
    pub fn generate() -> Self {
        let mut key = Aes256Gcm::generate_key(&mut OsRng);
        let cipher = Aes256Gcm::new(&key);
        key.as_mut_slice().zeroize();
        Self { cipher }
    }
}

#[cfg(feature = "encryption")]
impl std::fmt::Debug for AesGcmEncrypter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose key material through Debug
        f.debug_struct("AesGcmEncrypter").finish_non_exhaustive()
    }
}

#[cfg(feature = "encryption")]
impl Encrypter for AesGcmEncrypter {
    fn encrypt(&self, plaintext: &[u8], aad: Option<&[u8]>) -> Result<String, CodecError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = match aad {
            Some(aad) => self.cipher.encrypt(&nonce, Payload { msg: plaintext, aad }),
            None => self.cipher.encrypt(&nonce, plaintext),
        }
        .map_err(|e| CodecError::EncryptionFailed {
            reason: format!("AES-GCM encryption failed: {e}"),
        })?;

        let mut raw = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        raw.extend_from_slice(&nonce);
        raw.extend_from_slice(&ciphertext);
        Ok(Base64::encode_string(&raw))
    }

    fn decrypt(&self, armored: &str, aad: Option<&[u8]>) -> Result<Vec<u8>, CodecError> {
        let raw = Base64::decode_vec(armored).map_err(|e| CodecError::DecryptionFailed {
            reason: format!("invalid base64 armor: {e}"),
        })?;
        if raw.len() < NONCE_LENGTH {
            return Err(CodecError::DecryptionFailed {
                reason: format!(
                    "armor too short: {} bytes, need at least {NONCE_LENGTH}",
                    raw.len()
                ),
            });
        }

        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LENGTH);
        let nonce = Nonce::from_slice(nonce_bytes);
        let plaintext = match aad {
            Some(aad) => self.cipher.decrypt(nonce, Payload { msg: ciphertext, aad }),
            None => self.cipher.decrypt(nonce, ciphertext),
        }
        .map_err(|e| CodecError::DecryptionFailed {
            reason: format!("AES-GCM decryption failed: {e}"),
        })?;
        Ok(plaintext)
    }
}

/// Wipes decrypted bytes that failed follow-up validation before the error
/// escapes.
pub(crate) fn discard_plaintext(mut plaintext: Vec<u8>) {
    plaintext.zeroize();
}
