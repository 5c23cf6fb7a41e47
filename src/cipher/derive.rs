//! # Key Derivation with PBKDF2
//!
//! Stretches a passphrase and a random salt into a symmetric key using
//! PBKDF2 with an HMAC over the configured hash (SHA-1, SHA-2, SHA-3 or MD5).
//!
//! The cost is linear in the iteration count and entirely CPU-bound, so
//! async callers should run it on a blocking thread.

use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::RngCore;
use rand::rngs::OsRng;
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};

use crate::error::{Error, Result};
use crate::secret::{Secret, SecretBytes};
use crate::types::HashAlgorithm;

/// PBKDF2 parameters for one derivation.
#[derive(Debug, Clone, Copy)]
pub struct Derive {
    hash: HashAlgorithm,
    iterations: u32,
    key_length: usize,
}

impl Derive {
    /// Validates PBKDF2 parameters.
    ///
    /// # Arguments
    ///
    /// * `hash` - Hash function under HMAC.
    /// * `iterations` - PBKDF2 round count, at least 1.
    /// * `key_length` - Bytes of key material to produce, at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyDerivation`] if `iterations` or `key_length` is zero.
    ///
    /// # Security Notes
    ///
    /// SHA-1 and MD5 are accepted for interoperability with existing
    /// envelopes. Low iteration counts make brute force cheap.
    pub fn new(hash: HashAlgorithm, iterations: u32, key_length: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::KeyDerivation("iteration count must be at least 1".into()));
        }

        if key_length == 0 {
            return Err(Error::KeyDerivation("key length must be at least 1".into()));
        }

        Ok(Self { hash, iterations, key_length })
    }

    /// Derives `key_length` bytes from `secret` and `salt`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyDerivation`] if the salt is empty or the
    /// primitive rejects the output length.
    pub fn derive_key(&self, secret: &Secret, salt: &[u8]) -> Result<SecretBytes> {
        if salt.is_empty() {
            return Err(Error::KeyDerivation("salt cannot be empty".into()));
        }

        let password = secret.expose_secret().as_bytes();
        let mut key = SecretBytes::zeroed(self.key_length);
        let out = key.expose_secret_mut();

        let derived = match self.hash {
            HashAlgorithm::Sha1 => pbkdf2::<Hmac<Sha1>>(password, salt, self.iterations, out),
            HashAlgorithm::Sha256 => pbkdf2::<Hmac<Sha256>>(password, salt, self.iterations, out),
            HashAlgorithm::Sha384 => pbkdf2::<Hmac<Sha384>>(password, salt, self.iterations, out),
            HashAlgorithm::Sha512 => pbkdf2::<Hmac<Sha512>>(password, salt, self.iterations, out),
            HashAlgorithm::Sha3_256 => pbkdf2::<Hmac<Sha3_256>>(password, salt, self.iterations, out),
            HashAlgorithm::Sha3_512 => pbkdf2::<Hmac<Sha3_512>>(password, salt, self.iterations, out),
            HashAlgorithm::Md5 => pbkdf2::<Hmac<Md5>>(password, salt, self.iterations, out),
        };
        derived.map_err(|e| Error::KeyDerivation(format!("pbkdf2 with {} failed: {e}", self.hash)))?;

        Ok(key)
    }

    /// Fills `len` bytes from the operating system's CSPRNG.
    ///
    /// Used for both salts and IVs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyDerivation`] if the OS generator fails.
    pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| Error::KeyDerivation(format!("rng failed: {e}")))?;

        Ok(bytes)
    }
}
