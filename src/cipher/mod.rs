//! # Cryptographic Operations Module
//!
//! Binds the RustCrypto AEAD implementations and PBKDF2 to the runtime
//! parameters of a [`Config`](crate::config::Config).
//!
//! ## Architecture
//!
//! - **Key derivation**: [`Derive`] turns a secret and salt into a key
//! - **Implementation layer**: `gcm`, `ccm` and `ocb` (AES-128/192/256 in
//!   each mode) and `chacha` (ChaCha20-Poly1305, XChaCha20-Poly1305)
//! - **Abstraction layer**: [`AeadCipher`] selects the implementation from an
//!   [`Algorithm`] and works with detached tags
//!
//! ## Security Notes
//!
//! - No associated data: the tag binds key, IV and ciphertext only
//! - Tag comparison is constant-time inside the AEAD crates, and the
//!   ciphertext is only decrypted after the tag verifies
//! - IVs must never repeat under one key; callers draw a fresh random IV
//!   (and a fresh salt, hence a fresh key) for every seal

use ::aes_gcm::aead::generic_array::typenum::Unsigned;
use ::aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit, Nonce, Tag};

mod ccm;
mod chacha;
mod derive;
mod gcm;
mod ocb;

pub use derive::Derive;

use crate::error::{Error, Result};
use crate::types::Algorithm;

/// Output of [`AeadCipher::seal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

/// An AEAD algorithm with its IV and tag lengths fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadCipher {
    algorithm: Algorithm,
    iv_length: usize,
    tag_length: usize,
}

impl AeadCipher {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the algorithm does not accept the
    /// IV or tag length.
    pub fn new(algorithm: Algorithm, iv_length: usize, tag_length: usize) -> Result<Self> {
        if !algorithm.iv_lengths().contains(&iv_length) {
            return Err(Error::InvalidConfig(format!("{algorithm} does not accept a {iv_length}-byte IV")));
        }

        if !algorithm.tag_lengths().contains(&tag_length) {
            return Err(Error::InvalidConfig(format!("{algorithm} does not accept a {tag_length}-byte tag")));
        }

        Ok(Self { algorithm, iv_length, tag_length })
    }

    #[inline]
    pub const fn iv_length(&self) -> usize {
        self.iv_length
    }

    /// Encrypts `plaintext` and returns the ciphertext with its detached tag.
    ///
    /// The ciphertext is exactly as long as the plaintext. Empty plaintext is
    /// allowed and still yields a tag.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] for a key or IV of the wrong length,
    /// [`Error::Encryption`] if the mode refuses the plaintext (CCM length
    /// limit).
    pub fn seal(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Sealed> {
        self.check_iv(iv)?;

        let mut buffer = plaintext.to_vec();
        let tag = match self.algorithm {
            Algorithm::Aes128Gcm | Algorithm::Aes192Gcm | Algorithm::Aes256Gcm => gcm::seal(self.algorithm, key, iv, self.tag_length, &mut buffer)?,
            Algorithm::Aes128Ccm | Algorithm::Aes192Ccm | Algorithm::Aes256Ccm => ccm::seal(self.algorithm, key, iv, self.tag_length, &mut buffer)?,
            Algorithm::Aes128Ocb | Algorithm::Aes192Ocb | Algorithm::Aes256Ocb => ocb::seal(self.algorithm, key, iv, self.tag_length, &mut buffer)?,
            Algorithm::ChaCha20Poly1305 | Algorithm::XChaCha20Poly1305 => chacha::seal(self.algorithm, key, iv, &mut buffer)?,
        };

        Ok(Sealed { ciphertext: buffer, tag })
    }

    /// Verifies `tag` over `ciphertext` and returns the plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the tag does not verify. Nothing
    /// about the failure position is revealed.
    pub fn open(&self, key: &[u8], iv: &[u8], tag: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.check_iv(iv)?;

        if tag.len() != self.tag_length {
            return Err(Error::InvalidConfig(format!("expected a {}-byte tag, got {}", self.tag_length, tag.len())));
        }

        let mut buffer = ciphertext.to_vec();
        match self.algorithm {
            Algorithm::Aes128Gcm | Algorithm::Aes192Gcm | Algorithm::Aes256Gcm => gcm::open(self.algorithm, key, iv, tag, &mut buffer)?,
            Algorithm::Aes128Ccm | Algorithm::Aes192Ccm | Algorithm::Aes256Ccm => ccm::open(self.algorithm, key, iv, tag, &mut buffer)?,
            Algorithm::Aes128Ocb | Algorithm::Aes192Ocb | Algorithm::Aes256Ocb => ocb::open(self.algorithm, key, iv, tag, &mut buffer)?,
            Algorithm::ChaCha20Poly1305 | Algorithm::XChaCha20Poly1305 => chacha::open(self.algorithm, key, iv, tag, &mut buffer)?,
        }

        Ok(buffer)
    }

    fn check_iv(&self, iv: &[u8]) -> Result<()> {
        if iv.len() != self.iv_length {
            return Err(Error::InvalidConfig(format!("expected a {}-byte IV, got {}", self.iv_length, iv.len())));
        }
        Ok(())
    }
}

/// Encrypts `buffer` in place under `C` and returns the detached tag.
fn seal_in_place<C>(key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<Vec<u8>>
where
    C: KeyInit + AeadInPlace,
{
    let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidConfig(format!("invalid key length {}", key.len())))?;
    let nonce = nonce_for::<C>(iv)?;
    let tag = cipher.encrypt_in_place_detached(nonce, &[], buffer).map_err(|e| Error::Encryption(e.to_string()))?;

    Ok(tag.to_vec())
}

/// Verifies `tag` and decrypts `buffer` in place under `C`.
fn open_in_place<C>(key: &[u8], iv: &[u8], tag: &[u8], buffer: &mut [u8]) -> Result<()>
where
    C: KeyInit + AeadInPlace,
{
    let cipher = C::new_from_slice(key).map_err(|_| Error::InvalidConfig(format!("invalid key length {}", key.len())))?;
    let nonce = nonce_for::<C>(iv)?;

    if tag.len() != C::TagSize::USIZE {
        return Err(Error::InvalidConfig(format!("expected a {}-byte tag, got {}", C::TagSize::USIZE, tag.len())));
    }

    cipher.decrypt_in_place_detached(nonce, &[], buffer, Tag::<C>::from_slice(tag)).map_err(|_| Error::Authentication)
}

fn nonce_for<C: AeadCore>(iv: &[u8]) -> Result<&Nonce<C>> {
    if iv.len() != C::NonceSize::USIZE {
        return Err(Error::InvalidConfig(format!("expected a {}-byte IV, got {}", C::NonceSize::USIZE, iv.len())));
    }

    Ok(Nonce::<C>::from_slice(iv))
}
