//! ChaCha20-Poly1305 and XChaCha20-Poly1305.
//!
//! Both use a 256-bit key and a 128-bit Poly1305 tag; they differ only in
//! nonce size (12 bytes vs. the extended 24 bytes).

use chacha20poly1305::{ChaCha20Poly1305, XChaCha20Poly1305};

use super::{open_in_place, seal_in_place};
use crate::error::{Error, Result};
use crate::types::Algorithm;

pub(super) fn seal(algorithm: Algorithm, key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::ChaCha20Poly1305 => seal_in_place::<ChaCha20Poly1305>(key, iv, buffer),
        Algorithm::XChaCha20Poly1305 => seal_in_place::<XChaCha20Poly1305>(key, iv, buffer),
        other => Err(Error::InvalidConfig(format!("{other} is not a ChaCha20 mode"))),
    }
}

pub(super) fn open(algorithm: Algorithm, key: &[u8], iv: &[u8], tag: &[u8], buffer: &mut [u8]) -> Result<()> {
    match algorithm {
        Algorithm::ChaCha20Poly1305 => open_in_place::<ChaCha20Poly1305>(key, iv, tag, buffer),
        Algorithm::XChaCha20Poly1305 => open_in_place::<XChaCha20Poly1305>(key, iv, tag, buffer),
        other => Err(Error::InvalidConfig(format!("{other} is not a ChaCha20 mode"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xchacha_roundtrip() {
        // Verify the extended nonce path.
        let key = [0x42u8; 32];
        let iv = [0x24u8; 24];
        let mut buffer = b"Hello, XChaCha20!".to_vec();

        let tag = seal(Algorithm::XChaCha20Poly1305, &key, &iv, &mut buffer).unwrap();
        assert_eq!(tag.len(), 16);
        assert_ne!(&buffer[..], b"Hello, XChaCha20!");

        open(Algorithm::XChaCha20Poly1305, &key, &iv, &tag, &mut buffer).unwrap();
        assert_eq!(&buffer[..], b"Hello, XChaCha20!");
    }

    #[test]
    fn test_nonce_length_enforced() {
        // A 24-byte nonce is not valid for plain ChaCha20-Poly1305.
        let mut buffer = vec![0u8; 8];
        let result = seal(Algorithm::ChaCha20Poly1305, &[0u8; 32], &[0u8; 24], &mut buffer);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_tampered_ciphertext() {
        // Flip one bit of the payload and verify rejection.
        let key = [7u8; 32];
        let iv = [9u8; 12];
        let mut buffer = b"Secret Message".to_vec();
        let tag = seal(Algorithm::ChaCha20Poly1305, &key, &iv, &mut buffer).unwrap();

        buffer[0] ^= 0x01;
        let result = open(Algorithm::ChaCha20Poly1305, &key, &iv, &tag, &mut buffer);
        assert!(matches!(result, Err(Error::Authentication)));
    }
}
