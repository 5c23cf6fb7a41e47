//! Common type definitions for CryptoShield.
//!
//! Provides the closed enumerations that make up a [`Config`](crate::config::Config)
//! and the operation labels used for error context and logging.
//!
//! # Overview
//!
//! - [`Algorithm`]: AEAD cipher/mode pairs and the parameters each accepts
//! - [`HashAlgorithm`]: HMAC hash used by PBKDF2
//! - [`Encoding`]: text encodings for envelopes and recovered plaintext
//! - [`Framing`]: whether an envelope carries a parameter header
//! - [`Operation`]: the public facade operations

use std::fmt::{Display, Formatter, Result};

use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Even tag lengths from 32 to 128 bits, accepted by CCM and OCB.
const EVEN_TAG_LENGTHS: &[usize] = &[4, 6, 8, 10, 12, 14, 16];

/// AEAD cipher/mode pairs.
///
/// Each variant fixes the key length it requires and the IV and tag lengths
/// it accepts. Parameters outside those sets are rejected when a config is built.
///
/// | mode | IV | tag |
/// |---|---|---|
/// | GCM | 12, 16 | 12..=16 |
/// | CCM | 7..=13 | 4, 6, .., 16 |
/// | OCB | 12..=15 | 4, 6, .., 16 |
/// | ChaCha20-Poly1305 | 12 | 16 |
/// | XChaCha20-Poly1305 | 24 | 16 |
///
/// CCM bounds the plaintext length by the IV: a 13-byte IV leaves two length
/// bytes, so at most 65535 bytes can be sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    #[strum(to_string = "aes-128-gcm")]
    Aes128Gcm,

    #[strum(to_string = "aes-192-gcm")]
    Aes192Gcm,

    #[default]
    #[strum(to_string = "aes-256-gcm")]
    Aes256Gcm,

    #[strum(to_string = "aes-128-ccm")]
    Aes128Ccm,

    #[strum(to_string = "aes-192-ccm")]
    Aes192Ccm,

    #[strum(to_string = "aes-256-ccm")]
    Aes256Ccm,

    #[strum(to_string = "aes-128-ocb")]
    Aes128Ocb,

    #[strum(to_string = "aes-192-ocb")]
    Aes192Ocb,

    #[strum(to_string = "aes-256-ocb")]
    Aes256Ocb,

    #[strum(to_string = "chacha20-poly1305")]
    ChaCha20Poly1305,

    /// ChaCha20-Poly1305 with the extended 24-byte nonce.
    #[strum(to_string = "xchacha20-poly1305")]
    XChaCha20Poly1305,
}

impl Algorithm {
    /// Key length in bytes the cipher requires.
    #[inline]
    pub const fn key_length(self) -> usize {
        match self {
            Self::Aes128Gcm | Self::Aes128Ccm | Self::Aes128Ocb => 16,
            Self::Aes192Gcm | Self::Aes192Ccm | Self::Aes192Ocb => 24,
            Self::Aes256Gcm | Self::Aes256Ccm | Self::Aes256Ocb | Self::ChaCha20Poly1305 | Self::XChaCha20Poly1305 => 32,
        }
    }

    /// IV lengths in bytes the cipher accepts.
    #[inline]
    pub const fn iv_lengths(self) -> &'static [usize] {
        match self {
            Self::Aes128Gcm | Self::Aes192Gcm | Self::Aes256Gcm => &[12, 16],
            Self::Aes128Ccm | Self::Aes192Ccm | Self::Aes256Ccm => &[7, 8, 9, 10, 11, 12, 13],
            Self::Aes128Ocb | Self::Aes192Ocb | Self::Aes256Ocb => &[12, 13, 14, 15],
            Self::ChaCha20Poly1305 => &[12],
            Self::XChaCha20Poly1305 => &[24],
        }
    }

    /// Authentication tag lengths in bytes the cipher accepts.
    #[inline]
    pub const fn tag_lengths(self) -> &'static [usize] {
        match self {
            Self::Aes128Gcm | Self::Aes192Gcm | Self::Aes256Gcm => &[12, 13, 14, 15, 16],
            Self::Aes128Ccm | Self::Aes192Ccm | Self::Aes256Ccm | Self::Aes128Ocb | Self::Aes192Ocb | Self::Aes256Ocb => EVEN_TAG_LENGTHS,
            Self::ChaCha20Poly1305 | Self::XChaCha20Poly1305 => &[16],
        }
    }

    /// The IV length used when none is configured: 12 bytes where accepted,
    /// otherwise the only length the cipher takes.
    pub fn default_iv_length(self) -> usize {
        let accepted = self.iv_lengths();
        if accepted.contains(&12) { 12 } else { accepted.first().copied().unwrap_or(12) }
    }

    /// Identifier written into tagged envelope headers.
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Self::Aes128Gcm => 0x01,
            Self::Aes192Gcm => 0x02,
            Self::Aes256Gcm => 0x03,
            Self::Aes128Ccm => 0x04,
            Self::Aes192Ccm => 0x05,
            Self::Aes256Ccm => 0x06,
            Self::Aes128Ocb => 0x07,
            Self::Aes192Ocb => 0x08,
            Self::Aes256Ocb => 0x09,
            Self::ChaCha20Poly1305 => 0x10,
            Self::XChaCha20Poly1305 => 0x11,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|algorithm| algorithm.id() == id)
    }
}

/// Hash function behind the PBKDF2 HMAC.
///
/// SHA-1 and MD5 exist to open envelopes produced with them; prefer SHA-2 or
/// SHA-3 for new data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum HashAlgorithm {
    #[strum(to_string = "sha1", serialize = "sha-1")]
    Sha1,

    #[strum(to_string = "sha256", serialize = "sha-256")]
    Sha256,

    #[strum(to_string = "sha384", serialize = "sha-384")]
    Sha384,

    #[default]
    #[strum(to_string = "sha512", serialize = "sha-512")]
    Sha512,

    #[strum(to_string = "sha3-256", serialize = "sha3_256")]
    Sha3_256,

    #[strum(to_string = "sha3-512", serialize = "sha3_512")]
    Sha3_512,

    #[strum(to_string = "md5")]
    Md5,
}

impl HashAlgorithm {
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Self::Sha256 => 0x01,
            Self::Sha384 => 0x02,
            Self::Sha512 => 0x03,
            Self::Sha1 => 0x04,
            Self::Sha3_256 => 0x05,
            Self::Sha3_512 => 0x06,
            Self::Md5 => 0x07,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().find(|hash| hash.id() == id)
    }
}

/// Text encodings understood by the facade.
///
/// Envelopes are binary, so only the binary-safe subset
/// (see [`Encoding::is_binary_safe`]) can carry one. Any variant may be used
/// to decode recovered plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Encoding {
    #[strum(to_string = "hex")]
    Hex,

    #[strum(to_string = "base64")]
    Base64,

    #[strum(to_string = "base64url")]
    Base64Url,

    /// One byte per character, code points 0-255.
    #[strum(to_string = "latin1", serialize = "binary")]
    Latin1,

    #[strum(to_string = "utf8", serialize = "utf-8")]
    Utf8,

    #[strum(to_string = "utf16le", serialize = "utf-16le", serialize = "ucs2")]
    Utf16Le,

    /// 7-bit ASCII; the high bit of each byte is dropped when decoding.
    #[strum(to_string = "ascii")]
    Ascii,
}

impl Encoding {
    /// Whether every byte sequence survives a round trip through this encoding.
    #[inline]
    pub const fn is_binary_safe(self) -> bool {
        matches!(self, Self::Hex | Self::Base64 | Self::Base64Url | Self::Latin1)
    }

    /// Whether whitespace can never be part of encoded output, so it is safe
    /// to strip around pasted text. Latin1 maps bytes such as 0x20 and 0xA0
    /// to whitespace characters.
    #[inline]
    pub const fn is_whitespace_free(self) -> bool {
        matches!(self, Self::Hex | Self::Base64 | Self::Base64Url)
    }
}

/// Envelope framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Framing {
    /// `salt | iv | tag | ciphertext` with nothing in front.
    #[default]
    Bare,

    /// A fixed header recording the producing parameters precedes the bare layout.
    Tagged,
}

/// The public facade operations.
///
/// Used to label errors and log spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    EncryptText,
    DecryptText,
    EncryptFile,
    DecryptFile,
    EncryptBytes,
    DecryptBytes,
    SetSecret,
}

impl Operation {
    /// Returns a human-readable label for the operation.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::EncryptText => "encrypt text",
            Self::DecryptText => "decrypt text",
            Self::EncryptFile => "encrypt file",
            Self::DecryptFile => "decrypt file",
            Self::EncryptBytes => "encrypt bytes",
            Self::DecryptBytes => "decrypt bytes",
            Self::SetSecret => "set secret",
        }
    }

    /// Whether the operation produces an envelope.
    #[inline]
    pub fn is_encryption(self) -> bool {
        matches!(self, Self::EncryptText | Self::EncryptFile | Self::EncryptBytes)
    }
}

impl Display for Operation {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_algorithm_names_roundtrip() {
        for algorithm in Algorithm::iter() {
            assert_eq!(Algorithm::from_str(&algorithm.to_string()).unwrap(), algorithm);
        }
        assert_eq!(Algorithm::from_str("AES-256-GCM").unwrap(), Algorithm::Aes256Gcm);
        assert!(Algorithm::from_str("aes-256-cbc").is_err());
    }

    #[test]
    fn test_algorithm_ids_are_unique() {
        for algorithm in Algorithm::iter() {
            assert_eq!(Algorithm::from_id(algorithm.id()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_id(0xFF), None);
    }

    #[test]
    fn test_key_lengths() {
        assert_eq!(Algorithm::Aes128Gcm.key_length(), 16);
        assert_eq!(Algorithm::Aes192Gcm.key_length(), 24);
        assert_eq!(Algorithm::default().key_length(), 32);
        assert!(Algorithm::ChaCha20Poly1305.tag_lengths().contains(&16));
        assert!(!Algorithm::ChaCha20Poly1305.tag_lengths().contains(&12));
        assert_eq!(Algorithm::Aes192Ccm.key_length(), 24);
        assert_eq!(Algorithm::Aes256Ocb.key_length(), 32);
    }

    #[test]
    fn test_ccm_and_ocb_parameters() {
        assert_eq!(Algorithm::from_str("aes-128-ccm").unwrap(), Algorithm::Aes128Ccm);
        assert_eq!(Algorithm::from_str("AES-256-OCB").unwrap(), Algorithm::Aes256Ocb);
        assert!(Algorithm::Aes128Ccm.tag_lengths().contains(&4));
        assert!(!Algorithm::Aes128Ccm.tag_lengths().contains(&5));
        assert!(Algorithm::Aes128Ccm.iv_lengths().contains(&7));
        assert!(!Algorithm::Aes128Ocb.iv_lengths().contains(&16));
    }

    #[test]
    fn test_default_iv_length() {
        for algorithm in Algorithm::iter() {
            assert!(algorithm.iv_lengths().contains(&algorithm.default_iv_length()), "{algorithm}");
        }
        assert_eq!(Algorithm::Aes128Ccm.default_iv_length(), 12);
        assert_eq!(Algorithm::XChaCha20Poly1305.default_iv_length(), 24);
    }

    #[test]
    fn test_encoding_aliases() {
        assert_eq!(Encoding::from_str("binary").unwrap(), Encoding::Latin1);
        assert_eq!(Encoding::from_str("UTF-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_str("ucs2").unwrap(), Encoding::Utf16Le);
        assert_eq!(Encoding::Utf8.to_string(), "utf8");
        assert!(Encoding::Hex.is_binary_safe());
        assert!(!Encoding::Utf8.is_binary_safe());
        assert!(Encoding::Base64.is_whitespace_free());
        assert!(!Encoding::Latin1.is_whitespace_free());
    }

    #[test]
    fn test_hash_and_framing_names() {
        assert_eq!(HashAlgorithm::from_str("SHA-256").unwrap(), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::default().to_string(), "sha512");
        assert_eq!(HashAlgorithm::from_str("sha3-256").unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!(HashAlgorithm::from_str("SHA1").unwrap(), HashAlgorithm::Sha1);
        assert_eq!(HashAlgorithm::Md5.to_string(), "md5");
        for hash in HashAlgorithm::iter() {
            assert_eq!(HashAlgorithm::from_id(hash.id()), Some(hash));
        }
        assert_eq!(Framing::from_str("tagged").unwrap(), Framing::Tagged);
        assert_eq!(Framing::default().to_string(), "bare");
    }

    #[test]
    fn test_operation_label() {
        assert_eq!(Operation::DecryptFile.to_string(), "decrypt file");
        assert!(Operation::EncryptText.is_encryption());
        assert!(!Operation::SetSecret.is_encryption());
    }
}
