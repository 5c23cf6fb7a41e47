//! Parameter header for tagged envelopes.
//!
//! A tagged envelope opens with a fixed 15-byte block recording everything
//! the consumer needs to agree on, so a mismatched configuration is reported
//! by name instead of surfacing as an authentication failure.
//!
//! # Layout
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 4 | magic, big-endian |
//! | 4 | 2 | version, big-endian |
//! | 6 | 1 | algorithm id |
//! | 7 | 1 | PBKDF2 hash id |
//! | 8 | 4 | iterations, big-endian |
//! | 12 | 1 | salt length |
//! | 13 | 1 | IV length |
//! | 14 | 1 | tag length |

use crate::config::{CURRENT_VERSION, Config, HEADER_SIZE, MAGIC_BYTES};
use crate::error::{Error, Result};
use crate::types::{Algorithm, HashAlgorithm};

/// The parameters a tagged envelope was produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub algorithm: Algorithm,
    pub hash: HashAlgorithm,
    pub iterations: u32,
    pub salt_length: u8,
    pub iv_length: u8,
    pub tag_length: u8,
}

impl Header {
    pub fn from_config(config: &Config) -> Result<Self> {
        let byte = |name: &str, value: usize| u8::try_from(value).map_err(|_| Error::InvalidConfig(format!("{name} {value} does not fit a tagged header")));

        Ok(Self {
            algorithm: config.algorithm(),
            hash: config.hash(),
            iterations: config.iterations(),
            salt_length: byte("salt length", config.salt_length())?,
            iv_length: byte("IV length", config.iv_length())?,
            tag_length: byte("tag length", config.tag_length())?,
        })
    }

    pub fn serialize(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&MAGIC_BYTES.to_be_bytes());
        out[4..6].copy_from_slice(&CURRENT_VERSION.to_be_bytes());
        out[6] = self.algorithm.id();
        out[7] = self.hash.id();
        out[8..12].copy_from_slice(&self.iterations.to_be_bytes());
        out[12] = self.salt_length;
        out[13] = self.iv_length;
        out[14] = self.tag_length;
        out
    }

    /// Parses the header at the start of `bytes`.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedEnvelope`] if the buffer is too short, the magic is
    /// wrong, the version is unknown, or an identifier is unrecognized.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let Some(raw) = bytes.get(..HEADER_SIZE) else {
            return Err(Error::MalformedEnvelope(format!("tagged envelope needs at least {HEADER_SIZE} header bytes, got {}", bytes.len())));
        };

        let magic = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
        if magic != MAGIC_BYTES {
            return Err(Error::MalformedEnvelope("unrecognized envelope header".into()));
        }

        let version = u16::from_be_bytes([raw[4], raw[5]]);
        if version != CURRENT_VERSION {
            return Err(Error::MalformedEnvelope(format!("unsupported envelope version {version}")));
        }

        let algorithm = Algorithm::from_id(raw[6]).ok_or_else(|| Error::MalformedEnvelope(format!("unknown algorithm id {:#04x}", raw[6])))?;
        let hash = HashAlgorithm::from_id(raw[7]).ok_or_else(|| Error::MalformedEnvelope(format!("unknown hash id {:#04x}", raw[7])))?;

        Ok(Self {
            algorithm,
            hash,
            iterations: u32::from_be_bytes([raw[8], raw[9], raw[10], raw[11]]),
            salt_length: raw[12],
            iv_length: raw[13],
            tag_length: raw[14],
        })
    }

    /// Compares a parsed header against the one this side would produce.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigMismatch`] naming the first differing field.
    pub fn ensure_matches(&self, expected: &Self) -> Result<()> {
        fn check(field: &'static str, expected: impl ToString, found: impl ToString, equal: bool) -> Result<()> {
            if equal {
                return Ok(());
            }
            Err(Error::ConfigMismatch { field, expected: expected.to_string(), found: found.to_string() })
        }

        check("algorithm", expected.algorithm, self.algorithm, self.algorithm == expected.algorithm)?;
        check("hash", expected.hash, self.hash, self.hash == expected.hash)?;
        check("iterations", expected.iterations, self.iterations, self.iterations == expected.iterations)?;
        check("salt length", expected.salt_length, self.salt_length, self.salt_length == expected.salt_length)?;
        check("IV length", expected.iv_length, self.iv_length, self.iv_length == expected.iv_length)?;
        check("tag length", expected.tag_length, self.tag_length, self.tag_length == expected.tag_length)
    }
}
