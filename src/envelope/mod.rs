//! # Envelope Codec
//!
//! An envelope is the contiguous byte string `salt | IV | tag | ciphertext`.
//! The first three fields have fixed lengths taken from the
//! [`Config`](crate::config::Config); the ciphertext is whatever remains and
//! may be empty.
//!
//! Bare envelopes carry no identifier of any kind. With
//! [`Framing::Tagged`] the same layout is preceded by a [`Header`] recording
//! the parameters it was produced with.
//!
//! Nothing here touches cryptography: a well-formed envelope may still fail
//! authentication.

mod header;

pub use header::Header;

use crate::config::{Config, HEADER_SIZE};
use crate::error::{Error, Result};
use crate::types::Framing;

/// Borrowed view of the four fields of a bare envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub salt: &'a [u8],
    pub iv: &'a [u8],
    pub tag: &'a [u8],
    pub ciphertext: &'a [u8],
}

/// Concatenates the fields into a bare envelope.
pub fn pack(salt: &[u8], iv: &[u8], tag: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(salt.len() + iv.len() + tag.len() + ciphertext.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(iv);
    out.extend_from_slice(tag);
    out.extend_from_slice(ciphertext);
    out
}

/// Slices a bare envelope at fixed offsets.
///
/// # Errors
///
/// [`Error::MalformedEnvelope`] if `envelope` is shorter than
/// `salt_len + iv_len + tag_len`.
pub fn unpack(envelope: &[u8], salt_len: usize, iv_len: usize, tag_len: usize) -> Result<Envelope<'_>> {
    let fixed = salt_len + iv_len + tag_len;
    if envelope.len() < fixed {
        return Err(Error::MalformedEnvelope(format!("expected at least {fixed} bytes, got {}", envelope.len())));
    }

    let (salt, rest) = envelope.split_at(salt_len);
    let (iv, rest) = rest.split_at(iv_len);
    let (tag, ciphertext) = rest.split_at(tag_len);

    Ok(Envelope { salt, iv, tag, ciphertext })
}

/// Packs and unpacks envelopes under one configuration.
#[derive(Debug, Clone)]
pub struct EnvelopeCodec {
    salt_length: usize,
    iv_length: usize,
    tag_length: usize,
    header: Option<Header>,
}

impl EnvelopeCodec {
    /// Captures the field lengths and framing of `config`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if a length or iteration count does not fit
    /// its header field under tagged framing.
    pub fn new(config: &Config) -> Result<Self> {
        let header = match config.framing() {
            Framing::Bare => None,
            Framing::Tagged => Some(Header::from_config(config)?),
        };

        Ok(Self { salt_length: config.salt_length(), iv_length: config.iv_length(), tag_length: config.tag_length(), header })
    }

    /// Builds `[header] | salt | IV | tag | ciphertext`.
    ///
    /// # Arguments
    ///
    /// * `salt`, `iv`, `tag` - Must have the lengths this codec was built
    ///   with, or [`EnvelopeCodec::unpack`] will slice them wrongly.
    /// * `ciphertext` - Any length, including empty.
    pub fn pack(&self, salt: &[u8], iv: &[u8], tag: &[u8], ciphertext: &[u8]) -> Vec<u8> {
        let body = pack(salt, iv, tag, ciphertext);
        let Some(header) = &self.header else {
            return body;
        };

        let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
        out.extend_from_slice(&header.serialize());
        out.extend_from_slice(&body);
        out
    }

    /// Strips and checks the header, if framed, and slices the fields.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedEnvelope`] for a truncated envelope or unreadable
    /// header, [`Error::ConfigMismatch`] when a tagged header disagrees with
    /// this configuration.
    ///
    /// # Security Notes
    ///
    /// Nothing here is authenticated yet. A header that matches only means
    /// the parameters agree; the AEAD tag decides whether the data is genuine.
    pub fn unpack<'a>(&self, envelope: &'a [u8]) -> Result<Envelope<'a>> {
        let body = match &self.header {
            None => envelope,
            Some(expected) => {
                let found = Header::deserialize(envelope)?;
                found.ensure_matches(expected)?;
                &envelope[HEADER_SIZE..]
            }
        };

        unpack(body, self.salt_length, self.iv_length, self.tag_length)
    }
}
