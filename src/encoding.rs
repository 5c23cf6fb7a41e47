//! Text encodings for envelopes and recovered plaintext.
//!
//! `encode` renders bytes as text and `decode` parses text back to bytes.
//! Decoding is strict: input that the encoding cannot represent is an error
//! rather than being silently replaced or truncated.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{Error, Result};
use crate::types::Encoding;

/// Standard alphabet, padded on output, padding optional on input.
const BASE64: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent));

/// URL-safe alphabet, unpadded on output, padding optional on input.
const BASE64_URL: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, GeneralPurposeConfig::new().with_encode_padding(false).with_decode_padding_mode(DecodePaddingMode::Indifferent));

impl Encoding {
    /// Renders `bytes` as text.
    ///
    /// # Errors
    ///
    /// Text encodings fail when `bytes` is not valid in them (invalid UTF-8,
    /// odd-length UTF-16). Binary-safe encodings never fail.
    pub fn encode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Hex => Ok(hex::encode(bytes)),
            Self::Base64 => Ok(BASE64.encode(bytes)),
            Self::Base64Url => Ok(BASE64_URL.encode(bytes)),
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Ascii => Ok(bytes.iter().map(|&b| char::from(b & 0x7F)).collect()),
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| Error::decoding(self, e.utf8_error())),
            Self::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(Error::decoding(self, format!("odd byte length {}", bytes.len())));
                }
                let units: Vec<u16> = bytes.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect();
                String::from_utf16(&units).map_err(|e| Error::decoding(self, e))
            }
        }
    }

    /// Parses text produced by [`Encoding::encode`] back into bytes.
    ///
    /// Whitespace is not skipped; callers that accept padded input trim it
    /// first, and only for encodings whose alphabet excludes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decoding`] for characters outside the encoding's
    /// alphabet or range, and for malformed hex or base64 lengths.
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Hex => hex::decode(text).map_err(|e| Error::decoding(self, e)),
            Self::Base64 => BASE64.decode(text).map_err(|e| Error::decoding(self, e)),
            Self::Base64Url => BASE64_URL.decode(text).map_err(|e| Error::decoding(self, e)),
            Self::Latin1 => text.chars().map(|c| u8::try_from(u32::from(c)).map_err(|_| Error::decoding(self, format!("code point U+{:04X} is outside latin1", u32::from(c))))).collect(),
            Self::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { Ok(c as u8) } else { Err(Error::decoding(self, format!("code point U+{:04X} is outside ascii", u32::from(c)))) })
                .collect(),
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        }
    }
}
