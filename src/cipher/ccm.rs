//! AES-CCM (counter with CBC-MAC).
//!
//! CCM trades nonce length against message length: the nonce and the length
//! field share 15 bytes, so a 13-byte IV caps the plaintext at 64 KiB and a
//! 7-byte IV leaves eight length bytes. Oversized input fails to seal.

use aes_gcm::aead::consts::{U4, U6, U7, U8, U9, U10, U11, U12, U13, U14, U16};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use ::ccm::Ccm;

use super::{open_in_place, seal_in_place};
use crate::error::{Error, Result};
use crate::types::Algorithm;

/// Expands the tag lengths for one nonce size.
macro_rules! ccm_tags {
    ($aes:ty, $nonce:ty, $tag_len:expr, $call:ident $args:tt) => {
        match $tag_len {
            4 => $call::<Ccm<$aes, U4, $nonce>> $args,
            6 => $call::<Ccm<$aes, U6, $nonce>> $args,
            8 => $call::<Ccm<$aes, U8, $nonce>> $args,
            10 => $call::<Ccm<$aes, U10, $nonce>> $args,
            12 => $call::<Ccm<$aes, U12, $nonce>> $args,
            14 => $call::<Ccm<$aes, U14, $nonce>> $args,
            16 => $call::<Ccm<$aes, U16, $nonce>> $args,
            tag => Err(Error::InvalidConfig(format!("CCM does not accept a {tag}-byte tag"))),
        }
    };
}

/// Picks the `Ccm` instantiation for a runtime (IV, tag) length pair.
macro_rules! ccm_dispatch {
    ($aes:ty, $iv_len:expr, $tag_len:expr, $call:ident $args:tt) => {
        match $iv_len {
            7 => ccm_tags!($aes, U7, $tag_len, $call $args),
            8 => ccm_tags!($aes, U8, $tag_len, $call $args),
            9 => ccm_tags!($aes, U9, $tag_len, $call $args),
            10 => ccm_tags!($aes, U10, $tag_len, $call $args),
            11 => ccm_tags!($aes, U11, $tag_len, $call $args),
            12 => ccm_tags!($aes, U12, $tag_len, $call $args),
            13 => ccm_tags!($aes, U13, $tag_len, $call $args),
            iv => Err(Error::InvalidConfig(format!("CCM does not accept a {iv}-byte IV"))),
        }
    };
}

pub(super) fn seal(algorithm: Algorithm, key: &[u8], iv: &[u8], tag_length: usize, buffer: &mut [u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Aes128Ccm => ccm_dispatch!(Aes128, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        Algorithm::Aes192Ccm => ccm_dispatch!(Aes192, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        Algorithm::Aes256Ccm => ccm_dispatch!(Aes256, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        other => Err(Error::InvalidConfig(format!("{other} is not an AES-CCM mode"))),
    }
}

pub(super) fn open(algorithm: Algorithm, key: &[u8], iv: &[u8], tag: &[u8], buffer: &mut [u8]) -> Result<()> {
    match algorithm {
        Algorithm::Aes128Ccm => ccm_dispatch!(Aes128, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        Algorithm::Aes192Ccm => ccm_dispatch!(Aes192, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        Algorithm::Aes256Ccm => ccm_dispatch!(Aes256, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        other => Err(Error::InvalidConfig(format!("{other} is not an AES-CCM mode"))),
    }
}
