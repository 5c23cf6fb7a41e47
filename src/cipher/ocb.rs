//! AES-OCB3 (RFC 7253).

use aes_gcm::aead::consts::{U4, U6, U8, U10, U12, U13, U14, U15, U16};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use ocb3::Ocb3;

use super::{open_in_place, seal_in_place};
use crate::error::{Error, Result};
use crate::types::Algorithm;

macro_rules! ocb_tags {
    ($aes:ty, $nonce:ty, $tag_len:expr, $call:ident $args:tt) => {
        match $tag_len {
            4 => $call::<Ocb3<$aes, $nonce, U4>> $args,
            6 => $call::<Ocb3<$aes, $nonce, U6>> $args,
            8 => $call::<Ocb3<$aes, $nonce, U8>> $args,
            10 => $call::<Ocb3<$aes, $nonce, U10>> $args,
            12 => $call::<Ocb3<$aes, $nonce, U12>> $args,
            14 => $call::<Ocb3<$aes, $nonce, U14>> $args,
            16 => $call::<Ocb3<$aes, $nonce, U16>> $args,
            tag => Err(Error::InvalidConfig(format!("OCB does not accept a {tag}-byte tag"))),
        }
    };
}

/// Picks the `Ocb3` instantiation for a runtime (IV, tag) length pair.
macro_rules! ocb_dispatch {
    ($aes:ty, $iv_len:expr, $tag_len:expr, $call:ident $args:tt) => {
        match $iv_len {
            12 => ocb_tags!($aes, U12, $tag_len, $call $args),
            13 => ocb_tags!($aes, U13, $tag_len, $call $args),
            14 => ocb_tags!($aes, U14, $tag_len, $call $args),
            15 => ocb_tags!($aes, U15, $tag_len, $call $args),
            iv => Err(Error::InvalidConfig(format!("OCB does not accept a {iv}-byte IV"))),
        }
    };
}

pub(super) fn seal(algorithm: Algorithm, key: &[u8], iv: &[u8], tag_length: usize, buffer: &mut [u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Aes128Ocb => ocb_dispatch!(Aes128, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        Algorithm::Aes192Ocb => ocb_dispatch!(Aes192, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        Algorithm::Aes256Ocb => ocb_dispatch!(Aes256, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        other => Err(Error::InvalidConfig(format!("{other} is not an AES-OCB mode"))),
    }
}

pub(super) fn open(algorithm: Algorithm, key: &[u8], iv: &[u8], tag: &[u8], buffer: &mut [u8]) -> Result<()> {
    match algorithm {
        Algorithm::Aes128Ocb => ocb_dispatch!(Aes128, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        Algorithm::Aes192Ocb => ocb_dispatch!(Aes192, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        Algorithm::Aes256Ocb => ocb_dispatch!(Aes256, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        other => Err(Error::InvalidConfig(format!("{other} is not an AES-OCB mode"))),
    }
}
