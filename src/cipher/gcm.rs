use aes_gcm::AesGcm;
use aes_gcm::aead::consts::{U12, U13, U14, U15, U16};
use aes_gcm::aes::{Aes128, Aes192, Aes256};

use super::{open_in_place, seal_in_place};
use crate::error::{Error, Result};
use crate::types::Algorithm;

/// Picks the `AesGcm` instantiation for a runtime (IV, tag) length pair.
///
/// `aes-gcm` fixes both lengths in the type, so every accepted pair is
/// spelled out once here.
macro_rules! gcm_dispatch {
    ($aes:ty, $iv_len:expr, $tag_len:expr, $call:ident $args:tt) => {
        match ($iv_len, $tag_len) {
            (12, 12) => $call::<AesGcm<$aes, U12, U12>> $args,
            (12, 13) => $call::<AesGcm<$aes, U12, U13>> $args,
            (12, 14) => $call::<AesGcm<$aes, U12, U14>> $args,
            (12, 15) => $call::<AesGcm<$aes, U12, U15>> $args,
            (12, 16) => $call::<AesGcm<$aes, U12, U16>> $args,
            (16, 12) => $call::<AesGcm<$aes, U16, U12>> $args,
            (16, 13) => $call::<AesGcm<$aes, U16, U13>> $args,
            (16, 14) => $call::<AesGcm<$aes, U16, U14>> $args,
            (16, 15) => $call::<AesGcm<$aes, U16, U15>> $args,
            (16, 16) => $call::<AesGcm<$aes, U16, U16>> $args,
            (iv, tag) => Err(Error::InvalidConfig(format!("unsupported GCM parameters: {iv}-byte IV with {tag}-byte tag"))),
        }
    };
}

pub(super) fn seal(algorithm: Algorithm, key: &[u8], iv: &[u8], tag_length: usize, buffer: &mut [u8]) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Aes128Gcm => gcm_dispatch!(Aes128, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        Algorithm::Aes192Gcm => gcm_dispatch!(Aes192, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        Algorithm::Aes256Gcm => gcm_dispatch!(Aes256, iv.len(), tag_length, seal_in_place(key, iv, buffer)),
        other => Err(Error::InvalidConfig(format!("{other} is not an AES-GCM mode"))),
    }
}

pub(super) fn open(algorithm: Algorithm, key: &[u8], iv: &[u8], tag: &[u8], buffer: &mut [u8]) -> Result<()> {
    match algorithm {
        Algorithm::Aes128Gcm => gcm_dispatch!(Aes128, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        Algorithm::Aes192Gcm => gcm_dispatch!(Aes192, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        Algorithm::Aes256Gcm => gcm_dispatch!(Aes256, iv.len(), tag.len(), open_in_place(key, iv, tag, buffer)),
        other => Err(Error::InvalidConfig(format!("{other} is not an AES-GCM mode"))),
    }
}
