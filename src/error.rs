//! # Error Types
//!
//! Library operations return [`Result<T, Error>`](Error). The
//! [`CryptoShield`](crate::CryptoShield) facade wraps those in a
//! [`ShieldError`] that names the public operation which failed.
//!
//! Messages never carry the secret, the derived key or any plaintext.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Encoding, Operation};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for all CryptoShield operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No per-call secret was supplied and no default secret is set.
    #[error("secret is required")]
    MissingSecret,

    /// A secret was empty or whitespace-only after trimming.
    #[error("secret must not be empty")]
    InvalidSecret,

    /// The envelope could not be taken apart: too short, bad text encoding,
    /// or an unrecognized header.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// Tag verification failed.
    ///
    /// Wrong secret, mismatched configuration, or tampered data are
    /// deliberately indistinguishable.
    #[error("authentication failed: wrong secret, mismatched configuration, or corrupted data")]
    Authentication,

    /// A tagged envelope was produced under different parameters.
    #[error("envelope was produced with {field} {found}, this configuration expects {expected}")]
    ConfigMismatch { field: &'static str, expected: String, found: String },

    /// PBKDF2 rejected its inputs.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// An impossible algorithm/key/IV/tag/encoding combination.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The AEAD primitive refused to seal the payload.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Text could not be converted with the configured encoding.
    #[error("cannot decode {encoding} text: {reason}")]
    Decoding { encoding: Encoding, reason: String },

    /// Filesystem failure, with the direction and path involved.
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The blocking worker running key derivation did not complete.
    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { action, path: path.into(), source }
    }

    pub(crate) fn decoding(encoding: Encoding, reason: impl ToString) -> Self {
        Self::Decoding { encoding, reason: reason.to_string() }
    }
}

/// An [`Error`] labelled with the facade operation that produced it.
#[derive(Error, Debug)]
#[error("{operation} failed")]
pub struct ShieldError {
    operation: Operation,
    #[source]
    source: Error,
}

impl ShieldError {
    #[inline]
    pub fn new(operation: Operation, source: Error) -> Self {
        Self { operation, source }
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The underlying failure, for matching on its variant.
    #[inline]
    pub fn kind(&self) -> &Error {
        &self.source
    }

    #[inline]
    pub fn into_kind(self) -> Error {
        self.source
    }
}

/// Attaches an [`Operation`] label to a library result.
pub(crate) trait OperationContext<T> {
    fn during(self, operation: Operation) -> Result<T, ShieldError>;
}

impl<T> OperationContext<T> for Result<T> {
    #[inline]
    fn during(self, operation: Operation) -> Result<T, ShieldError> {
        self.map_err(|source| ShieldError::new(operation, source))
    }
}
