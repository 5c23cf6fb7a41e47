use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox, SecretString};

use crate::error::{Error, Result};

/// Zeroize-on-drop byte buffer for derived keys.
pub struct SecretBytes {
    inner: SecretBox<Vec<u8>>,
}

impl SecretBytes {
    /// A buffer of `len` zero bytes, to be filled in place.
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![0u8; len])
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { inner: SecretBox::new(Box::new(data)) }
    }

    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    pub fn expose_secret_mut(&mut self) -> &mut [u8] {
        self.inner.expose_secret_mut()
    }

    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([... {} bytes ...])", self.len())
    }
}

/// A trimmed, non-empty passphrase.
///
/// Clones share one allocation, so handing a snapshot to a worker is cheap
/// and the text is wiped once the last clone drops.
#[derive(Clone)]
pub struct Secret {
    inner: Arc<SecretString>,
}

impl Secret {
    /// Trims surrounding whitespace and rejects what is left if it is empty.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidSecret);
        }

        Ok(Self { inner: Arc::new(SecretString::from(trimmed.to_owned())) })
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }
}

impl FromStr for Secret {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}
