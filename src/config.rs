//! Configuration
//!
//! Default parameters and the validated [`Config`] every envelope is
//! produced and consumed under. The bare envelope records none of these
//! values, so producer and consumer must agree on them out of band.

use crate::error::{Error, Result};
use crate::types::{Algorithm, Encoding, Framing, HashAlgorithm};

/// Application name used in the CLI and log output.
pub const APP_NAME: &str = "CryptoShield";

/// Environment variable the CLI reads the default secret from.
pub const SECRET_ENV: &str = "CRYPTOSHIELD_SECRET";

// === PBKDF2 Key Derivation Parameters ===

/// PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 5000;

/// Derived key length in bytes, matching AES-256-GCM.
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Random salt length in bytes.
pub const DEFAULT_SALT_LENGTH: usize = 32;

/// Upper bound for the salt length; tagged headers store it in one byte.
pub const MAX_SALT_LENGTH: usize = u8::MAX as usize;

// === AEAD Parameters ===

/// GCM's native 96-bit IV.
pub const DEFAULT_IV_LENGTH: usize = 12;

/// Full-length 128-bit authentication tag.
pub const DEFAULT_TAG_LENGTH: usize = 16;

// === Tagged Envelope Header ===

/// Magic bytes opening a tagged envelope ("CSHD").
pub const MAGIC_BYTES: u32 = 0x4353_4844;

/// Current tagged header version.
pub const CURRENT_VERSION: u16 = 0x0001;

/// magic(4) + version(2) + algorithm(1) + hash(1) + iterations(4) + salt/iv/tag lengths(3).
pub const HEADER_SIZE: usize = 15;

/// Parameters for one family of envelopes.
///
/// Build with [`Config::builder`] or take [`Config::default`]; both paths
/// guarantee the combination is one the cipher accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    algorithm: Algorithm,
    iterations: u32,
    key_length: usize,
    iv_length: usize,
    tag_length: usize,
    salt_length: usize,
    encoding: Encoding,
    decoding: Encoding,
    hash: HashAlgorithm,
    framing: Framing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Aes256Gcm,
            iterations: DEFAULT_ITERATIONS,
            key_length: DEFAULT_KEY_LENGTH,
            iv_length: DEFAULT_IV_LENGTH,
            tag_length: DEFAULT_TAG_LENGTH,
            salt_length: DEFAULT_SALT_LENGTH,
            encoding: Encoding::Hex,
            decoding: Encoding::Utf8,
            hash: HashAlgorithm::Sha512,
            framing: Framing::Bare,
        }
    }
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    pub const fn key_length(&self) -> usize {
        self.key_length
    }

    pub const fn iv_length(&self) -> usize {
        self.iv_length
    }

    pub const fn tag_length(&self) -> usize {
        self.tag_length
    }

    pub const fn salt_length(&self) -> usize {
        self.salt_length
    }

    /// Text encoding for envelopes.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Text encoding for recovered plaintext.
    pub const fn decoding(&self) -> Encoding {
        self.decoding
    }

    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub const fn framing(&self) -> Framing {
        self.framing
    }

    /// Checks that the cipher accepts every length and that the envelope
    /// encoding can carry arbitrary bytes.
    pub fn validate(&self) -> Result<()> {
        let algorithm = self.algorithm;

        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be at least 1".into()));
        }

        if self.key_length != algorithm.key_length() {
            return Err(Error::InvalidConfig(format!("{algorithm} requires a {}-byte key, got {}", algorithm.key_length(), self.key_length)));
        }

        if !algorithm.iv_lengths().contains(&self.iv_length) {
            return Err(Error::InvalidConfig(format!("{algorithm} accepts IV lengths {:?}, got {}", algorithm.iv_lengths(), self.iv_length)));
        }

        if !algorithm.tag_lengths().contains(&self.tag_length) {
            return Err(Error::InvalidConfig(format!("{algorithm} accepts tag lengths {:?}, got {}", algorithm.tag_lengths(), self.tag_length)));
        }

        if self.salt_length == 0 || self.salt_length > MAX_SALT_LENGTH {
            return Err(Error::InvalidConfig(format!("salt length must be between 1 and {MAX_SALT_LENGTH}, got {}", self.salt_length)));
        }

        if !self.encoding.is_binary_safe() {
            return Err(Error::InvalidConfig(format!("{} cannot carry binary envelopes", self.encoding)));
        }

        Ok(())
    }
}

/// Builder for [`Config`].
///
/// Starts from the defaults. When the algorithm is changed and no key length
/// was set explicitly, the key length follows the algorithm.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
    key_length_set: bool,
}

impl ConfigBuilder {
    #[must_use]
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        if !self.key_length_set {
            self.config.key_length = algorithm.key_length();
        }
        self
    }

    #[must_use]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    #[must_use]
    pub fn key_length(mut self, key_length: usize) -> Self {
        self.config.key_length = key_length;
        self.key_length_set = true;
        self
    }

    #[must_use]
    pub fn iv_length(mut self, iv_length: usize) -> Self {
        self.config.iv_length = iv_length;
        self
    }

    #[must_use]
    pub fn tag_length(mut self, tag_length: usize) -> Self {
        self.config.tag_length = tag_length;
        self
    }

    #[must_use]
    pub fn salt_length(mut self, salt_length: usize) -> Self {
        self.config.salt_length = salt_length;
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    #[must_use]
    pub fn decoding(mut self, decoding: Encoding) -> Self {
        self.config.decoding = decoding;
        self
    }

    #[must_use]
    pub fn hash(mut self, hash: HashAlgorithm) -> Self {
        self.config.hash = hash;
        self
    }

    #[must_use]
    pub fn framing(mut self, framing: Framing) -> Self {
        self.config.framing = framing;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
