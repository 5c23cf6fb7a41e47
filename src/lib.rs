//! CryptoShield - password-derived authenticated encryption for strings and files.
//!
//! Every payload is sealed into a single envelope carrying everything needed
//! to open it again except the secret:
//! - PBKDF2-HMAC-SHA2 stretches the secret with a fresh random salt
//! - AES-GCM or (X)ChaCha20-Poly1305 seals the payload under a fresh IV
//! - the envelope is `salt | IV | tag | ciphertext`, optionally behind a
//!   parameter header
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use cryptoshield::{Config, CryptoShield};
//!
//! let shield = CryptoShield::with_secret(Config::default(), "1234")?;
//! let envelope = shield.encrypt_text("Hello, world!", None).await?;
//! assert_eq!(shield.decrypt_text(&envelope, None).await?, "Hello, world!");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod config;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod file;
pub mod secret;
pub mod shield;
pub mod types;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result, ShieldError};
pub use secret::Secret;
pub use shield::CryptoShield;
pub use types::{Algorithm, Encoding, Framing, HashAlgorithm, Operation};
