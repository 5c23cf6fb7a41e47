//! # CryptoShield Facade
//!
//! [`CryptoShield`] ties the pieces together: it resolves the secret, draws a
//! fresh salt and IV, derives the key, seals the payload and packs the
//! envelope, and reverses all of that on the way back.
//!
//! Key derivation and the AEAD pass are CPU-bound and run on tokio's blocking
//! pool. File operations read and write through [`File`], so an operation
//! that fails never leaves a partial output behind.
//!
//! ## Secrets
//!
//! Every operation accepts an optional per-call [`Secret`]. Without one, the
//! default set through [`CryptoShield::set_secret`] is used. Each call takes
//! its own snapshot of the default before doing any work, so replacing it
//! only affects calls started afterwards.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument};

use crate::cipher::{AeadCipher, Derive};
use crate::config::Config;
use crate::envelope::EnvelopeCodec;
use crate::error::{Error, OperationContext, Result, ShieldError};
use crate::file::File;
use crate::secret::Secret;
use crate::types::{Encoding, Operation};

/// Everything needed to seal or open one envelope, shared with blocking workers.
#[derive(Debug)]
struct Engine {
    derive: Derive,
    cipher: AeadCipher,
    codec: EnvelopeCodec,
    salt_length: usize,
}

impl Engine {
    fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            derive: Derive::new(config.hash(), config.iterations(), config.key_length())?,
            cipher: AeadCipher::new(config.algorithm(), config.iv_length(), config.tag_length())?,
            codec: EnvelopeCodec::new(config)?,
            salt_length: config.salt_length(),
        })
    }

    fn seal(&self, secret: &Secret, plaintext: &[u8]) -> Result<Vec<u8>> {
        let salt = Derive::random_bytes(self.salt_length)?;
        let iv = Derive::random_bytes(self.cipher.iv_length())?;
        let key = self.derive.derive_key(secret, &salt)?;

        let sealed = self.cipher.seal(key.expose_secret(), &iv, plaintext)?;
        Ok(self.codec.pack(&salt, &iv, &sealed.tag, &sealed.ciphertext))
    }

    fn open(&self, secret: &Secret, envelope: &[u8]) -> Result<Vec<u8>> {
        let parts = self.codec.unpack(envelope)?;
        let key = self.derive.derive_key(secret, parts.salt)?;

        self.cipher.open(key.expose_secret(), parts.iv, parts.tag, parts.ciphertext)
    }
}

/// Password-based authenticated encryption for strings, byte buffers and files.
///
/// `CryptoShield` is `Send + Sync`; share it behind an `Arc` and call it
/// from as many tasks as needed. Calls do not serialize on each other.
#[derive(Debug)]
pub struct CryptoShield {
    config: Arc<Config>,
    engine: Arc<Engine>,
    secret: RwLock<Option<Secret>>,
}

impl CryptoShield {
    /// Creates a facade with no default secret.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the configuration is inconsistent.
    pub fn new(config: Config) -> Result<Self> {
        let engine = Engine::new(&config)?;
        Ok(Self { config: Arc::new(config), engine: Arc::new(engine), secret: RwLock::new(None) })
    }

    /// Creates a facade with a default secret already set.
    pub fn with_secret(config: Config, secret: &str) -> Result<Self> {
        let shield = Self::new(config)?;
        *shield.secret.write().unwrap_or_else(PoisonError::into_inner) = Some(Secret::new(secret)?);
        Ok(shield)
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the default secret.
    ///
    /// Surrounding whitespace is trimmed. Calls already in flight keep the
    /// secret they started with.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSecret`] if nothing is left after trimming; the
    /// previous default is kept in that case.
    pub fn set_secret(&self, secret: &str) -> Result<(), ShieldError> {
        let secret = Secret::new(secret).during(Operation::SetSecret)?;
        *self.secret.write().unwrap_or_else(PoisonError::into_inner) = Some(secret);
        debug!("default secret replaced");
        Ok(())
    }

    /// Encrypts raw bytes into a binary envelope.
    #[instrument(skip_all, fields(bytes = plaintext.len()))]
    pub async fn encrypt_bytes(&self, plaintext: Vec<u8>, secret: Option<&Secret>) -> Result<Vec<u8>, ShieldError> {
        let secret = self.resolve(secret).during(Operation::EncryptBytes)?;
        self.seal(secret, plaintext).await.during(Operation::EncryptBytes)
    }

    /// Opens a binary envelope.
    #[instrument(skip_all, fields(bytes = envelope.len()))]
    pub async fn decrypt_bytes(&self, envelope: &[u8], secret: Option<&Secret>) -> Result<Vec<u8>, ShieldError> {
        let secret = self.resolve(secret).during(Operation::DecryptBytes)?;
        self.open(secret, envelope.to_vec()).await.during(Operation::DecryptBytes)
    }

    /// Encrypts the UTF-8 bytes of `plaintext` and renders the envelope in
    /// the configured envelope encoding.
    #[instrument(skip_all, fields(bytes = plaintext.len(), encoding = %self.config.encoding()))]
    pub async fn encrypt_text(&self, plaintext: &str, secret: Option<&Secret>) -> Result<String, ShieldError> {
        let run = async {
            let secret = self.resolve(secret)?;
            let envelope = self.seal(secret, plaintext.as_bytes().to_vec()).await?;
            self.config.encoding().encode(&envelope)
        };
        run.await.during(Operation::EncryptText)
    }

    /// Decodes an envelope from the configured envelope encoding, opens it
    /// and renders the plaintext in the configured plaintext encoding.
    ///
    /// Leading and trailing whitespace around hex and base64 envelopes is
    /// ignored. Latin1 envelopes are taken verbatim, since spaces and
    /// no-break spaces there are envelope bytes.
    #[instrument(skip_all, fields(chars = envelope.len(), decoding = %self.config.decoding()))]
    pub async fn decrypt_text(&self, envelope: &str, secret: Option<&Secret>) -> Result<String, ShieldError> {
        let run = async {
            let secret = self.resolve(secret)?;
            let envelope = decode_envelope(self.config.encoding(), envelope)?;
            let plaintext = self.open(secret, envelope).await?;
            self.config.decoding().encode(&plaintext)
        };
        run.await.during(Operation::DecryptText)
    }

    /// Encrypts a file and writes the binary envelope to `output`, or over
    /// `input` when no output is given. Returns the path written.
    #[instrument(skip_all, fields(input = %input.display()))]
    pub async fn encrypt_file(&self, input: &Path, output: Option<&Path>, secret: Option<&Secret>) -> Result<PathBuf, ShieldError> {
        let run = async {
            let secret = self.resolve(secret)?;
            let plaintext = File::new(input).read().await?;
            let envelope = self.seal(secret, plaintext).await?;

            let target = File::new(output.unwrap_or(input));
            target.write_atomic(&envelope).await?;
            Ok::<_, Error>(target.into_path())
        };
        run.await.during(Operation::EncryptFile)
    }

    /// Decrypts a file holding a binary envelope and writes the plaintext to
    /// `output`, or over `input` when no output is given. Returns the path
    /// written.
    ///
    /// Nothing is written unless the envelope authenticates.
    #[instrument(skip_all, fields(input = %input.display()))]
    pub async fn decrypt_file(&self, input: &Path, output: Option<&Path>, secret: Option<&Secret>) -> Result<PathBuf, ShieldError> {
        let run = async {
            let secret = self.resolve(secret)?;
            let envelope = File::new(input).read().await?;
            let plaintext = self.open(secret, envelope).await?;

            let target = File::new(output.unwrap_or(input));
            target.write_atomic(&plaintext).await?;
            Ok::<_, Error>(target.into_path())
        };
        run.await.during(Operation::DecryptFile)
    }

    /// Picks the per-call secret, falling back to a snapshot of the default.
    fn resolve(&self, secret: Option<&Secret>) -> Result<Secret> {
        if let Some(secret) = secret {
            return Ok(secret.clone());
        }

        self.secret.read().unwrap_or_else(PoisonError::into_inner).clone().ok_or(Error::MissingSecret)
    }

    async fn seal(&self, secret: Secret, plaintext: Vec<u8>) -> Result<Vec<u8>> {
        let engine = Arc::clone(&self.engine);
        let envelope = tokio::task::spawn_blocking(move || engine.seal(&secret, &plaintext)).await??;
        debug!(bytes = envelope.len(), "sealed envelope");
        Ok(envelope)
    }

    async fn open(&self, secret: Secret, envelope: Vec<u8>) -> Result<Vec<u8>> {
        let engine = Arc::clone(&self.engine);
        let plaintext = tokio::task::spawn_blocking(move || engine.open(&secret, &envelope)).await??;
        debug!(bytes = plaintext.len(), "opened envelope");
        Ok(plaintext)
    }
}

/// Text that does not decode cannot be an envelope.
fn decode_envelope(encoding: Encoding, text: &str) -> Result<Vec<u8>> {
    let text = if encoding.is_whitespace_free() { text.trim() } else { text };
    encoding.decode(text).map_err(|err| Error::MalformedEnvelope(err.to_string()))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;
    use tempfile::tempdir;

    use super::*;
    use crate::types::{Algorithm, Framing};

    /// Low iteration count keeps the tests fast; the count does not affect behavior.
    fn fast_config() -> Config {
        Config::builder().iterations(16).build().unwrap()
    }

    fn secret(raw: &str) -> Secret {
        Secret::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_default_config_hex_length() {
        let shield = CryptoShield::with_secret(Config::default(), "1234").unwrap();

        let envelope = shield.encrypt_text("Hello, world!", None).await.unwrap();
        assert_eq!(envelope.len(), 146);
        assert!(envelope.chars().all(|c| c.is_ascii_hexdigit()));

        assert_eq!(shield.decrypt_text(&envelope, None).await.unwrap(), "Hello, world!");
    }

    #[tokio::test]
    async fn test_text_roundtrip_with_override() {
        let shield = CryptoShield::with_secret(fast_config(), "default").unwrap();
        let other = secret("p@ss wörd ✓");

        for text in ["", "a", "Hello, world!", "日本語のテキスト", &"x".repeat(10_000)] {
            let envelope = shield.encrypt_text(text, Some(&other)).await.unwrap();
            assert_eq!(shield.decrypt_text(&envelope, Some(&other)).await.unwrap(), text);
        }
    }

    #[tokio::test]
    async fn test_encryption_is_randomized() {
        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();

        let first = shield.encrypt_text("same input", None).await.unwrap();
        let second = shield.encrypt_text("same input", None).await.unwrap();
        assert_ne!(first, second);

        assert_eq!(shield.decrypt_text(&first, None).await.unwrap(), "same input");
        assert_eq!(shield.decrypt_text(&second, None).await.unwrap(), "same input");
    }

    #[tokio::test]
    async fn test_whitespace_around_envelope_ignored() {
        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();
        let envelope = shield.encrypt_text("padded", None).await.unwrap();

        let padded = format!("  {envelope}\n");
        assert_eq!(shield.decrypt_text(&padded, None).await.unwrap(), "padded");
    }

    #[test]
    fn test_latin1_envelope_keeps_edge_whitespace() {
        let bytes = decode_envelope(Encoding::Latin1, " abc\u{a0}").unwrap();
        assert_eq!(bytes, [0x20, b'a', b'b', b'c', 0xA0]);

        let bytes = decode_envelope(Encoding::Hex, " 20ff\n").unwrap();
        assert_eq!(bytes, [0x20, 0xFF]);
    }

    #[tokio::test]
    async fn test_latin1_roundtrips_survive_whitespace_bytes() {
        let config = Config::builder().encoding(Encoding::Latin1).iterations(1).build().unwrap();
        let shield = CryptoShield::with_secret(config, "1234").unwrap();

        // Each envelope has 60 random bytes, so across these runs many start
        // or end with 0x09..=0x0D, 0x20, 0x85 or 0xA0.
        for i in 0..300 {
            let text = format!("latin1 message {i}");
            let envelope = shield.encrypt_text(&text, None).await.unwrap();
            assert_eq!(envelope.chars().count(), 60 + text.len());
            assert_eq!(shield.decrypt_text(&envelope, None).await.unwrap(), text, "run {i}");
        }
    }

    #[tokio::test]
    async fn test_envelope_text_lengths() {
        // 32 salt + 12 IV + 16 tag + 13 ciphertext = 73 bytes.
        for (encoding, chars) in [(Encoding::Hex, 146), (Encoding::Base64, 100), (Encoding::Base64Url, 98), (Encoding::Latin1, 73)] {
            let config = Config::builder().encoding(encoding).iterations(1).build().unwrap();
            let shield = CryptoShield::with_secret(config, "1234").unwrap();

            let envelope = shield.encrypt_text("Hello, world!", None).await.unwrap();
            assert_eq!(envelope.chars().count(), chars, "{encoding}");
            assert_eq!(shield.decrypt_text(&envelope, None).await.unwrap(), "Hello, world!");
        }
    }

    #[tokio::test]
    async fn test_tampering_fails_authentication() {
        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();
        let envelope = shield.encrypt_bytes(b"attack at dawn".to_vec(), None).await.unwrap();

        // Tag starts at 44, ciphertext at 60.
        for index in [44, 50, 59, 60, 66, envelope.len() - 1] {
            for bit in [0x01u8, 0x80] {
                let mut tampered = envelope.clone();
                tampered[index] ^= bit;
                let err = shield.decrypt_bytes(&tampered, None).await.unwrap_err();
                assert!(matches!(err.kind(), Error::Authentication), "byte {index} bit {bit:#04x}");
            }
        }
    }

    #[tokio::test]
    async fn test_wrong_secret_fails_authentication() {
        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();
        let envelope = shield.encrypt_text("Hello, world!", None).await.unwrap();

        let err = shield.decrypt_text(&envelope, Some(&secret("4321"))).await.unwrap_err();
        assert_eq!(err.operation(), Operation::DecryptText);
        assert!(matches!(err.kind(), Error::Authentication));
    }

    #[tokio::test]
    async fn test_short_envelope_is_malformed() {
        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();

        let err = shield.decrypt_bytes(&[0u8; 59], None).await.unwrap_err();
        assert!(matches!(err.kind(), Error::MalformedEnvelope(_)));

        let err = shield.decrypt_text("deadbeef", None).await.unwrap_err();
        assert!(matches!(err.kind(), Error::MalformedEnvelope(_)));

        let err = shield.decrypt_text("not hex at all", None).await.unwrap_err();
        assert!(matches!(err.kind(), Error::MalformedEnvelope(_)));
    }

    #[tokio::test]
    async fn test_missing_secret() {
        let shield = CryptoShield::new(fast_config()).unwrap();

        let err = shield.encrypt_text("Hello", None).await.unwrap_err();
        assert_eq!(err.operation(), Operation::EncryptText);
        assert!(matches!(err.kind(), Error::MissingSecret));

        // Reported before the envelope is even looked at.
        let err = shield.decrypt_text("zz", None).await.unwrap_err();
        assert!(matches!(err.kind(), Error::MissingSecret));

        let dir = tempdir().unwrap();
        let err = shield.encrypt_file(&dir.path().join("absent"), None, None).await.unwrap_err();
        assert!(matches!(err.kind(), Error::MissingSecret));
    }

    #[tokio::test]
    async fn test_set_secret() {
        let shield = CryptoShield::new(fast_config()).unwrap();

        let err = shield.set_secret("   ").unwrap_err();
        assert_eq!(err.operation(), Operation::SetSecret);
        assert!(matches!(err.kind(), Error::InvalidSecret));

        shield.set_secret("  1234 ").unwrap();
        let envelope = shield.encrypt_text("trimmed", None).await.unwrap();
        assert_eq!(shield.decrypt_text(&envelope, Some(&secret("1234"))).await.unwrap(), "trimmed");

        shield.set_secret("5678").unwrap();
        assert!(shield.decrypt_text(&envelope, None).await.is_err());
        assert!(shield.set_secret("").is_err());
        assert!(shield.encrypt_text("still set", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_every_algorithm_and_encoding() {
        for algorithm in Algorithm::iter() {
            let iv_length = algorithm.iv_lengths()[0];
            for encoding in [Encoding::Hex, Encoding::Base64, Encoding::Base64Url, Encoding::Latin1] {
                let config = Config::builder().algorithm(algorithm).iv_length(iv_length).encoding(encoding).iterations(8).build().unwrap();
                let shield = CryptoShield::with_secret(config, "secret").unwrap();

                let envelope = shield.encrypt_text("round trip", None).await.unwrap();
                assert_eq!(shield.decrypt_text(&envelope, None).await.unwrap(), "round trip", "{algorithm} {encoding}");
            }
        }
    }

    #[tokio::test]
    async fn test_plaintext_decoding() {
        let config = Config::builder().iterations(8).decoding(Encoding::Hex).build().unwrap();
        let shield = CryptoShield::with_secret(config, "secret").unwrap();

        let envelope = shield.encrypt_text("hi", None).await.unwrap();
        assert_eq!(shield.decrypt_text(&envelope, None).await.unwrap(), "6869");
    }

    #[tokio::test]
    async fn test_tagged_framing_mismatch() {
        let producer = Config::builder().iterations(8).framing(Framing::Tagged).build().unwrap();
        let consumer = Config::builder().iterations(9).framing(Framing::Tagged).build().unwrap();

        let envelope = CryptoShield::with_secret(producer, "1234").unwrap().encrypt_bytes(b"data".to_vec(), None).await.unwrap();
        let err = CryptoShield::with_secret(consumer, "1234").unwrap().decrypt_bytes(&envelope, None).await.unwrap_err();

        assert!(matches!(err.kind(), Error::ConfigMismatch { field: "iterations", .. }));
    }

    #[tokio::test]
    async fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.txt");
        let encrypted = dir.path().join("plain.txt.enc");
        let decrypted = dir.path().join("plain.out.txt");
        std::fs::write(&input, b"file contents\n").unwrap();

        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();

        let written = shield.encrypt_file(&input, Some(&encrypted), None).await.unwrap();
        assert_eq!(written, encrypted);
        assert_eq!(std::fs::read(&encrypted).unwrap().len(), 60 + 14);

        let written = shield.decrypt_file(&encrypted, Some(&decrypted), None).await.unwrap();
        assert_eq!(written, decrypted);
        assert_eq!(std::fs::read(&decrypted).unwrap(), b"file contents\n");
    }

    #[tokio::test]
    async fn test_file_in_place_and_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        std::fs::write(&path, b"").unwrap();

        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();

        assert_eq!(shield.encrypt_file(&path, None, None).await.unwrap(), path);
        assert_eq!(std::fs::read(&path).unwrap().len(), 60);

        assert_eq!(shield.decrypt_file(&path, None, None).await.unwrap(), path);
        assert!(std::fs::read(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_decrypt_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("secret.enc");
        let output = dir.path().join("secret.txt");
        std::fs::write(&input, b"plain").unwrap();

        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();
        shield.encrypt_file(&input, None, None).await.unwrap();

        let err = shield.decrypt_file(&input, Some(&output), Some(&secret("wrong"))).await.unwrap_err();
        assert_eq!(err.operation(), Operation::DecryptFile);
        assert!(matches!(err.kind(), Error::Authentication));
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_tampered_file_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("report.txt");
        let encrypted = dir.path().join("report.txt.enc");
        let output = dir.path().join("report.out.txt");
        std::fs::write(&input, b"quarterly numbers").unwrap();

        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();
        shield.encrypt_file(&input, Some(&encrypted), None).await.unwrap();

        let mut envelope = std::fs::read(&encrypted).unwrap();
        envelope[64] ^= 0x01;
        std::fs::write(&encrypted, &envelope).unwrap();

        let err = shield.decrypt_file(&encrypted, Some(&output), None).await.unwrap_err();
        assert_eq!(err.operation(), Operation::DecryptFile);
        assert!(matches!(err.kind(), Error::Authentication));
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_in_place_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("private.txt");
        std::fs::write(&path, b"owner only").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();
        let mode = || std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;

        shield.encrypt_file(&path, None, None).await.unwrap();
        assert_eq!(mode(), 0o600);

        shield.decrypt_file(&path, None, None).await.unwrap();
        assert_eq!(mode(), 0o600);
        assert_eq!(std::fs::read(&path).unwrap(), b"owner only");
    }

    #[tokio::test]
    async fn test_ccm_and_ocb_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plain.bin");
        std::fs::write(&input, vec![0x5Au8; 4096]).unwrap();

        for (algorithm, iv_length, tag_length) in [(Algorithm::Aes128Ccm, 13, 8), (Algorithm::Aes256Ccm, 7, 16), (Algorithm::Aes192Ocb, 15, 12)] {
            let config = Config::builder().algorithm(algorithm).iv_length(iv_length).tag_length(tag_length).iterations(4).build().unwrap();
            let shield = CryptoShield::with_secret(config, "modes").unwrap();

            let encrypted = dir.path().join(format!("{algorithm}.enc"));
            shield.encrypt_file(&input, Some(&encrypted), None).await.unwrap();
            assert_eq!(std::fs::read(&encrypted).unwrap().len(), 32 + iv_length + tag_length + 4096);

            let decrypted = shield.decrypt_file(&encrypted, Some(&dir.path().join(format!("{algorithm}.out"))), None).await.unwrap();
            assert_eq!(std::fs::read(decrypted).unwrap(), vec![0x5Au8; 4096], "{algorithm}");
        }
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let shield = CryptoShield::with_secret(fast_config(), "1234").unwrap();

        let err = shield.decrypt_file(&dir.path().join("nope"), None, None).await.unwrap_err();
        assert!(matches!(err.kind(), Error::Io { action: "read", .. }));
        assert_eq!(err.to_string(), "decrypt file failed");
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let shield = Arc::new(CryptoShield::with_secret(fast_config(), "shared").unwrap());

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let shield = Arc::clone(&shield);
                tokio::spawn(async move {
                    let own = Secret::new(&format!("secret-{i}")).unwrap();
                    let text = format!("message {i}");
                    let envelope = shield.encrypt_text(&text, Some(&own)).await.unwrap();
                    assert_eq!(shield.decrypt_text(&envelope, Some(&own)).await.unwrap(), text);
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }
    }

    #[test]
    fn test_shield_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CryptoShield>();
    }
}
