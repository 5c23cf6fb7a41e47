use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cryptoshield::config::{APP_NAME, DEFAULT_ITERATIONS, DEFAULT_SALT_LENGTH, SECRET_ENV};
use cryptoshield::{Algorithm, Config, CryptoShield, Encoding, Framing, HashAlgorithm, Operation};
use tokio::io::AsyncReadExt;
use tracing::Level;

use crate::ui::display::{show_success, show_text};
use crate::ui::prompt::{prompt_decryption_secret, prompt_encryption_secret};

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a string and print the envelope.
    EncryptText {
        /// Text to encrypt; read from stdin when omitted.
        text: Option<String>,
    },

    /// Decrypt an envelope string and print the plaintext.
    DecryptText {
        /// Envelope text; read from stdin when omitted.
        envelope: Option<String>,
    },

    /// Encrypt a file, in place unless an output is given.
    EncryptFile {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a file, in place unless an output is given.
    DecryptFile {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    fn operation(&self) -> Operation {
        match self {
            Self::EncryptText { .. } => Operation::EncryptText,
            Self::DecryptText { .. } => Operation::DecryptText,
            Self::EncryptFile { .. } => Operation::EncryptFile,
            Self::DecryptFile { .. } => Operation::DecryptFile,
        }
    }
}

/// Envelope parameters. Both sides of an exchange must use the same values.
#[derive(Args)]
pub struct Options {
    #[arg(long, global = true, default_value_t = Algorithm::default())]
    algorithm: Algorithm,

    #[arg(long, global = true, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Defaults to the key size of the algorithm.
    #[arg(long, global = true)]
    key_length: Option<usize>,

    /// Defaults to the algorithm's standard nonce size.
    #[arg(long, global = true)]
    iv_length: Option<usize>,

    #[arg(long, global = true)]
    tag_length: Option<usize>,

    #[arg(long, global = true, default_value_t = DEFAULT_SALT_LENGTH)]
    salt_length: usize,

    /// Text encoding of envelopes.
    #[arg(long, global = true, default_value_t = Encoding::Hex)]
    encoding: Encoding,

    /// Text encoding of decrypted text.
    #[arg(long, global = true, default_value_t = Encoding::Utf8)]
    decoding: Encoding,

    /// PBKDF2 HMAC hash.
    #[arg(long, global = true, default_value_t = HashAlgorithm::default())]
    hash: HashAlgorithm,

    #[arg(long, global = true, default_value_t = Framing::default())]
    framing: Framing,

    /// Prompted for when neither the flag nor the environment variable is set.
    #[arg(short, long, global = true, env = SECRET_ENV, hide_env_values = true)]
    secret: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Options {
    fn config(&self) -> Result<Config> {
        let iv_length = self.iv_length.unwrap_or_else(|| self.algorithm.default_iv_length());

        let mut builder = Config::builder()
            .algorithm(self.algorithm)
            .iterations(self.iterations)
            .iv_length(iv_length)
            .salt_length(self.salt_length)
            .encoding(self.encoding)
            .decoding(self.decoding)
            .hash(self.hash)
            .framing(self.framing);

        if let Some(key_length) = self.key_length {
            builder = builder.key_length(key_length);
        }

        if let Some(tag_length) = self.tag_length {
            builder = builder.tag_length(tag_length);
        }

        builder.build().context("invalid configuration")
    }
}

#[derive(Parser)]
#[command(name = "cryptoshield", version = "26.1.0", about = "Encrypt strings and files with a password using AES-GCM or ChaCha20-Poly1305.")]
pub struct App {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: Options,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();

        let level = if app.options.verbose { Level::DEBUG } else { Level::WARN };
        let subscriber = tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(app)
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.options.config()?;
        let operation = self.command.operation();

        let secret = match self.options.secret {
            Some(secret) => secret,
            None if operation.is_encryption() => prompt_encryption_secret()?,
            None => prompt_decryption_secret()?,
        };

        let shield = CryptoShield::with_secret(config, &secret).context("invalid secret")?;
        tracing::debug!(app = APP_NAME, %operation, "starting");

        match self.command {
            Commands::EncryptText { text } => {
                let text = Self::text_or_stdin(text).await?;
                show_text(&shield.encrypt_text(&text, None).await?);
            }
            Commands::DecryptText { envelope } => {
                let envelope = Self::text_or_stdin(envelope).await?;
                show_text(&shield.decrypt_text(&envelope, None).await?);
            }
            Commands::EncryptFile { input, output } => {
                let written = shield.encrypt_file(&input, output.as_deref(), None).await.with_context(|| format!("cannot encrypt {}", input.display()))?;
                show_success(operation, &written);
            }
            Commands::DecryptFile { input, output } => {
                let written = shield.decrypt_file(&input, output.as_deref(), None).await.with_context(|| format!("cannot decrypt {}", input.display()))?;
                show_success(operation, &written);
            }
        }

        Ok(())
    }

    /// Uses the argument, or reads all of stdin without its final line break.
    async fn text_or_stdin(text: Option<String>) -> Result<String> {
        if let Some(text) = text {
            return Ok(text);
        }

        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await.context("failed to read stdin")?;

        let trimmed = buffer.strip_suffix('\n').map_or(buffer.as_str(), |s| s.strip_suffix('\r').unwrap_or(s));
        Ok(trimmed.to_owned())
    }
}
