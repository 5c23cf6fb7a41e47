//! Interactive secret entry.
//!
//! Encryption asks twice so a typo cannot lock the data away; decryption
//! asks once and lets authentication catch a wrong entry.

use anyhow::{Result, anyhow};
use inquire::{Password, PasswordDisplayMode, required};

pub fn prompt_encryption_secret() -> Result<String> {
    Password::new("Enter encryption secret:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(required!("secret must not be empty"))
        .with_custom_confirmation_message("Confirm secret:")
        .with_custom_confirmation_error_message("secrets do not match")
        .prompt()
        .map_err(|e| anyhow!("secret prompt failed: {e}"))
}

pub fn prompt_decryption_secret() -> Result<String> {
    Password::new("Enter decryption secret:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(required!("secret must not be empty"))
        .without_confirmation()
        .prompt()
        .map_err(|e| anyhow!("secret prompt failed: {e}"))
}
