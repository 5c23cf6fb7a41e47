//! User interface components for terminal interaction.
//!
//! # Modules
//!
//! - [`display`]: success lines and command output
//! - [`prompt`]: masked secret entry

pub mod display;
pub mod prompt;
