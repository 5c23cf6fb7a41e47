//! Display utilities for command results.

use std::path::Path;

use console::style;
use cryptoshield::Operation;

/// Prints the path a file operation wrote to.
pub fn show_success(operation: Operation, path: &Path) {
    let action = if operation.is_encryption() { "encrypted" } else { "decrypted" };

    eprintln!();
    eprintln!("{} {}", style("✓").green(), style(format!("File {action} successfully: {}", path.display())).bold());
}

/// Prints the result of a text operation on stdout so it can be piped.
pub fn show_text(text: &str) {
    println!("{text}");
}
