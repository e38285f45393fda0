use colored::*;
use std::path::Path;

/// Display the session greeting
pub fn print_greeting(greeting: &str) {
    println!("{}", greeting.cyan());
}

/// Display an assistant reply
pub fn print_response(response: &str) {
    for line in response.lines() {
        println!("{}", line.bright_blue());
    }
}

/// Display an error message on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Confirm where the session history was archived
pub fn print_saved(path: &Path) {
    println!(
        "{}",
        format!("✅ Chat history saved to {}", path.display()).green()
    );
}
