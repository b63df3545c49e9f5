//! Operator-facing console lines

use std::fmt::Display;

use colored::Colorize;

pub fn emit_success_message(file_name: &str) -> String {
    format!(
        "{} configuration file {} is built successfully!",
        "✨".cyan(),
        file_name.cyan()
    )
}

pub fn emit_failure_message(file_name: &str, error: &dyn Display) -> String {
    format!(
        "{} configuration file {} failed to package:\n{}",
        "ERROR".red().bold(),
        file_name,
        error
    )
}

pub(crate) fn print_emit_success(file_name: &str) {
    println!("{}", emit_success_message(file_name));
}

pub(crate) fn print_emit_failure(file_name: &str, error: &dyn Display) {
    eprintln!("{}", emit_failure_message(file_name, error));
}
