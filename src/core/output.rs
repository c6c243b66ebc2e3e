//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for headings, bright_black for hints
//! - **Standardized spacing**: Newline before and after one-off messages

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Single-line error used inside an interactive session, where blank lines
/// would break up the transcript
pub fn format_session_error(message: &str) -> String {
    format!("{} {}", "✕ Error:".red(), message.white())
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Print already rendered lines
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
