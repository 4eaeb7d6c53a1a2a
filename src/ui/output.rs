//! Plain terminal rendering helpers.
//!
//! Everything goes to stdout except warnings, which go to stderr so that
//! `--fast` output stays pipeable.

use std::io::{self, Write};

/// Render a file list as ` - path` lines.
pub fn format_files(files: &[String]) -> String {
    files.iter().map(|f| format!(" - {f}\n")).collect()
}

pub fn show_files(files: &[String]) {
    print!("{}", format_files(files));
    let _ = io::stdout().flush();
}

pub fn show_heading(title: &str) {
    println!("\n{title}");
}

/// Write a `Warning: ...` line to `out`.
pub fn write_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "Warning: {message}")
}

pub fn show_warning(message: &str) {
    let _ = write_warning(&mut io::stderr().lock(), message);
}

pub fn show_success(message: &str) {
    println!("\n✓ {message}");
}
