//! Colored console output
//!
//! `colored` honors NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use std::fmt::Display;

use colored::Colorize;

use crate::cli::report::rule;

/// Red bold `error:` line on stderr.
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Yellow `Warning:` line on stderr.
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

pub fn action(label: &str, msg: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Section title between two `=` rules.
pub fn banner(title: &(impl Display + ?Sized)) {
    println!("\n{}", rule('='));
    header(&format!("  {title}"));
    println!("{}", rule('='));
}

pub fn detail(msg: &(impl Display + ?Sized)) {
    println!("  {}", msg);
}

/// Uncolored report text.
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
