//! Terminal output for the final task status.

use owo_colors::OwoColorize;

pub fn format_error(text: &str) -> String {
    format!("{}", text.red())
}

pub fn eprint_error(text: &str) {
    eprintln!("{}", format_error(text));
}
