//! Terminal display module
//!
//! Markdown output with automatic TTY and NO_COLOR handling.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
