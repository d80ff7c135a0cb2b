//! Color support detection

use std::io::IsTerminal;

/// Whether stdout should get styled output
///
/// `NO_COLOR` wins over everything, then `CLICOLOR_FORCE`, then `CLICOLOR=0`,
/// and finally TTY detection.
pub fn should_use_colors() -> bool {
    colors_enabled(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("CLICOLOR_FORCE").ok().as_deref(),
        std::env::var("CLICOLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

fn colors_enabled(
    no_color: bool,
    clicolor_force: Option<&str>,
    clicolor: Option<&str>,
    is_tty: bool,
) -> bool {
    if no_color {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    is_tty
}
