//! Markdown terminal output using termimad

use termimad::crossterm::style::{Attribute, Color};
use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown styled when the terminal allows it, plain otherwise
pub fn print_markdown(markdown: &str) {
    let width = should_use_colors().then(|| termimad::terminal_size().0 as usize);
    println!("{}", render(markdown, width));
}

/// Text to print for `markdown`: styled to `width` columns, or plain for `None`
fn render(markdown: &str, width: Option<usize>) -> String {
    match width {
        Some(width) => skin().text(markdown, Some(width)).to_string(),
        None => markdown.to_string(),
    }
}

fn skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Color::Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.table.set_fg(Color::White);
    skin.bold.set_fg(Color::Green);
    skin.bold.add_attr(Attribute::Bold);

    skin
}
