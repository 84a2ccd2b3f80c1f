//! Status lines for the terminal: an icon, a colour, and the message.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        };
        colour.bold()
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{} {}", level.style().paint(level.icon()), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section header, e.g. above a report table.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}", Colour::Blue.bold().paint(format!("=== {msg} ===")));
}
