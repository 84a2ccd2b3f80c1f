/// ANSI color helpers for terminal output.
use ansi_term::Colour;

/// Green for a window with messages, red for an empty one.
pub fn colour_for_presence(present: bool) -> Colour {
    if present { Colour::Green } else { Colour::Red }
}

/// Paint an already padded line in the presence colour.
pub fn colorize_presence(value: &str, present: bool) -> String {
    colour_for_presence(present).paint(value).to_string()
}
