//! brandboard main entrypoint.

use brandboard::run;
use brandboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
