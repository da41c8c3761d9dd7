//! Shared CLI output helpers.
//!
//! Everything is written to stdout; logs own stderr. Color scheme
//! (respects NO_COLOR and non-terminal stdout):
//! - Red: error prefix

use console::style;

/// Check if color output is enabled for stdout.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Print an error message.
///
/// Example: `Error: local.properties not found.`
pub fn error(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("Error:").red().bold(), msg);
    } else {
        println!("Error: {}", msg);
    }
}

/// Print raw text with no decoration.
pub fn data(msg: &str) {
    println!("{}", msg);
}
