use crate::level::Level;

/// ANSI escape codes for terminal colours.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

pub fn colour_for_level(level: Level) -> &'static str {
    match level {
        Level::Error => RED,
        Level::Warn => YELLOW,
        Level::Info => GREEN,
        Level::Debug => BLUE,
    }
}

/// Wrap a rendered tag in the level's colour and a reset.
pub fn colour_level(level: Level, tag: &str) -> String {
    format!("{}{}{}", colour_for_level(level), tag, RESET)
}
