use std::fmt;

use crate::colour::colour_level;
use crate::level::Level;
use crate::time::wall_clock_stamp;

/// Visible width of the bracketed severity tag.
const TAG_WIDTH: usize = 8;

/// Leveled console logger.
///
/// Constructed explicitly and owned by the embedding application; `level` is
/// plain data and may be reassigned at any time, taking effect on the next
/// call.
///
/// ```
/// use sprig::Logger;
///
/// let mut log = Logger::default();
/// log.info("starting up");
/// log.level = "debug".to_string();
/// log.debug(format_args!("loaded {} entries", 3));
/// ```
pub struct Logger {
    /// Name of the minimum level to display. An unrecognized name disables
    /// filtering and every message is shown.
    pub level: String,
}

impl Logger {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }

    /// Whether a message at `level` passes the configured minimum.
    ///
    /// Exposed so callers can skip building expensive messages that would
    /// only be dropped.
    pub fn enabled(&self, level: Level) -> bool {
        match Level::from_name(&self.level) {
            Some(min) => level.rank() <= min.rank(),
            None => true,
        }
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.emit(Level::Error, &msg);
    }

    pub fn warn(&self, msg: impl fmt::Display) {
        self.emit(Level::Warn, &msg);
    }

    pub fn info(&self, msg: impl fmt::Display) {
        self.emit(Level::Info, &msg);
    }

    pub fn debug(&self, msg: impl fmt::Display) {
        self.emit(Level::Debug, &msg);
    }

    fn emit(&self, level: Level, msg: &dyn fmt::Display) {
        if self.enabled(level) {
            println!("{}", self.format_line(level, msg));
        }
    }

    fn format_line(&self, level: Level, msg: &dyn fmt::Display) -> String {
        let stamp = wall_clock_stamp();
        let tag = colour_level(level, &padded_tag(level));
        format!("[{stamp}] {tag} {msg}")
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("info")
    }
}

/// `[name]` padded with spaces to the fixed tag width.
fn padded_tag(level: Level) -> String {
    format!("{:<width$}", format!("[{}]", level.as_str()), width = TAG_WIDTH)
}
