use std::fmt;
use std::iter;

use regex::Regex;

/// Default filler character. Zero matches the output shape callers already
/// depend on; anything else goes through [`pad_with`].
const DEFAULT_FILL: char = '0';

/// Strip ANSI colour-escape sequences (`ESC [ … m`) from a string.
fn strip_escapes(s: &str) -> String {
    let re = Regex::new(r"\x1b\[[^m]+m").unwrap();
    re.replace_all(s, "").to_string()
}

/// Visible character count of a string, escape sequences excluded.
///
/// Counts characters after escape stripping; makes no further claims about
/// display width of the remainder.
pub fn visible_width(s: &str) -> usize {
    strip_escapes(s).chars().count()
}

/// Pad `value` to `width` visible characters with zeroes.
pub fn pad(value: impl fmt::Display, width: usize, right_align: bool) -> String {
    pad_with(value, width, right_align, DEFAULT_FILL)
}

/// Pad `value` to `width` visible characters with `fill`.
///
/// All width arithmetic runs against the visible length: embedded escape
/// sequences are preserved in the output but never consume field width. A
/// value already at or past `width` visible characters gets an empty filler
/// segment and is truncated to the field.
pub fn pad_with(value: impl fmt::Display, width: usize, right_align: bool, fill: char) -> String {
    let s = value.to_string();
    let total = s.chars().count();
    let visible = visible_width(&s);

    // Escape characters ride along outside the visible budget.
    let body: String = s.chars().take(width + total - visible).collect();
    let filler: String = iter::repeat(fill)
        .take(width.saturating_sub(visible))
        .collect();

    if right_align {
        format!("{filler}{body}")
    } else {
        format!("{body}{filler}")
    }
}
