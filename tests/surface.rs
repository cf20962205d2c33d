use sprig::colour::{GREEN, RESET};
use sprig::{Level, Logger, pad, pad_with, visible_width};

#[test]
fn logger_filters_by_assigned_level() {
    let mut log = Logger::default();
    assert!(log.enabled(Level::Info));
    assert!(!log.enabled(Level::Debug));

    log.level = "error".to_string();
    assert!(log.enabled(Level::Error));
    assert!(!log.enabled(Level::Debug));

    log.level = "debug".to_string();
    assert!(log.enabled(Level::Debug));
}

#[test]
fn logging_does_not_panic() {
    let log = Logger::default();
    log.error("error message");
    log.warn(format_args!("warn {}", 1));
    log.info("info message");
    log.debug("filtered out");
}

#[test]
fn padding_matches_documented_examples() {
    assert_eq!(pad("abc", 5, false), "abc00");
    assert_eq!(pad("abc", 5, true), "00abc");
}

#[test]
fn coloured_input_pads_like_its_plain_text() {
    let plain = pad("ab", 5, false);
    let coloured = pad(format!("{GREEN}ab{RESET}"), 5, false);
    assert_eq!(visible_width(&plain), visible_width(&coloured));
    assert_eq!(coloured.replace(GREEN, "").replace(RESET, ""), plain);
}

#[test]
fn repadding_a_full_field_changes_nothing_visible() {
    let once = pad("abc", 5, false);
    let twice = pad(&once, 5, false);
    assert_eq!(twice, once);
}

#[test]
fn space_fill_right_align() {
    assert_eq!(pad_with("7", 3, true, ' '), "  7");
}
