use chrono::{Duration, Local, Utc};

/// Current local wall-clock time rendered as UTC-style ISO-8601 with
/// milliseconds, e.g. `2026-08-06T14:03:07.123Z`.
///
/// The local UTC offset is folded into the instant before formatting, so the
/// `Z` suffix is a label only — the digits are local time. Consumers depend
/// on this exact shape; do not swap in a timezone-correct rendering.
pub fn wall_clock_stamp() -> String {
    let offset = Local::now().offset().local_minus_utc();
    let shifted = Utc::now() + Duration::seconds(i64::from(offset));
    shifted.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
