use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthChar;

/// Compact relative age for a feed row: "now", "5m", "3h", "2d", "4w".
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{}m", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d", elapsed.num_days())
    } else {
        format!("{}w", elapsed.num_days() / 7)
    }
}

/// Truncate a string to a display width, appending an ellipsis when cut.
/// Width-aware so wide glyphs don't overflow the column.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();

        let cases = [
            (now, "now"),
            (now - chrono::Duration::minutes(5), "5m"),
            (now - chrono::Duration::hours(3), "3h"),
            (now - chrono::Duration::days(2), "2d"),
            (now - chrono::Duration::days(30), "4w"),
        ];
        for (ts, expected) in cases {
            assert_eq!(relative_time(ts, now), expected);
        }
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let out = truncate_to_width("a long display name", 8);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 8);
    }
}
