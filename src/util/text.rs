use std::borrow::Cow;

use chrono::{DateTime, Datelike, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns, Unicode-aware (CJK and
/// emoji count as 2, combining marks as 0).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit `max_width` terminal columns, appending "..."
/// when text was cut. Cuts on character boundaries using display width,
/// never byte counts, so CJK titles and emoji don't overflow the card.
///
/// Returns `Cow::Borrowed` when the string already fits. Widths of 3 or
/// less get plain character clipping without the ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    // No room for "text..." at these widths; clip characters only.
    let budget = if max_width <= ELLIPSIS_WIDTH {
        max_width
    } else {
        max_width - ELLIPSIS_WIDTH
    };

    let mut width = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        end = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS_WIDTH {
        Cow::Owned(s[..end].to_string())
    } else {
        Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
    }
}

/// Strip ASCII control characters and ANSI escape sequences from text the
/// news source controls. Article titles and descriptions are rendered raw
/// into the terminal; a crafted headline must not be able to move the
/// cursor or retitle the window. Tabs and newlines are replaced with
/// spaces since cards are single-line.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    let clean = s
        .chars()
        .all(|c| !c.is_control() && c != '\u{7f}');
    if clean {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\u{1b}' => {
                // Swallow the escape sequence: CSI until a final byte,
                // OSC until BEL or ST, otherwise just the ESC itself.
                match chars.peek() {
                    Some('[') => {
                        chars.next();
                        for d in chars.by_ref() {
                            if ('\u{40}'..='\u{7e}').contains(&d) {
                                break;
                            }
                        }
                    }
                    Some(']') => {
                        chars.next();
                        while let Some(d) = chars.next() {
                            if d == '\u{07}' {
                                break;
                            }
                            if d == '\u{1b}' {
                                if chars.peek() == Some(&'\\') {
                                    chars.next();
                                }
                                break;
                            }
                        }
                    }
                    _ => {}
                }
            }
            '\t' | '\n' | '\r' => out.push(' '),
            c if c.is_control() || c == '\u{7f}' => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Format a publish timestamp relative to `now`, compact enough for a
/// card's meta line: "just now", "42m", "7h", "yesterday", then a date.
pub fn relative_time(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = published else {
        return String::new();
    };

    let secs = (now - ts).num_seconds();

    // Future timestamps happen with skewed source clocks
    if secs < 60 {
        return "just now".to_string();
    }
    if secs < 3600 {
        return format!("{}m", secs / 60);
    }
    if secs < 86400 {
        return format!("{}h", secs / 3600);
    }
    if secs < 2 * 86400 {
        return "yesterday".to_string();
    }
    if ts.year() == now.year() {
        ts.format("%b %d").to_string()
    } else {
        ts.format("%b %d, %Y").to_string()
    }
}

/// Clean up a description as delivered by the source: drop the
/// "[+1234 chars]" tail the API appends to truncated content, bracketed
/// editorial markers, and "Read more" endings, then tidy whitespace.
pub fn clean_description(description: &str) -> String {
    let mut out = String::with_capacity(description.len());

    // Remove bracketed segments wholesale
    let mut depth = 0usize;
    for c in description.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if depth == 0 => out.push(c),
            _ => {}
        }
    }

    // Strip a trailing "Read more ..." fragment, case-insensitively
    let lower = out.to_lowercase();
    if let Some(pos) = lower.rfind("read more") {
        out.truncate(pos);
    }

    let trimmed = out.trim().trim_end_matches('…').trim();

    // Collapse runs of whitespace left behind by the removals
    let mut result = String::with_capacity(trimmed.len());
    let mut last_was_space = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
            }
            last_was_space = true;
        } else {
            result.push(c);
            last_was_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_fits_returns_borrowed() {
        let result = truncate_to_width("Short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Short");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_cjk_never_splits_columns() {
        // Each CJK char is 2 columns; max 7 leaves budget 4 -> two chars
        assert_eq!(truncate_to_width("你好世界", 7), "你好...");
        assert_eq!(truncate_to_width("你好", 10), "你好");
    }

    #[test]
    fn test_truncate_narrow_widths_clip_without_ellipsis() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Testing", 1), "T");
        assert_eq!(truncate_to_width("Testing", 3), "Tes");
        // CJK char doesn't fit in one column
        assert_eq!(truncate_to_width("你好", 1), "");
    }

    #[test]
    fn test_truncate_result_never_exceeds_width() {
        let inputs = ["Hello World", "你好世界测试", "Hi 🎉 there", "exact"];
        for s in inputs {
            for width in 0..20 {
                let out = truncate_to_width(s, width);
                assert!(
                    display_width(&out) <= width,
                    "{:?} at width {} produced {:?} ({} cols)",
                    s,
                    width,
                    out,
                    display_width(&out)
                );
            }
        }
    }

    #[test]
    fn test_sanitize_clean_text_is_borrowed() {
        let result = sanitize_for_display("A perfectly normal headline");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_strips_ansi_sequences() {
        assert_eq!(
            sanitize_for_display("\u{1b}[31mBreaking\u{1b}[0m news"),
            "Breaking news"
        );
        assert_eq!(
            sanitize_for_display("\u{1b}]0;evil title\u{07}story"),
            "story"
        );
    }

    #[test]
    fn test_sanitize_flattens_newlines() {
        assert_eq!(sanitize_for_display("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_sanitize_drops_control_chars() {
        assert_eq!(sanitize_for_display("he\u{00}llo\u{7f}"), "hello");
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = at(2024, 12, 20, 12, 0);
        assert_eq!(relative_time(None, now), "");
        assert_eq!(relative_time(Some(at(2024, 12, 20, 11, 59)), now), "just now");
        assert_eq!(relative_time(Some(at(2024, 12, 20, 11, 18)), now), "42m");
        assert_eq!(relative_time(Some(at(2024, 12, 20, 5, 0)), now), "7h");
        assert_eq!(relative_time(Some(at(2024, 12, 19, 10, 0)), now), "yesterday");
        assert_eq!(relative_time(Some(at(2024, 12, 15, 10, 0)), now), "Dec 15");
        assert_eq!(
            relative_time(Some(at(2023, 11, 2, 10, 0)), now),
            "Nov 02, 2023"
        );
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        let now = at(2024, 12, 20, 12, 0);
        assert_eq!(relative_time(Some(at(2024, 12, 20, 12, 30)), now), "just now");
    }

    #[test]
    fn test_clean_description_removes_chars_tail() {
        assert_eq!(
            clean_description("The quick summary of events [+2816 chars]"),
            "The quick summary of events"
        );
    }

    #[test]
    fn test_clean_description_removes_read_more() {
        assert_eq!(
            clean_description("Short teaser. Read More at the site"),
            "Short teaser."
        );
    }

    #[test]
    fn test_clean_description_collapses_whitespace() {
        assert_eq!(
            clean_description("Leading [note]  and   trailing …"),
            "Leading and trailing"
        );
    }

    #[test]
    fn test_clean_description_plain_text_unchanged() {
        assert_eq!(clean_description("Nothing to fix here."), "Nothing to fix here.");
    }
}
