use chrono::{DateTime, FixedOffset, Offset, Utc};

pub const CONTENT_PREVIEW_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

/// Renders ISO-8601 timestamps the way an en-US locale prints a date-time,
/// e.g. `1/15/2024, 3:04:05 PM`, in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    offset: FixedOffset,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self { offset: Utc.fix() }
    }
}

impl TimestampFormat {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Offset given in minutes east of UTC. Out-of-range values fall back to UTC.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Unparseable input is returned verbatim.
    pub fn format(&self, raw: &str) -> String {
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(parsed) => parsed
                .with_timezone(&self.offset)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

/// First 100 characters plus `...`; the ellipsis is appended even to short text.
pub fn truncate_content(text: &str) -> String {
    let mut out: String = text.chars().take(CONTENT_PREVIEW_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Decodes the HTML entities the paginator puts into link labels so they can
/// be shown on a plain-text surface.
pub fn decode_label(label: &str) -> String {
    const ENTITIES: [(&str, &str); 8] = [
        ("&laquo;", "«"),
        ("&raquo;", "»"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&nbsp;", " "),
        ("&amp;", "&"),
    ];

    let mut out = String::with_capacity(label.len());
    let mut rest = label;
    'outer: while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        for (entity, text) in ENTITIES {
            if let Some(after) = tail.strip_prefix(entity) {
                out.push_str(text);
                rest = after;
                continue 'outer;
            }
        }
        out.push('&');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}
