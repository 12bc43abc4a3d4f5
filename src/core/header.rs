//! Header rendering: timestamp, level marker, name and caller location
//!
//! Every emitted line starts with
//!
//! ```text
//! YYYY/MM/DD hh:mm:ss.mmm [L][name] file:line
//! ```
//!
//! where the `[name] ` and `file:line ` segments are only present when
//! configured. Fields are written straight into the caller's buffer.

use super::level::Level;
use chrono::NaiveDateTime;
use std::fmt::{self, Write as _};
use std::panic::Location;

/// chrono format string of the header timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Source location of the code that issued a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl Caller {
    /// Marker written when the location of a call is not known
    pub const UNKNOWN: Caller = Caller {
        file: "???",
        line: 0,
    };

    /// Location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    #[inline]
    pub fn here() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Caller {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Style switches that do not change which fields are written
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderStyle {
    /// Wrap the level marker in ANSI color codes
    pub colors: bool,
}

/// Appends formatted text to a byte buffer
pub(crate) struct ByteWriter<'a>(pub(crate) &'a mut Vec<u8>);

impl fmt::Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Append the header for one line to `buf`.
///
/// `buf` is appended to, never cleared. An empty `name` writes no tag.
pub fn format_header(
    buf: &mut Vec<u8>,
    now: &NaiveDateTime,
    level: Level,
    name: &str,
    caller: Option<Caller>,
    style: HeaderStyle,
) -> fmt::Result {
    format_timestamp(buf, now)?;
    buf.push(b' ');

    push_marker(buf, level, style);

    if !name.is_empty() {
        buf.push(b'[');
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b"] ");
    }

    if let Some(caller) = caller {
        write!(ByteWriter(buf), "{}:{} ", caller.file, caller.line)?;
    }
    Ok(())
}

/// `YYYY/MM/DD hh:mm:ss.mmm`, see [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(buf: &mut Vec<u8>, now: &NaiveDateTime) -> fmt::Result {
    write!(ByteWriter(buf), "{}", now.format(TIMESTAMP_FORMAT))
}

#[cfg(feature = "console")]
fn push_marker(buf: &mut Vec<u8>, level: Level, style: HeaderStyle) {
    use colored::Colorize;

    if style.colors {
        let colored = level.marker().color(level.color_code()).to_string();
        buf.extend_from_slice(colored.as_bytes());
    } else {
        buf.extend_from_slice(level.marker().as_bytes());
    }
}

#[cfg(not(feature = "console"))]
fn push_marker(buf: &mut Vec<u8>, level: Level, _style: HeaderStyle) {
    buf.extend_from_slice(level.marker().as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_milli_opt(9, 5, 3, 7))
            .expect("valid datetime")
    }

    fn render(level: Level, name: &str, caller: Option<Caller>) -> String {
        let mut buf = Vec::new();
        format_header(
            &mut buf,
            &fixed_datetime(),
            level,
            name,
            caller,
            HeaderStyle::default(),
        )
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_timestamp_is_zero_padded() {
        let mut buf = Vec::new();
        format_timestamp(&mut buf, &fixed_datetime()).unwrap();
        assert_eq!(buf, b"2025/01/08 09:05:03.007");
    }

    #[test]
    fn test_timestamp_upper_bounds() {
        let late = NaiveDate::from_ymd_opt(2024, 12, 31)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .expect("valid datetime");
        let mut buf = Vec::new();
        format_timestamp(&mut buf, &late).unwrap();
        assert_eq!(buf, b"2024/12/31 23:59:59.999");
    }

    #[test]
    fn test_timestamp_parses_back() {
        let mut buf = Vec::new();
        format_timestamp(&mut buf, &fixed_datetime()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed = NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).unwrap();
        assert_eq!(parsed, fixed_datetime());
    }

    #[test]
    fn test_header_without_name_or_caller() {
        assert_eq!(render(Level::Info, "", None), "2025/01/08 09:05:03.007 [I]");
    }

    #[test]
    fn test_header_with_name() {
        assert_eq!(
            render(Level::Warning, "svc", None),
            "2025/01/08 09:05:03.007 [W][svc] "
        );
    }

    #[test]
    fn test_header_with_name_and_caller() {
        let caller = Caller {
            file: "src/main.rs",
            line: 42,
        };
        assert_eq!(
            render(Level::Debug, "db", Some(caller)),
            "2025/01/08 09:05:03.007 [D][db] src/main.rs:42 "
        );
    }

    #[test]
    fn test_unknown_caller_sentinel() {
        assert_eq!(
            render(Level::Error, "", Some(Caller::UNKNOWN)),
            "2025/01/08 09:05:03.007 [E]???:0 "
        );
    }

    #[test]
    fn test_header_appends_to_existing_buffer() {
        let mut buf = b"prefix|".to_vec();
        format_header(
            &mut buf,
            &fixed_datetime(),
            Level::Info,
            "",
            None,
            HeaderStyle::default(),
        )
        .unwrap();
        assert!(buf.starts_with(b"prefix|2025/01/08"));
    }

    #[test]
    fn test_caller_here_points_at_this_file() {
        let caller = Caller::here();
        assert!(caller.file.ends_with("header.rs"));
        assert!(caller.line > 0);
    }

    #[test]
    fn test_caller_line_is_not_padded() {
        let caller = Caller {
            file: "lib.rs",
            line: 7,
        };
        assert_eq!(
            render(Level::Info, "", Some(caller)),
            "2025/01/08 09:05:03.007 [I]lib.rs:7 "
        );
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colored_marker_wraps_ansi_codes() {
        colored::control::set_override(true);
        let mut buf = Vec::new();
        format_header(
            &mut buf,
            &fixed_datetime(),
            Level::Error,
            "",
            None,
            HeaderStyle { colors: true },
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("[E]"));
    }
}
