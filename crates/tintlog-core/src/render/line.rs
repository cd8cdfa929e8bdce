//! Structural content of one log line, independent of styling

use chrono::{SecondsFormat, Utc};

use crate::level::LogLevel;

/// Which part of the line a segment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    Level(LogLevel),
    Category,
    /// The caller's text, preceded by the `": "` separator when rendered
    Message,
}

/// One styled unit of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub field: Field,
    pub content: String,
}

impl Segment {
    fn new(field: Field, content: impl Into<String>) -> Self {
        Self {
            field,
            content: content.into(),
        }
    }
}

/// Ordered segments of a line
///
/// Disabled fields are never pushed, so renderers only see what will be
/// printed and a placeholder can never exist without its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    segments: Vec<Segment>,
}

impl LogLine {
    /// Build a line
    ///
    /// `timestamp` is `None` when timestamps are disabled; `level` is `None`
    /// when the level column is disabled.
    pub fn new(timestamp: Option<String>, level: Option<LogLevel>, category: &str, text: &str) -> Self {
        let mut segments = Vec::with_capacity(4);

        if let Some(timestamp) = timestamp {
            segments.push(Segment::new(Field::Timestamp, format!("{} ", timestamp)));
        }

        if let Some(level) = level {
            // INFO and WARN are one character short of DEBUG/ERROR
            let pad = matches!(level, LogLevel::Info | LogLevel::Warn);
            let content = format!("[{}]{} ", level, if pad { " " } else { "" });
            segments.push(Segment::new(Field::Level(level), content));
        }

        segments.push(Segment::new(Field::Category, category));
        segments.push(Segment::new(Field::Message, text));

        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Unformatted variant, as written to the file sink
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.field == Field::Message {
                out.push_str(": ");
            }
            out.push_str(&segment.content);
        }
        out
    }
}

/// Current UTC time as ISO-8601 with milliseconds, e.g. `2024-05-01T12:00:00.000Z`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_padding() {
        let cases = [
            (LogLevel::Debug, "[DEBUG] Net: x"),
            (LogLevel::Info, "[INFO]  Net: x"),
            (LogLevel::Warn, "[WARN]  Net: x"),
            (LogLevel::Error, "[ERROR] Net: x"),
        ];
        for (level, expected) in cases {
            assert_eq!(LogLine::new(None, Some(level), "Net", "x").plain(), expected);
        }
    }

    #[test]
    fn test_disabled_fields_are_absent() {
        let line = LogLine::new(None, None, "Net", "up");
        assert_eq!(line.segments().len(), 2);
        assert_eq!(line.plain(), "Net: up");

        let line = LogLine::new(Some("T".to_string()), None, "Net", "up");
        assert_eq!(line.segments()[0].field, Field::Timestamp);
        assert_eq!(line.plain(), "T Net: up");
    }

    #[test]
    fn test_full_layout() {
        let line = LogLine::new(
            Some("2024-05-01T12:00:00.000Z".to_string()),
            Some(LogLevel::Error),
            "Db",
            "lost connection",
        );
        assert_eq!(line.plain(), "2024-05-01T12:00:00.000Z [ERROR] Db: lost connection");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-05-01T12:00:00.000Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
