use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use regex::Regex;

use crate::{error::ParseRecordError, level::Level};

static RECORD_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\[\]]+)\]\[([A-Za-z]+) *\]\[([^\[\]]*)\]\[(.*)\]$")
        .expect("record grammar is a valid regex")
});

/// Replaces every line break with a single space so a record spans exactly one line.
pub fn single_line(message: &str) -> String {
    message.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn sanitize_caller(caller: &str) -> String {
    single_line(caller).replace('[', "(").replace(']', ")")
}

/// Renders one newline-terminated record:
/// `[<RFC 3339 timestamp>][<padded level>][<caller>][<message>]\n`.
pub fn format_record<Tz>(
    timestamp: &DateTime<Tz>,
    level: Level,
    caller: &str,
    message: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let time = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    let caller = sanitize_caller(caller);
    let message = single_line(message);
    format!("[{time}][{level}][{caller}][{message}]\n")
}

/// A record read back from a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: DateTime<FixedOffset>,
    pub level: Level,
    pub caller: String,
    pub message: String,
}

impl Record {
    /// Parses one line of a log file, with or without its trailing newline.
    pub fn parse(line: &str) -> Result<Self, ParseRecordError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let captures = RECORD_GRAMMAR
            .captures(line)
            .ok_or(ParseRecordError::Malformed)?;
        Ok(Self {
            timestamp: DateTime::parse_from_rfc3339(&captures[1])?,
            level: captures[2].parse()?,
            caller: captures[3].to_string(),
            message: captures[4].to_string(),
        })
    }
}

impl FromStr for Record {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = format_record(&self.timestamp, self.level, &self.caller, &self.message);
        f.write_str(record.trim_end_matches('\n'))
    }
}
