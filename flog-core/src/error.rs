use thiserror::Error;

/// Failure of a single record, from rendering the message to writing the file.
///
/// The logger never hands this to its callers: it is reported on the
/// fallback channel by [`report_failure`](crate::report_failure) and the
/// emit call returns normally.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error("Opening log file failed! ({0})")]
    Open(#[source] std::io::Error),
    #[error("Writing to log file failed! ({0})")]
    Write(#[source] std::io::Error),
    #[error("Formatting log message failed! (a Display implementation returned an error)")]
    Format(#[source] std::fmt::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trace level `{0}`, expected one of debug, info, warning, error, fatal")]
pub struct ParseLevelError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("line does not match `[timestamp][level][caller][message]`")]
    Malformed,
    #[error("invalid RFC 3339 timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error(transparent)]
    Level(#[from] ParseLevelError),
}
