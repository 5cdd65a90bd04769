//! # flog-core
//! Core utilities for flog - trace levels, the record format and the per-call file appender.

mod error;
mod level;
mod log_writer;
mod record;
mod utils;

pub use error::{AppendError, ParseLevelError, ParseRecordError};
pub use level::{LEVEL_WIDTH, Level};
pub use log_writer::{FILE_MODE, LogFile};
pub use record::{Record, format_record, single_line};
pub use utils::{FALLBACK_PREFIX, Joined, render, report_failure};
