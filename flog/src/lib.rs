//! # flog
//! Leveled, thread-safe logger appending one line per record to a file.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! flog = "0.1.0"
//! ```
//!
//! ```rust
//! use flog::{Level, Logger};
//!
//! let _ = std::fs::remove_file("/tmp/flog_doc_usage.log");
//! let logger = Logger::new("/tmp/flog_doc_usage.log", Level::Info);
//! logger.debug(&[&"below the threshold, never written"]);
//! logger.info(&[&"answer", &42]);
//! logger.warningf(format_args!("{} retries left", 3));
//!
//! let content = std::fs::read_to_string("/tmp/flog_doc_usage.log").unwrap();
//! let lines: Vec<_> = content.lines().collect();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[0].ends_with("[answer, 42]"));
//! assert!(lines[1].ends_with("[3 retries left]"));
//! ```
//!
//! Every record has the shape
//! `[<RFC 3339 timestamp>][<level, padded to 7>][<file:line of the caller>][<message>]`.
//! Line breaks inside the message are replaced by spaces, so a record is always one line,
//! and [`Record::parse`] reads it back.
//!
//! ## Macros
//! ```rust
//! use flog::{Level, Logger};
//!
//! let logger = Logger::new("/tmp/flog_doc_macros.log", Level::Debug);
//! let user = "alice";
//! flog::info!(logger, "login", user, 3);
//! flog::errorf!(logger, "login failed for {user} after {} attempts", 3);
//! ```
//!
//! ## Global logger
//! The global logger writes to `default.log` at `Debug` level until it is replaced.
//! It also receives the records of the `log` facade.
//!
//! ```rust
//! use flog::{Level, logger_config};
//!
//! let _ = std::fs::remove_file("/tmp/flog_doc_global.log");
//! logger_config()
//!     .with_log_file("/tmp/flog_doc_global.log")
//!     .with_level(Level::Warning)
//!     .init_global();
//!
//! flog::infof(format_args!("dropped"));
//! flog::warning(&[&"disk almost full", &"93%"]);
//! log::error!("written through the log facade");
//!
//! let content = std::fs::read_to_string("/tmp/flog_doc_global.log").unwrap();
//! assert_eq!(content.lines().count(), 2);
//! ```
//!
//! ## Fatal records
//! [`Logger::fatal`] and [`Logger::fatalf`] write their record then exit the
//! process with status 1.

mod global;
mod logger;

pub use flog_core::{Level, ParseLevelError, ParseRecordError, Record};
pub use global::{
    debug, debugf, error, errorf, fatal, fatalf, global, info, infof, init_global, warning,
    warningf,
};
pub use logger::{ConfigBuilder, DEFAULT_FILENAME, Logger, logger_config};

/// Logs values joined by `", "` at `Debug` level: `debug!(logger, a, b, ...)`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.debug(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
}

/// Logs a format string at `Debug` level: `debugf!(logger, "x = {}", x)`.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warning(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::core::format_args!($($arg)+))
    };
}

/// Logs values at `Fatal` level then exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.fatal(&[$(&$value as &dyn ::core::fmt::Display),+])
    };
}

/// Logs a format string at `Fatal` level then exits with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::core::format_args!($($arg)+))
    };
}
