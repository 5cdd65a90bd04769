use std::{
    fmt::{Arguments, Display},
    panic::Location,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use chrono::Local;
use flog_core::{AppendError, Joined, Level, LogFile, format_record, render, report_failure};

/// File of [`Logger::default`], and of the global logger until [`crate::init_global`] is called.
pub const DEFAULT_FILENAME: &str = "default.log";

/// Leveled logger appending one record per accepted call to a single file.
///
/// The file is opened, written and closed under the logger's lock on every
/// call, so concurrent records never interleave and no descriptor outlives a
/// call. Failures to write are reported on stderr and never reach the caller.
#[derive(Debug)]
pub struct Logger {
    file: LogFile,
    level: Level,
    mutex: Mutex<()>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_FILENAME, Level::Debug)
    }
}

impl Logger {
    pub fn new<P: AsRef<Path>>(filename: P, level: Level) -> Self {
        Self {
            file: LogFile::new(filename),
            level,
            mutex: Mutex::new(()),
        }
    }

    pub fn filename(&self) -> &Path {
        self.file.path()
    }

    /// Threshold below which calls are dropped.
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Writes `message` at `level`, tagging the record with the caller's `file:line`.
    ///
    /// A `Fatal` record exits the process with status 1 once written.
    #[track_caller]
    pub fn log(&self, level: Level, message: &dyn Display) {
        if !self.enabled(level) {
            return;
        }
        let caller = Location::caller();
        self.log_from(level, &format!("{}:{}", caller.file(), caller.line()), message);
    }

    /// Like [`Logger::log`] with an explicit caller field.
    pub fn log_from(&self, level: Level, caller: &str, message: &dyn Display) {
        if !self.enabled(level) {
            return;
        }
        if let Err(err) = self.write(level, caller, message) {
            report_failure(&err);
        }
        if level == Level::Fatal {
            std::process::exit(1);
        }
    }

    fn write(
        &self,
        level: Level,
        caller: &str,
        message: &dyn Display,
    ) -> Result<(), AppendError> {
        // The guarded state is only the file path, a poisoned lock is still usable.
        let _guard = self.mutex.lock().unwrap_or_else(PoisonError::into_inner);
        let message = render(message)?;
        let record = format_record(&Local::now(), level, caller, &message);
        self.file.append(&record)
    }

    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.log(Level::Debug, &Joined(values));
    }

    #[track_caller]
    pub fn debugf(&self, args: Arguments<'_>) {
        self.log(Level::Debug, &args);
    }

    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.log(Level::Info, &Joined(values));
    }

    #[track_caller]
    pub fn infof(&self, args: Arguments<'_>) {
        self.log(Level::Info, &args);
    }

    #[track_caller]
    pub fn warning(&self, values: &[&dyn Display]) {
        self.log(Level::Warning, &Joined(values));
    }

    #[track_caller]
    pub fn warningf(&self, args: Arguments<'_>) {
        self.log(Level::Warning, &args);
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.log(Level::Error, &Joined(values));
    }

    #[track_caller]
    pub fn errorf(&self, args: Arguments<'_>) {
        self.log(Level::Error, &args);
    }

    /// Writes a `Fatal` record then exits the process with status 1,
    /// whether or not the write succeeded.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.log(Level::Fatal, &Joined(values));
        std::process::exit(1)
    }

    /// Formatted form of [`Logger::fatal`].
    #[track_caller]
    pub fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.log(Level::Fatal, &args);
        std::process::exit(1)
    }
}

/// Builder for configuring a [`Logger`].
pub struct ConfigBuilder {
    log_file: Option<PathBuf>,
    log_level: Level,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: Level::Debug,
        }
    }
}

impl ConfigBuilder {
    /// Sets the log file.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            log_file: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Maybe sets the log file, `None` falls back to [`DEFAULT_FILENAME`].
    pub fn maybe_with_log_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        Self {
            log_file: path.map(|p| p.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Sets the minimum level written to the file.
    pub fn with_level(self, level: Level) -> Self {
        Self {
            log_level: level,
            ..self
        }
    }
    pub fn build(self) -> Logger {
        let Self {
            log_file,
            log_level,
        } = self;
        match log_file {
            Some(path) => Logger::new(path, log_level),
            None => Logger::new(DEFAULT_FILENAME, log_level),
        }
    }
    /// Builds the logger and installs it as the global logger.
    pub fn init_global(self) -> std::sync::Arc<Logger> {
        crate::init_global(self.build())
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flog_core::Record;
    use std::fs;

    fn test_path(name: &str) -> PathBuf {
        PathBuf::from(format!("/tmp/flog_test_{name}_{}.log", uuid::Uuid::new_v4()))
    }

    fn read_records(path: &Path) -> Vec<Record> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| Record::parse(line).unwrap())
            .collect()
    }

    #[test]
    fn test_default_logger() {
        let logger = Logger::default();
        assert_eq!(logger.filename(), Path::new("default.log"));
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_config_builder() {
        let logger = logger_config()
            .with_log_file("/tmp/app.log")
            .with_level(Level::Error)
            .build();
        assert_eq!(logger.filename(), Path::new("/tmp/app.log"));
        assert_eq!(logger.level(), Level::Error);

        let logger = logger_config().maybe_with_log_file(None::<&str>).build();
        assert_eq!(logger.filename(), Path::new(DEFAULT_FILENAME));
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_plain_and_formatted_forms() {
        let path = test_path("forms");
        let logger = Logger::new(&path, Level::Debug);
        logger.debug(&[&"a", &1, &2.5]);
        logger.infof(format_args!("{} + {} = {}", 1, 1, 2));
        logger.warning(&[]);
        logger.errorf(format_args!("{:>5}|{:.2}", "x", 1.0));
        let records = read_records(&path);
        let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["a, 1, 2.5", "1 + 1 = 2", "", "    x|1.00"]);
        let levels: Vec<_> = records.iter().map(|r| r.level).collect();
        assert_eq!(levels, [Level::Debug, Level::Info, Level::Warning, Level::Error]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_caller_is_call_site() {
        let path = test_path("caller");
        let logger = Logger::new(&path, Level::Debug);
        let line = line!() + 1;
        logger.info(&[&"here"]);
        let records = read_records(&path);
        assert_eq!(records[0].caller, format!("{}:{line}", file!()));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_log_from_uses_given_caller() {
        let path = test_path("log_from");
        let logger = Logger::new(&path, Level::Info);
        logger.log_from(Level::Debug, "skipped", &"nothing");
        logger.log_from(Level::Info, "worker", &"started");
        let records = read_records(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].caller, "worker");
        assert_eq!(records[0].message, "started");
        fs::remove_file(&path).ok();
    }

    struct Failing;

    impl Display for Failing {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn test_failing_display_is_not_propagated() {
        let path = test_path("failing_display");
        let logger = Logger::new(&path, Level::Debug);
        logger.info(&[&"before", &Failing]);
        logger.errorf(format_args!("{}", Failing));
        assert!(!path.exists());
        logger.warning(&[&"after"]);
        let records = read_records(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "after");
        assert!(!logger.mutex.is_poisoned());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_poisoned_lock_still_logs() {
        let path = test_path("poison");
        let logger = std::sync::Arc::new(Logger::new(&path, Level::Debug));
        let poisoner = std::sync::Arc::clone(&logger);
        std::thread::spawn(move || {
            let _guard = poisoner.mutex.lock().unwrap();
            panic!("poison the logger lock");
        })
        .join()
        .unwrap_err();
        assert!(logger.mutex.is_poisoned());
        logger.info(&[&"still alive"]);
        assert_eq!(read_records(&path)[0].message, "still alive");
        fs::remove_file(&path).ok();
    }
}
