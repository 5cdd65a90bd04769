use std::{
    fmt::{Arguments, Display},
    sync::{
        Arc, LazyLock, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use flog_core::Level;
use log::Log;

use crate::Logger;

/// Set once the `log` facade routes its records to the global logger.
static FACADE_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Process-wide logger, built with [`Logger::default`] on first use.
static GLOBAL_LOGGER: LazyLock<RwLock<Arc<Logger>>> = LazyLock::new(|| {
    let logger = Logger::default();
    if log::set_boxed_logger(Box::new(FacadeLogger)).is_ok() {
        FACADE_INSTALLED.store(true, Ordering::Release);
        log::set_max_level(logger.level().to_level_filter());
    }
    RwLock::new(Arc::new(logger))
});

/// Bridges the `log` facade to the global logger.
struct FacadeLogger;

impl Log for FacadeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        global().enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        let logger = global();
        if !logger.enabled(level) {
            return;
        }
        let caller = match (record.file(), record.line()) {
            (Some(file), Some(line)) => format!("{file}:{line}"),
            _ => record.module_path().unwrap_or(record.target()).to_string(),
        };
        logger.log_from(level, &caller, record.args());
    }

    fn flush(&self) {}
}

/// Replaces the global logger, returning the installed instance.
pub fn init_global(logger: Logger) -> Arc<Logger> {
    let logger = Arc::new(logger);
    let mut global = GLOBAL_LOGGER.write().unwrap_or_else(PoisonError::into_inner);
    *global = Arc::clone(&logger);
    if FACADE_INSTALLED.load(Ordering::Acquire) {
        log::set_max_level(logger.level().to_level_filter());
    }
    logger
}

/// Current global logger.
pub fn global() -> Arc<Logger> {
    Arc::clone(&GLOBAL_LOGGER.read().unwrap_or_else(PoisonError::into_inner))
}

#[track_caller]
pub fn debug(values: &[&dyn Display]) {
    global().debug(values);
}

#[track_caller]
pub fn debugf(args: Arguments<'_>) {
    global().debugf(args);
}

#[track_caller]
pub fn info(values: &[&dyn Display]) {
    global().info(values);
}

#[track_caller]
pub fn infof(args: Arguments<'_>) {
    global().infof(args);
}

#[track_caller]
pub fn warning(values: &[&dyn Display]) {
    global().warning(values);
}

#[track_caller]
pub fn warningf(args: Arguments<'_>) {
    global().warningf(args);
}

#[track_caller]
pub fn error(values: &[&dyn Display]) {
    global().error(values);
}

#[track_caller]
pub fn errorf(args: Arguments<'_>) {
    global().errorf(args);
}

#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> ! {
    global().fatal(values)
}

#[track_caller]
pub fn fatalf(args: Arguments<'_>) -> ! {
    global().fatalf(args)
}
