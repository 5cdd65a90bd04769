#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use flog::{Level, Logger, Record};

pub fn test_path(name: &str) -> PathBuf {
    PathBuf::from(format!("/tmp/flog_test_{name}_{}.log", uuid::Uuid::new_v4()))
}

pub fn read_records(path: &Path) -> Vec<Record> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| Record::parse(line).unwrap_or_else(|e| panic!("{e}: {line:?}")))
        .collect()
}

/// Calls the plain form of `level` on `logger`. `Fatal` is left out since it exits.
pub fn emit(logger: &Logger, level: Level, message: &str) {
    match level {
        Level::Debug => logger.debug(&[&message]),
        Level::Info => logger.info(&[&message]),
        Level::Warning => logger.warning(&[&message]),
        Level::Error => logger.error(&[&message]),
        Level::Fatal => unreachable!("fatal exits the process"),
    }
}
