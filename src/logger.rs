// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::fmt::Arguments;
use std::io::{Result, Stderr, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// The warning level. Designates hazardous situations.
    Warning = 5,
    /// The info level. Designates useful information.
    Info = 7,
    /// The debug level. Designates lower priority information and for debugging.
    Debug = 8,
}

/// Line based logger that writes all messages up to the given level.
pub struct Logger<W: Write> {
    level: Level,
    writer: W,
}

impl<W: Write> Logger<W> {
    pub fn new(level: Level, writer: W) -> Self {
        Self { level, writer }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn log(&mut self, level: Level, args: Arguments<'_>) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.writer.write_fmt(args)?;
        self.writer.write_all(b"\n")
    }
}

impl Logger<Stderr> {
    pub fn new_stderr(level: Level) -> Self {
        Self::new(level, std::io::stderr())
    }
}

impl Logger<Vec<u8>> {
    pub fn new_vec(level: Level) -> Self {
        Self::new(level, Vec::new())
    }

    pub fn get_logs(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::logger::Level::Warning, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::logger::Level::Info, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::logger::Level::Debug, format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_filters_by_level() {
        let mut logger = Logger::new_vec(Level::Info);
        warn!(logger, "careful").unwrap();
        info!(logger, "value {}", 42).unwrap();
        debug!(logger, "hidden").unwrap();
        assert_eq!(logger.get_logs(), "careful\nvalue 42\n");
    }

    #[test]
    fn test_logger_warning_only() {
        let mut logger = Logger::new_vec(Level::Warning);
        info!(logger, "hidden").unwrap();
        assert_eq!(logger.get_logs(), "");
        assert!(!logger.enabled(Level::Debug));
        assert_eq!(logger.level(), Level::Warning);
    }
}
