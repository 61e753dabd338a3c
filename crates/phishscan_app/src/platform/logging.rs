//! Logging setup for the scanner binary.
//!
//! Stdout carries the scan results, so by default log records go to
//! `./phishscan.log` and never interleave with them.

use std::fs::File;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILENAME: &str = "./phishscan.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    /// Stderr, so records stay off the result stream.
    Terminal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// The `log` section of `phishscan.ron`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LogLevel,
}

pub fn initialize(settings: &LogSettings) {
    let loggers = build_loggers(settings);
    if loggers.is_empty() {
        return;
    }
    // A second init only happens in tests; the first logger wins.
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(settings: &LogSettings) -> Vec<Box<dyn SharedLogger>> {
    let level = LevelFilter::from(settings.level);
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if level == LevelFilter::Off {
        return loggers;
    }

    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            level,
            record_format(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        match File::create(LOG_FILENAME) {
            Ok(file) => loggers.push(WriteLogger::new(level, record_format(), file)),
            Err(err) => eprintln!("Warning: cannot create log file {LOG_FILENAME}: {err}"),
        }
    }
    loggers
}

fn record_format() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
