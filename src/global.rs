//! # Process-Wide Logger
//!
//! The `om_*!` macros and the free functions below all go through one
//! [`Logger`] created on first use. Programs that want different startup
//! settings call [`init`] before anything logs, and [`shutdown`] once at the
//! end to release the log file.
//!
//! Code that prefers an explicitly owned instance can construct a
//! [`Logger`] directly and skip this module entirely.

use crate::config::LoggerConfig;
use crate::display::DisplaySettings;
use crate::error::LogResult;
use crate::level::{Level, LevelFilter};
use crate::logger::Logger;
use crate::profile::Profile;
use crate::tag::Tag;
use once_cell::sync::OnceCell;
use std::fmt;
use std::path::Path;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// The process-wide logger, created with default settings on first use
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Configure the process-wide logger.
///
/// Before first use this builds the logger from `config`. Afterwards the
/// filters, assertion action and log file of `config` are applied to the
/// existing logger and its console is kept.
#[track_caller]
pub fn init(config: &LoggerConfig) -> &'static Logger {
    let mut created = false;
    let logger = GLOBAL.get_or_init(|| {
        created = true;
        Logger::from_config(config)
    });
    if !created {
        logger.apply_config(config);
    }
    logger
}

/// Close the process-wide log file, if any
#[track_caller]
pub fn shutdown() {
    if let Some(logger) = GLOBAL.get() {
        logger.shutdown();
    }
}

pub fn set_level_filter(filter: LevelFilter) {
    global().set_level_filter(filter);
}

pub fn set_display_settings(settings: DisplaySettings) {
    global().set_display_settings(settings);
}

pub fn apply_profile(profile: Profile) {
    global().apply_profile(profile);
}

#[track_caller]
pub fn open_file(path: impl AsRef<Path>) -> LogResult<()> {
    global().open_file(path)
}

#[track_caller]
pub fn close_file() {
    global().close_file();
}

#[track_caller]
pub fn log(level: Level, message: impl fmt::Display) {
    global().log(level, message);
}

#[track_caller]
pub fn log_tagged(level: Level, tag: Tag, message: impl fmt::Display) {
    global().log_tagged(level, tag, message);
}
