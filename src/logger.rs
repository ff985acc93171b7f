//! # Logger
//!
//! The [`Logger`] owns the filter state and both sinks. It is shared by
//! reference across threads; every method takes `&self`.
//!
//! ## Write Path
//!
//! 1. The level is checked against the level filter with one atomic load and
//!    one bitwise AND. Rejected calls stop here: nothing is formatted, no
//!    clock or thread lookup happens, no lock is taken.
//! 2. The message is formatted once, before any lock is taken, so a
//!    `Display` impl that logs cannot deadlock.
//! 3. The state lock is taken. While it is held a [`LogRecord`] is captured
//!    for the fields the display settings enable, rendered into a prefix and
//!    written to the console (prefix painted in the level's colors) and, if
//!    one is open, to the log file (plain text, one `write_all`). Lines stay
//!    whole, appear in the same order in both sinks, and their timestamps
//!    never go backwards.
//!
//! Sink errors are dropped. Logging never panics or returns an error to the
//! code that logs.
//!
//! ## Filters
//!
//! Level filter and display settings live in atomics, so a configuration
//! change from one thread is seen by the next call on any other thread
//! without racing the write path.

use crate::assertion::AssertAction;
use crate::config::LoggerConfig;
use crate::console::{Console, StdoutConsole};
use crate::display::DisplaySettings;
use crate::error::{LogError, LogResult};
use crate::file::LogFile;
use crate::level::{Level, LevelFilter};
use crate::profile::Profile;
use crate::record::{LogRecord, SourceLocation};
use crate::tag::Tag;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct Logger {
    levels: AtomicU32,
    display: AtomicU32,
    state: Mutex<State>,
}

struct State {
    console: Box<dyn Console>,
    file: Option<LogFile>,
    assert_action: AssertAction,
}

impl Logger {
    /// Logger writing to stdout with default filters and no log file
    pub fn new() -> Self {
        Self::with_console(Box::new(StdoutConsole::default()))
    }

    pub fn with_console(console: Box<dyn Console>) -> Self {
        Self {
            levels: AtomicU32::new(LevelFilter::default().bits()),
            display: AtomicU32::new(DisplaySettings::default().bits()),
            state: Mutex::new(State {
                console,
                file: None,
                assert_action: AssertAction::default(),
            }),
        }
    }

    /// Build a stdout logger from `config`, opening its log file if it names one
    #[track_caller]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let logger = Self::with_console(Box::new(StdoutConsole::new(config.color)));
        logger.apply_config(config);
        logger
    }

    /// Apply filters, assertion action and log file from `config`.
    ///
    /// The console is left as it is. A log file that fails to open is
    /// reported on the console and otherwise ignored.
    #[track_caller]
    pub fn apply_config(&self, config: &LoggerConfig) {
        self.set_level_filter(config.effective_levels());
        self.set_display_settings(config.effective_display());
        self.set_assert_action(config.assert_action);
        if let Some(path) = &config.log_file {
            let _ = self.open_file(path);
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_raw(self.levels.load(Ordering::Relaxed))
    }

    pub fn set_level_filter(&self, filter: LevelFilter) {
        self.levels.store(filter.bits(), Ordering::Relaxed);
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings::from_raw(self.display.load(Ordering::Relaxed))
    }

    pub fn set_display_settings(&self, settings: DisplaySettings) {
        self.display.store(settings.bits(), Ordering::Relaxed);
    }

    /// Set both the level filter and the display settings from a preset
    pub fn apply_profile(&self, profile: Profile) {
        self.set_level_filter(profile.levels());
        self.set_display_settings(profile.display());
    }

    /// Whether a message at `level` would currently be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        self.level_filter().allows(level)
    }

    pub fn assert_action(&self) -> AssertAction {
        self.state().assert_action
    }

    pub fn set_assert_action(&self, action: AssertAction) {
        self.state().assert_action = action;
    }

    /// Swap the console sink, returning the previous one
    pub fn set_console(&self, console: Box<dyn Console>) -> Box<dyn Console> {
        std::mem::replace(&mut self.state().console, console)
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        self.log_at(level, SourceLocation::caller(), None, format_args!("{message}"));
    }

    #[track_caller]
    pub fn log_tagged(&self, level: Level, tag: Tag, message: impl fmt::Display) {
        self.log_at(
            level,
            SourceLocation::caller(),
            Some(tag),
            format_args!("{message}"),
        );
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(Level::Debug, SourceLocation::caller(), None, format_args!("{message}"));
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(Level::Info, SourceLocation::caller(), None, format_args!("{message}"));
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log_at(Level::Warning, SourceLocation::caller(), None, format_args!("{message}"));
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at(Level::Error, SourceLocation::caller(), None, format_args!("{message}"));
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log_at(Level::Critical, SourceLocation::caller(), None, format_args!("{message}"));
    }

    /// Write one line if `level` passes the filter. The macros expand to this.
    pub fn log_at(
        &self,
        level: Level,
        location: SourceLocation,
        tag: Option<Tag>,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let message = fmt::format(args);
        let mut state = self.state();
        self.emit(&mut state, level, location, tag, &message);
    }

    /// Open `path` in append mode as the log file.
    ///
    /// A file that is already open is closed first, even if `path` then fails
    /// to open. On failure a warning goes to the console, logging carries on
    /// console-only, and the error is returned for callers that care.
    #[track_caller]
    pub fn open_file(&self, path: impl AsRef<Path>) -> LogResult<()> {
        let path = path.as_ref();
        let location = SourceLocation::caller();

        let mut state = self.state();
        if let Some(previous) = state.file.take() {
            self.retire(&mut state, previous, location);
        }

        match LogFile::open(path) {
            Ok(file) => {
                state.file = Some(file);
                drop(state);
                self.log_at(
                    Level::Info,
                    location,
                    None,
                    format_args!("Opened log file {}", path.display()),
                );
                Ok(())
            }
            Err(source) => {
                drop(state);
                self.log_at(
                    Level::Warning,
                    location,
                    None,
                    format_args!("Failed to open log file {}: {}", path.display(), source),
                );
                Err(LogError::OpenFile {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Close the log file. Does nothing when no file is open.
    #[track_caller]
    pub fn close_file(&self) {
        let location = SourceLocation::caller();
        let mut state = self.state();
        if let Some(file) = state.file.take() {
            self.retire(&mut state, file, location);
        }
    }

    pub fn is_file_open(&self) -> bool {
        self.state().file.is_some()
    }

    /// Path of the open log file
    pub fn file_path(&self) -> Option<PathBuf> {
        self.state().file.as_ref().map(|file| file.path().to_path_buf())
    }

    /// Release the log file. Call once at the end of the program for the
    /// global logger; owned loggers also do this when dropped.
    #[track_caller]
    pub fn shutdown(&self) {
        self.close_file();
    }

    /// Log `message` as critical unless `condition` holds, then stop the
    /// program as configured by [`AssertAction`].
    #[track_caller]
    pub fn assert(&self, condition: bool, message: impl fmt::Display) {
        if !condition {
            self.fail_assertion(SourceLocation::caller(), format_args!("{message}"));
        }
    }

    /// The failing half of an assertion. The critical line is written even
    /// when the level filter excludes critical messages.
    pub fn fail_assertion(&self, location: SourceLocation, args: fmt::Arguments<'_>) -> ! {
        let message = fmt::format(args);
        let action = {
            let mut state = self.state();
            self.emit(&mut state, Level::Critical, location, None, &message);
            state.assert_action
        };
        action.trigger(&message)
    }

    /// Capture the record and write the line to both sinks. Called with the
    /// lock held.
    fn emit(
        &self,
        state: &mut State,
        level: Level,
        location: SourceLocation,
        tag: Option<Tag>,
        message: &str,
    ) {
        let prefix = self.prefix(level, location, tag);
        let _ = state.console.write_line(level, &prefix, message);
        if let Some(file) = state.file.as_mut() {
            let _ = file.append_line(&prefix, message);
        }
    }

    fn prefix(&self, level: Level, location: SourceLocation, tag: Option<Tag>) -> String {
        LogRecord::capture(level, tag, location, self.display_settings()).prefix()
    }

    /// Write a closing note into `file` and close it. Called with the lock held.
    fn retire(&self, state: &mut State, mut file: LogFile, location: SourceLocation) {
        if self.enabled(Level::Info) {
            let message = format!("Closed log file {}", file.path().display());
            let prefix = self.prefix(Level::Info, location, None);
            let _ = state.console.write_line(Level::Info, &prefix, &message);
            let _ = file.append_line(&prefix, &message);
        }
        let _ = file.close();
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("levels", &self.level_filter())
            .field("display", &self.display_settings())
            .field("file", &self.file_path())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = state.file.take() {
            let _ = file.close();
        }
    }
}
