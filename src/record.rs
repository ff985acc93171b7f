//! # Call-Site Metadata and Line Prefixes
//!
//! A [`LogRecord`] is built for every accepted call and dropped as soon as
//! its prefix has been rendered. It only captures what the active display
//! settings ask for: no clock read without `SHOW_DATE`, no thread lookup
//! without `SHOW_THREAD`.

use crate::constants::TIMESTAMP_FORMAT;
use crate::display::DisplaySettings;
use crate::level::Level;
use crate::tag::Tag;
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::panic::Location;
use std::thread;

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    /// Enclosing function, when the call site could name it
    pub function: Option<&'static str>,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self { file, line, function }
    }

    /// Location of the caller of the current `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Final path component of `file`, for either separator style
    pub fn file_name(&self) -> &'static str {
        let file: &'static str = self.file;
        file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file)
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), None)
    }
}

/// One log call, captured right after it passed the level filter
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub tag: Option<Tag>,
    pub location: SourceLocation,
    pub timestamp: Option<DateTime<Local>>,
    pub thread: Option<String>,
    display: DisplaySettings,
}

impl LogRecord {
    pub fn capture(
        level: Level,
        tag: Option<Tag>,
        location: SourceLocation,
        display: DisplaySettings,
    ) -> Self {
        let timestamp = display
            .contains(DisplaySettings::SHOW_DATE)
            .then(Local::now);
        let thread = display
            .contains(DisplaySettings::SHOW_THREAD)
            .then(current_thread_label);

        Self {
            level,
            tag,
            location,
            timestamp,
            thread,
            display,
        }
    }

    /// Render everything that goes in front of the message text.
    ///
    /// `[HH:MM:SS] [thread] [file:function@line] [LEVEL]    [Tag] `
    pub fn prefix(&self) -> String {
        let mut prefix = String::with_capacity(64);

        if let Some(timestamp) = &self.timestamp {
            let _ = write!(prefix, "[{}] ", timestamp.format(TIMESTAMP_FORMAT));
        }
        if let Some(thread) = &self.thread {
            let _ = write!(prefix, "[{thread}] ");
        }
        if let Some(file_info) = self.file_info() {
            let _ = write!(prefix, "[{file_info}] ");
        }

        prefix.push_str(self.level.padded_label());
        prefix.push(' ');

        if let Some(tag) = self.tag {
            let _ = write!(prefix, "[{tag}] ");
        }
        prefix
    }

    fn file_info(&self) -> Option<String> {
        if !self.display.contains(DisplaySettings::SHOW_FILE_INFO) {
            return None;
        }
        let location = &self.location;
        Some(match location.function {
            Some(function) => format!("{}:{}@{}", location.file_name(), function, location.line),
            None => format!("{}@{}", location.file_name(), location.line),
        })
    }
}

fn current_thread_label() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}
