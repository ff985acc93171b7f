//! # Severity Levels and Level Filters
//!
//! A message carries exactly one [`Level`]. The logger filters with a
//! [`LevelFilter`], a set of levels that may be combined freely: a filter of
//! `ERROR | CRITICAL` drops info and warnings while keeping both error kinds.
//!
//! Every level owns one bit of the filter, so the accept check on the hot path
//! is a single bitwise AND.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// All levels, lowest severity first
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Upper-case name without brackets
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Bracketed label padded to [`LEVEL_LABEL_WIDTH`](crate::constants::LEVEL_LABEL_WIDTH)
    pub fn padded_label(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]   ",
            Level::Info => "[INFO]    ",
            Level::Warning => "[WARNING] ",
            Level::Error => "[ERROR]   ",
            Level::Critical => "[CRITICAL]",
        }
    }

    /// The single filter bit owned by this level
    pub fn mask(self) -> LevelFilter {
        match self {
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warning => LevelFilter::WARNING,
            Level::Error => LevelFilter::ERROR,
            Level::Critical => LevelFilter::CRITICAL,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warning,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

bitflags! {
    /// Set of levels the logger lets through.
    ///
    /// In configuration files the filter is written in its text form,
    /// e.g. `levels = "WARNING | ERROR | CRITICAL"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct LevelFilter: u32 {
        const DEBUG = 1 << 0;
        const INFO = 1 << 1;
        const WARNING = 1 << 2;
        const ERROR = 1 << 3;
        const CRITICAL = 1 << 4;
        const ALL = Self::DEBUG.bits()
            | Self::INFO.bits()
            | Self::WARNING.bits()
            | Self::ERROR.bits()
            | Self::CRITICAL.bits();
    }
}

impl LevelFilter {
    /// Lets nothing through
    pub const NONE: LevelFilter = LevelFilter::empty();

    /// Build a filter from raw bits. Unknown bits are kept but match no level.
    pub const fn from_raw(bits: u32) -> Self {
        LevelFilter::from_bits_retain(bits)
    }

    /// Whether a message at `level` passes this filter
    #[inline]
    pub fn allows(self, level: Level) -> bool {
        self.bits() & level.mask().bits() != 0
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        LevelFilter::ALL
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        level.mask()
    }
}
