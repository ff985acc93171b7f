//! # Logger Constants
//!
//! Shared values that have to agree between the formatter, the file sink and
//! the configuration loader.

/// Width every level label is padded to, so messages line up in columns.
/// Matches the longest label, `[CRITICAL]`.
pub const LEVEL_LABEL_WIDTH: usize = 10;

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "omlogger";

/// Configuration file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file used by the demo binary
pub const DEFAULT_LOG_FILE_NAME: &str = "logfile.txt";

/// Format of the `[HH:MM:SS]` timestamp field
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";
