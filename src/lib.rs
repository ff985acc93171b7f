//! # OMLogger
//!
//! Leveled, tagged logging to a colored console and an optional log file.
//!
//! ```text
//! [14:03:07] [main] [physics.rs:step@42] [WARNING]  [Physics] body 17 left the world
//!  date       thread  file info            level      tag       message
//! ```
//!
//! Which levels are written is decided by a [`LevelFilter`], which metadata
//! fields appear by [`DisplaySettings`]; both are bit sets that can be
//! changed at any time from any thread. [`Profile`] bundles common
//! combinations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use omlogger::{om_assert, om_error, om_info, LevelFilter, Tag};
//!
//! omlogger::open_file("game.log").ok();
//! omlogger::set_level_filter(LevelFilter::INFO | LevelFilter::ERROR);
//!
//! om_info!("Loaded {} levels", 3);
//! om_error!(tag: Tag::Network, "Lost connection to {}", "10.0.0.2");
//! om_assert!(1 + 1 == 2, "big brain");
//!
//! omlogger::shutdown();
//! ```
//!
//! An owned [`Logger`] works the same way without touching global state.

pub mod assertion;
pub mod bridge;
pub mod config;
pub mod console;
pub mod constants;
pub mod display;
pub mod error;
mod file;
mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod profile;
pub mod record;
pub mod tag;

pub use assertion::AssertAction;
pub use bridge::{init_tracing_bridge, TracingBridge};
pub use config::LoggerConfig;
pub use console::{ColorMode, Console, MemoryConsole, PlainConsole, StdoutConsole};
pub use display::DisplaySettings;
pub use error::{LogError, LogResult};
pub use global::{
    apply_profile, close_file, global, init, log, log_tagged, open_file, set_display_settings,
    set_level_filter, shutdown,
};
pub use level::{Level, LevelFilter};
pub use logger::Logger;
pub use profile::Profile;
pub use record::{LogRecord, SourceLocation};
pub use tag::Tag;
