//! # Console Sink
//!
//! The console receives the prefix and the message separately so it can paint
//! the prefix in the level's colors and leave the message in the terminal's
//! default style. [`StdoutConsole`] is what a logger uses by default;
//! [`PlainConsole`] writes uncolored lines to any writer.

use crate::level::Level;
use colored::Color;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for console output.
///
/// Called with the logger's lock held. An implementation that takes another
/// lock (such as [`StdoutConsole`] taking the stdout lock) orders it after the
/// logger's: code holding that other lock must not log.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send {
    fn write_line(&mut self, level: Level, prefix: &str, message: &str) -> io::Result<()>;
}

/// Whether console output carries color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled_for_stdout(self) -> bool {
        match self {
            ColorMode::Auto => {
                io::stdout().is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize()
            }
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Foreground, background and weight of a level's prefix
fn style(level: Level) -> (Color, Option<Color>, bool) {
    match level {
        Level::Debug => (Color::Magenta, None, false),
        Level::Info => (Color::BrightCyan, None, false),
        Level::Warning => (Color::BrightYellow, None, false),
        Level::Error => (Color::BrightWhite, Some(Color::Red), false),
        Level::Critical => (Color::BrightWhite, Some(Color::BrightRed), true),
    }
}

/// Wrap `text` in the ANSI escape codes for `level`.
///
/// Always emits the codes; whether to call it at all is the console's choice,
/// independent of `colored`'s process-wide override.
pub fn paint(level: Level, text: &str) -> String {
    let (fg, bg, bold) = style(level);
    let mut codes = Vec::with_capacity(3);
    if bold {
        codes.push("1".to_string());
    }
    codes.push(fg.to_fg_str().to_string());
    if let Some(bg) = bg {
        codes.push(bg.to_bg_str().to_string());
    }
    format!("\x1b[{}m{text}\x1b[0m", codes.join(";"))
}

/// Writes to standard output, coloring the prefix when enabled.
///
/// Takes the stdout lock inside the logger's lock.
#[derive(Debug)]
pub struct StdoutConsole {
    color: bool,
}

impl StdoutConsole {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            color: mode.enabled_for_stdout(),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, level: Level, prefix: &str, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.color {
            writeln!(out, "{}{}", paint(level, prefix), message)?;
        } else {
            writeln!(out, "{prefix}{message}")?;
        }
        out.flush()
    }
}

/// Uncolored console writing to an arbitrary writer
#[derive(Debug)]
pub struct PlainConsole<W> {
    writer: W,
}

impl<W: Write + Send> PlainConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Console for PlainConsole<W> {
    fn write_line(&mut self, _level: Level, prefix: &str, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{prefix}{message}")
    }
}

/// Keeps every line in memory, e.g. for an in-application log view.
///
/// Clones share the same buffer, so a handle kept by the caller sees lines
/// written through the clone handed to a logger.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full lines (prefix + message) written so far
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// Lines together with the level they were written at
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, level: Level, prefix: &str, message: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, format!("{prefix}{message}")));
        Ok(())
    }
}
