//! # Tracing Bridge
//!
//! Forwards events from the `tracing` ecosystem into a [`Logger`], so
//! libraries instrumented with `tracing` show up in the same console and log
//! file as the application's own lines.
//!
//! ## Mapping
//!
//! - `TRACE` and `DEBUG` become [`Level::Debug`], `INFO` becomes
//!   [`Level::Info`], `WARN` becomes [`Level::Warning`], `ERROR` becomes
//!   [`Level::Error`]
//! - the event's file and line become the call site
//! - a `tag` field naming a [`Tag`] becomes the line's tag
//! - the `message` field becomes the text; other fields are appended as
//!   `key=value`
//!
//! The level filter of the target logger applies as usual: events at
//! disabled levels are dropped before their fields are visited.

use crate::global::global;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::SourceLocation;
use crate::tag::Tag;
use once_cell::sync::Lazy;
use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Layer;

/// `tracing_subscriber` layer writing every event through a [`Logger`]
#[derive(Debug, Clone, Copy)]
pub struct TracingBridge {
    logger: &'static Logger,
}

impl TracingBridge {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl Default for TracingBridge {
    /// Bridge into the process-wide logger
    fn default() -> Self {
        Self::new(global())
    }
}

impl<S: Subscriber> Layer<S> for TracingBridge {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let location = SourceLocation::new(
            metadata.file().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or(0),
            None,
        );
        self.logger.log_at(
            level,
            location,
            visitor.tag,
            format_args!("{}{}", visitor.message, visitor.fields),
        );
    }
}

/// Collects the text of an event
#[derive(Debug, Default)]
struct EventVisitor {
    message: String,
    fields: String,
    tag: Option<Tag>,
}

impl EventVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        let _ = write!(self.fields, " {name}={value}");
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message.push_str(value),
            "tag" => match value.parse::<Tag>() {
                Ok(tag) => self.tag = Some(tag),
                Err(_) => self.push_field("tag", format_args!("{value}")),
            },
            name => self.push_field(name, format_args!("{value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{value:?}");
            }
            name => self.push_field(name, format_args!("{value:?}")),
        }
    }
}

/// Install a [`TracingBridge`] into the process-wide logger as the global
/// `tracing` subscriber.
///
/// Safe to call more than once; only the first call installs anything. If
/// another subscriber was already set the call has no effect.
pub fn init_tracing_bridge() {
    static INIT: Lazy<()> = Lazy::new(|| {
        let _ = tracing_subscriber::registry()
            .with(TracingBridge::default())
            .try_init();
    });

    Lazy::force(&INIT);
}
