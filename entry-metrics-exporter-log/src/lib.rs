//! Emits entries via the `tracing` crate.
//!
//! [`LogEmitter`] turns every emitted metric into a `tracing` event at a configurable level. Each
//! event carries the metric name and data as fields, and, unless disabled, the properties that
//! were attached to the entry, rendered as `key=value` pairs separated by commas.
//!
//! Where the events end up is up to the installed `tracing` subscriber.
//!
//! # Usage
//!
//! ```
//! use entry_metrics::Metrics;
//! use entry_metrics_exporter_log::LogEmitterBuilder;
//! use tracing::Level;
//!
//! let emitter = LogEmitterBuilder::new().with_level(Level::DEBUG).build();
//!
//! let metrics = Metrics::new(&emitter);
//! metrics.set_property("env", "prod");
//! metrics.entry("Startup", "ok").expect("failed to record entry");
//! ```
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

use std::convert::Infallible;

use entry_metrics::{Emitter, Metric, Properties};
use tracing::Level;

const DEFAULT_LEVEL: Level = Level::INFO;

macro_rules! event_at {
    ($level:expr, $($args:tt)+) => {
        if $level == Level::ERROR {
            tracing::event!(Level::ERROR, $($args)+)
        } else if $level == Level::WARN {
            tracing::event!(Level::WARN, $($args)+)
        } else if $level == Level::INFO {
            tracing::event!(Level::INFO, $($args)+)
        } else if $level == Level::DEBUG {
            tracing::event!(Level::DEBUG, $($args)+)
        } else {
            tracing::event!(Level::TRACE, $($args)+)
        }
    };
}

/// Builder for [`LogEmitter`].
#[derive(Debug, Clone)]
pub struct LogEmitterBuilder {
    level: Level,
    include_properties: bool,
}

impl LogEmitterBuilder {
    /// Creates a new `LogEmitterBuilder` with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level that events are emitted at.
    ///
    /// Defaults to `INFO`.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets whether or not properties are included with each event.
    ///
    /// Defaults to `true`.
    #[must_use]
    pub fn with_properties(mut self, include: bool) -> Self {
        self.include_properties = include;
        self
    }

    /// Builds the [`LogEmitter`].
    pub fn build(self) -> LogEmitter {
        LogEmitter { level: self.level, include_properties: self.include_properties }
    }
}

impl Default for LogEmitterBuilder {
    fn default() -> Self {
        LogEmitterBuilder { level: DEFAULT_LEVEL, include_properties: true }
    }
}

/// Emits entries as `tracing` events.
///
/// Emission never fails: whether an event is recorded is decided by the installed subscriber.
#[derive(Debug, Clone)]
pub struct LogEmitter {
    level: Level,
    include_properties: bool,
}

impl LogEmitter {
    /// Level that events are emitted at.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogEmitter {
    fn default() -> Self {
        LogEmitterBuilder::default().build()
    }
}

impl Emitter for LogEmitter {
    type Error = Infallible;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), Infallible> {
        let rendered = if self.include_properties { Some(render(properties)) } else { None };

        for metric in metrics {
            event_at!(
                self.level,
                metric = %metric.name(),
                data = %metric.data(),
                properties = rendered.as_deref(),
                "entry"
            );
        }

        Ok(())
    }
}

fn render(properties: &Properties) -> String {
    properties.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join(",")
}
