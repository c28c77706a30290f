//! A small facade for recording entries.
//!
//! `entry-metrics` lets an application record named data points, called entries, without caring
//! where they end up. Every entry is enriched with a set of ambient properties, such as the
//! environment or the host name, before it is handed to an emitter.
//!
//! # Overview
//! `entry-metrics` exposes two main concepts: recording an entry, and emitting it.
//!
//! ## Recording
//! [`Metrics`] is the type callers interact with. It holds the ambient properties, and exposes
//! three operations:
//!
//! - [`Metrics::set_property`] sets (or replaces) a property that will be attached to every
//!   subsequent entry.
//! - [`Metrics::remove_property`] stops attaching a property. Removing a property that was never
//!   set is not an error.
//! - [`Metrics::entry`] records an entry: a [`Metric`] is built from a name and a data payload,
//!   and emitted along with a snapshot of the properties as they are at that moment.
//!
//! Properties are kept in insertion order, and replacing the value of a property keeps its
//! position.
//!
//! ## Emitting
//! The [`Emitter`] trait defines the interface between [`Metrics`] and whatever actually ships
//! entries out of the application: a log, a collector, or a test double. An emitter receives the
//! properties and the metrics for each entry, and reports success or failure. Failures are handed
//! back, unchanged, to the caller of [`Metrics::entry`].
//!
//! [`Metrics`] does not own its emitter in any meaningful sense: references, `Box`es, and `Arc`s
//! of an emitter are emitters themselves, so the same emitter can be shared between many
//! recorders, and outlives all of them.
//!
//! A closure can also act as an emitter, through [`emitter_fn`].
//!
//! # Getting Started
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use entry_metrics::{emitter_fn, Metric, Metrics, Properties};
//!
//! let emitter = emitter_fn(|properties: &Properties, metrics: &[Metric]| {
//!     for metric in metrics {
//!         println!("{} = {} ({} properties)", metric.name(), metric.data(), properties.len());
//!     }
//!     Ok::<(), Infallible>(())
//! });
//!
//! let metrics = Metrics::new(&emitter);
//! metrics.set_property("env", "prod");
//! metrics.entry("Startup", "ok").expect("failed to record entry");
//! ```
//!
//! Properties can also be configured up front with [`MetricsBuilder`]:
//!
//! ```rust
//! use entry_metrics::{MetricsBuilder, NoopEmitter};
//!
//! let metrics = MetricsBuilder::new()
//!     .with_property("service", "checkout")
//!     .with_property("env", "prod")
//!     .build(NoopEmitter);
//!
//! assert_eq!(metrics.properties().len(), 2);
//! ```
//!
//! # Concurrency
//!
//! [`Metrics`] is `Sync` as long as its emitter is. Properties are guarded by a single lock, so
//! each change and each snapshot is atomic, and the lock is never held while the emitter runs.
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

mod builder;
pub use self::builder::MetricsBuilder;

mod emitter;
pub use self::emitter::*;

mod errors;
pub use self::errors::{EntryError, InvalidMetric};

mod metric;
pub use self::metric::Metric;

mod properties;
pub use self::properties::{Properties, PropertyStore};

mod recorder;
pub use self::recorder::Metrics;
