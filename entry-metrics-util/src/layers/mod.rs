//! Layers are composable helpers that can be "layered" on top of an existing `Emitter` to enhance
//! or alter its behavior as desired, without having to change the emitter implementation itself.
//!
//! As well, [`Stack`] can be used to easily compose multiple layers together.
//!
//! Here's an example of a layer that drops every metric whose name mentions "debug":
//!
//! ```
//! # use entry_metrics::{Emitter, Metric, Metrics, Properties};
//! # use entry_metrics_util::layers::{Layer, PrefixLayer, Stack};
//! # use entry_metrics_util::DebuggingEmitter;
//! pub struct DebugDeny<E>(E);
//!
//! impl<E: Emitter> Emitter for DebugDeny<E> {
//!     type Error = E::Error;
//!
//!     fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), E::Error> {
//!         let kept = metrics
//!             .iter()
//!             .filter(|metric| !metric.name().contains("debug"))
//!             .cloned()
//!             .collect::<Vec<_>>();
//!         if kept.is_empty() {
//!             return Ok(());
//!         }
//!         self.0.emit(properties, &kept)
//!     }
//! }
//!
//! pub struct DebugDenyLayer;
//!
//! impl<E> Layer<E> for DebugDenyLayer {
//!     type Output = DebugDeny<E>;
//!
//!     fn layer(&self, inner: E) -> Self::Output {
//!         DebugDeny(inner)
//!     }
//! }
//!
//! let emitter = DebuggingEmitter::new();
//! let snapshotter = emitter.snapshotter();
//!
//! // `Stack` makes it easy to chain layers together.
//! let stack = Stack::new(emitter)
//!     .push(PrefixLayer::new("checkout"))
//!     .push(DebugDenyLayer);
//!
//! let metrics = Metrics::new(stack);
//! metrics.entry("debug_dump", "...").expect("failed to record entry");
//! metrics.entry("order_placed", "42").expect("failed to record entry");
//!
//! let snapshot = snapshotter.snapshot();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot[0].metrics()[0].name(), "checkout.order_placed");
//! ```
use entry_metrics::{Emitter, Metric, Properties};

mod fanout;
pub use fanout::{Fanout, FanoutBuilder};

mod prefix;
pub use prefix::{Prefix, PrefixLayer};

/// Decorates an object by wrapping it within another type.
pub trait Layer<E> {
    /// The output type after wrapping.
    type Output;

    /// Wraps `inner` based on this layer.
    fn layer(&self, inner: E) -> Self::Output;
}

/// Builder for composing layers together in a top-down/inside-out order.
pub struct Stack<E> {
    inner: E,
}

impl<E> Stack<E> {
    /// Creates a new `Stack` around the given object.
    pub fn new(inner: E) -> Self {
        Stack { inner }
    }

    /// Pushes the given layer on to the stack, wrapping the existing stack.
    pub fn push<L: Layer<E>>(self, layer: L) -> Stack<L::Output> {
        Stack::new(layer.layer(self.inner))
    }

    /// Consumes this `Stack`, returning the outermost layer.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Emitter> Emitter for Stack<E> {
    type Error = E::Error;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), E::Error> {
        self.inner.emit(properties, metrics)
    }
}
