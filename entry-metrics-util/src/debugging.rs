use std::{convert::Infallible, sync::Arc};

use entry_metrics::{Emitter, Metric, Properties};
use parking_lot::Mutex;

type Emissions = Arc<Mutex<Vec<Emission>>>;

/// A single call to [`Emitter::emit`], as seen by [`DebuggingEmitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    properties: Properties,
    metrics: Vec<Metric>,
}

impl Emission {
    /// Properties that were emitted.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Metrics that were emitted.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Consumes this `Emission`, returning the properties and metrics.
    pub fn into_parts(self) -> (Properties, Vec<Metric>) {
        (self.properties, self.metrics)
    }
}

/// Captures point-in-time snapshots of `DebuggingEmitter`.
#[derive(Clone)]
pub struct Snapshotter {
    emissions: Emissions,
}

impl Snapshotter {
    /// Takes a snapshot of every emission seen so far, in the order they happened.
    pub fn snapshot(&self) -> Vec<Emission> {
        self.emissions.lock().clone()
    }

    /// Number of emissions seen so far.
    pub fn len(&self) -> usize {
        self.emissions.lock().len()
    }

    /// Returns `true` if nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.emissions.lock().is_empty()
    }

    /// Forgets every emission seen so far.
    pub fn clear(&self) {
        self.emissions.lock().clear();
    }
}

/// A simplistic emitter that can be used for debugging or testing.
///
/// Every emission is stored as-is. Callers can take snapshots at any given time through a
/// [`Snapshotter`] and get access to the raw properties and metrics.
#[derive(Default)]
pub struct DebuggingEmitter {
    emissions: Emissions,
}

impl DebuggingEmitter {
    /// Creates a new `DebuggingEmitter`.
    pub fn new() -> DebuggingEmitter {
        Self::default()
    }

    /// Gets a `Snapshotter` attached to this emitter.
    pub fn snapshotter(&self) -> Snapshotter {
        Snapshotter { emissions: Arc::clone(&self.emissions) }
    }
}

impl Emitter for DebuggingEmitter {
    type Error = Infallible;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), Infallible> {
        let emission = Emission { properties: properties.clone(), metrics: metrics.to_vec() };
        self.emissions.lock().push(emission);
        Ok(())
    }
}
