use tracing::trace;

use crate::{Emitter, EntryError, Metric, Properties, PropertyStore};

/// Records entries and hands them to an [`Emitter`], enriched with the current ambient properties.
///
/// `Metrics` owns its property store, but only holds the emitter it was given. To share an
/// emitter with other parts of an application, pass a reference or an `Arc` to it: both implement
/// [`Emitter`] as long as the underlying type does.
///
/// Every call to [`entry`](Metrics::entry) results in exactly one call to [`Emitter::emit`], made
/// synchronously before `entry` returns, with a snapshot of the properties as they were when
/// `entry` was called.
#[derive(Debug)]
pub struct Metrics<E> {
    properties: PropertyStore,
    emitter: E,
}

impl<E> Metrics<E>
where
    E: Emitter,
{
    /// Creates a new `Metrics` with no properties set.
    pub fn new(emitter: E) -> Self {
        Self::from_parts(PropertyStore::new(), emitter)
    }

    pub(crate) fn from_parts(properties: PropertyStore, emitter: E) -> Self {
        Metrics { properties, emitter }
    }

    /// Sets a property to be included with every subsequent entry.
    ///
    /// If the property is already set, its value is replaced.
    pub fn set_property<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        trace!(key = %key, "setting property");
        self.properties.set(key, value);
    }

    /// Stops including a property with subsequent entries.
    ///
    /// Removing a property that was never set does nothing.
    pub fn remove_property(&self, key: &str) {
        let removed = self.properties.remove(key);
        trace!(key, removed, "removing property");
    }

    /// Records an entry.
    ///
    /// A [`Metric`] is built from `name` and `data`, and emitted alongside a snapshot of the
    /// current properties.
    ///
    /// # Errors
    ///
    /// If `name` is empty, [`EntryError::Invalid`] is returned and nothing is emitted. If the
    /// emitter fails, its error is returned unchanged in [`EntryError::Emit`].
    pub fn entry<N, D>(&self, name: N, data: D) -> Result<(), EntryError<E::Error>>
    where
        N: Into<String>,
        D: Into<String>,
    {
        let metric = Metric::new(name, data)?;
        let properties = self.properties.snapshot();

        trace!(metric = metric.name(), properties = properties.len(), "emitting entry");
        self.emitter.emit(&properties, std::slice::from_ref(&metric)).map_err(EntryError::Emit)
    }

    /// Takes a snapshot of the current properties.
    pub fn properties(&self) -> Properties {
        self.properties.snapshot()
    }

    /// Gets a reference to the emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Consumes this `Metrics`, returning the emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}
