use indexmap::IndexMap;
use parking_lot::Mutex;

/// A point-in-time copy of the ambient properties, in insertion order.
pub type Properties = IndexMap<String, String>;

/// Ambient key/value properties attached to every emitted entry.
///
/// Keys are unique: setting an existing key overwrites its value while keeping its original
/// position. Every operation takes the same lock, so concurrent callers always observe a
/// consistent set of properties.
#[derive(Debug, Default)]
pub struct PropertyStore {
    inner: Mutex<Properties>,
}

impl PropertyStore {
    /// Creates an empty `PropertyStore`.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_properties(properties: Properties) -> Self {
        PropertyStore { inner: Mutex::new(properties) }
    }

    /// Sets a property, overwriting any previous value for the same key.
    pub fn set<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.lock().insert(key.into(), value.into());
    }

    /// Removes a property.
    ///
    /// Removing a key that is not present does nothing.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().shift_remove(key).is_some()
    }

    /// Gets the current value of a property.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).cloned()
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Takes a snapshot of the current properties.
    ///
    /// The snapshot is an independent copy: later changes to the store are not reflected in it,
    /// and changes to the snapshot are not reflected in the store.
    pub fn snapshot(&self) -> Properties {
        self.inner.lock().clone()
    }
}
