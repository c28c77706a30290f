use crate::{Emitter, Metrics, Properties, PropertyStore};

/// Builder for [`Metrics`].
///
/// Properties configured here are present from the very first entry, exactly as if they had been
/// set with [`Metrics::set_property`] right after construction.
#[derive(Debug, Default)]
pub struct MetricsBuilder {
    properties: Properties,
}

impl MetricsBuilder {
    /// Creates a new `MetricsBuilder` with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property.
    ///
    /// Later calls for the same key replace the earlier value.
    #[must_use]
    pub fn with_property<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Adds a set of properties.
    #[must_use]
    pub fn with_properties<I, K, V>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties.extend(properties.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the [`Metrics`] around the given emitter.
    pub fn build<E>(self, emitter: E) -> Metrics<E>
    where
        E: Emitter,
    {
        Metrics::from_parts(PropertyStore::from_properties(self.properties), emitter)
    }
}

#[cfg(test)]
mod tests {
    use super::MetricsBuilder;
    use crate::NoopEmitter;

    #[test]
    fn test_seeded_properties() {
        let metrics = MetricsBuilder::new()
            .with_property("env", "prod")
            .with_properties([("region", "eu-west-1"), ("env", "staging")])
            .build(NoopEmitter);

        let properties = metrics.properties();
        let pairs = properties.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>();
        assert_eq!(pairs, vec![("env", "staging"), ("region", "eu-west-1")]);
    }

    #[test]
    fn test_seeded_properties_are_mutable() {
        let metrics = MetricsBuilder::new().with_property("env", "prod").build(NoopEmitter);
        metrics.remove_property("env");
        metrics.set_property("host", "web-01");

        let properties = metrics.properties();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get("host").map(String::as_str), Some("web-01"));
    }
}
