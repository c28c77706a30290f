use crate::layers::Layer;
use entry_metrics::{Emitter, Metric, Properties};

/// Applies a prefix to every metric name.
///
/// Names will be prefixed in the format of `<prefix>.<remaining>`. An empty prefix leaves names
/// unchanged. Properties are passed through untouched.
pub struct Prefix<E> {
    prefix: String,
    inner: E,
}

impl<E: Emitter> Emitter for Prefix<E> {
    type Error = E::Error;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), E::Error> {
        let prefixed =
            metrics.iter().map(|metric| metric.with_prefix(&self.prefix)).collect::<Vec<_>>();
        self.inner.emit(properties, &prefixed)
    }
}

/// A layer for applying a prefix to every metric name.
///
/// More information on the behavior of the layer can be found in [`Prefix`].
pub struct PrefixLayer(String);

impl PrefixLayer {
    /// Creates a new `PrefixLayer` based on the given prefix.
    pub fn new<S: Into<String>>(prefix: S) -> PrefixLayer {
        PrefixLayer(prefix.into())
    }
}

impl<E> Layer<E> for PrefixLayer {
    type Output = Prefix<E>;

    fn layer(&self, inner: E) -> Self::Output {
        Prefix { prefix: self.0.clone(), inner }
    }
}
