use entry_metrics::{Emitter, Metric, Properties};
use tracing::debug;

/// Fans out emissions to multiple emitters.
///
/// Emitters are called in the order they were added. The first failure stops the fan-out: the
/// remaining emitters are skipped and the error is returned.
pub struct Fanout<Err> {
    emitters: Vec<Box<dyn Emitter<Error = Err>>>,
}

impl<Err> Emitter for Fanout<Err> {
    type Error = Err;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), Err> {
        for (index, emitter) in self.emitters.iter().enumerate() {
            if let Err(e) = emitter.emit(properties, metrics) {
                debug!(
                    failed = index,
                    skipped = self.emitters.len() - index - 1,
                    "emitter failed during fanout"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

/// A builder for fanning out emissions to multiple emitters.
///
/// More information on the behavior of the layer can be found in [`Fanout`].
pub struct FanoutBuilder<Err> {
    emitters: Vec<Box<dyn Emitter<Error = Err>>>,
}

impl<Err> Default for FanoutBuilder<Err> {
    fn default() -> Self {
        FanoutBuilder { emitters: Vec::new() }
    }
}

impl<Err> FanoutBuilder<Err> {
    /// Adds an emitter to the fanout list.
    pub fn add_emitter<E>(mut self, emitter: E) -> FanoutBuilder<Err>
    where
        E: Emitter<Error = Err> + 'static,
    {
        self.emitters.push(Box::new(emitter));
        self
    }

    /// Builds the `Fanout` layer.
    pub fn build(self) -> Fanout<Err> {
        Fanout { emitters: self.emitters }
    }
}
