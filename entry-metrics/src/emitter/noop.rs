use std::convert::Infallible;

use crate::{Emitter, Metric, Properties};

/// A no-op emitter.
///
/// Discards everything it is given. Useful as the innermost emitter when testing layers, or when
/// entries should be recorded nowhere at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEmitter;

impl Emitter for NoopEmitter {
    type Error = Infallible;

    fn emit(&self, _properties: &Properties, _metrics: &[Metric]) -> Result<(), Infallible> {
        Ok(())
    }
}
