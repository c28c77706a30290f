use std::{error::Error, fmt};

use thiserror::Error as ThisError;

/// Errors that could occur while constructing a [`Metric`](crate::Metric).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InvalidMetric {
    /// The metric name was empty.
    #[error("metric name must not be empty")]
    EmptyName,
}

/// The type returned by [`Metrics::entry`](crate::Metrics::entry) when an entry could not be
/// recorded.
///
/// Failures raised by the emitter are carried as-is in [`EntryError::Emit`].
pub enum EntryError<E> {
    /// The entry was rejected before reaching the emitter.
    Invalid(InvalidMetric),

    /// The emitter failed.
    Emit(E),
}

impl<E> EntryError<E> {
    /// Returns `true` if the entry was rejected before reaching the emitter.
    pub fn is_invalid(&self) -> bool {
        matches!(self, EntryError::Invalid(_))
    }

    /// Returns `true` if the emitter failed.
    pub fn is_emit(&self) -> bool {
        matches!(self, EntryError::Emit(_))
    }

    /// Returns the emitter error, if the emitter was the source of the failure.
    pub fn into_emit_error(self) -> Option<E> {
        match self {
            EntryError::Emit(e) => Some(e),
            EntryError::Invalid(_) => None,
        }
    }
}

impl<E> From<InvalidMetric> for EntryError<E> {
    fn from(e: InvalidMetric) -> Self {
        EntryError::Invalid(e)
    }
}

impl<E: fmt::Debug> fmt::Debug for EntryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::Invalid(e) => f.debug_tuple("Invalid").field(e).finish(),
            EntryError::Emit(e) => f.debug_tuple("Emit").field(e).finish(),
        }
    }
}

impl<E: fmt::Display> fmt::Display for EntryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::Invalid(e) => write!(f, "invalid entry: {}", e),
            EntryError::Emit(e) => write!(f, "failed to emit entry: {}", e),
        }
    }
}

impl<E> Error for EntryError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EntryError::Invalid(e) => Some(e),
            EntryError::Emit(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::{EntryError, InvalidMetric};

    #[derive(Debug, thiserror::Error)]
    #[error("collector unavailable")]
    struct CollectorDown;

    #[test]
    fn test_invalid_display_and_source() {
        let err: EntryError<CollectorDown> = InvalidMetric::EmptyName.into();
        assert!(err.is_invalid());
        assert!(!err.is_emit());
        assert_eq!(err.to_string(), "invalid entry: metric name must not be empty");
        assert!(err.source().is_some());
        assert!(err.into_emit_error().is_none());
    }

    #[test]
    fn test_emit_display_and_source() {
        let err = EntryError::Emit(CollectorDown);
        assert!(err.is_emit());
        assert_eq!(err.to_string(), "failed to emit entry: collector unavailable");
        assert_eq!(
            err.source().map(|source| source.to_string()),
            Some("collector unavailable".to_string())
        );
        assert!(err.into_emit_error().is_some());
    }
}
