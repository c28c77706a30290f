use std::fmt;

mod noop;
pub use self::noop::NoopEmitter;

use crate::{Metric, Properties};

/// A trait for emitting recorded entries.
///
/// This is the seam between [`Metrics`](crate::Metrics) and whatever actually ships entries out of
/// the application, whether that is a log, a collector, or a test double.
pub trait Emitter {
    /// The error returned when an emission fails.
    type Error;

    /// Emits a batch of metrics along with the properties that apply to them.
    ///
    /// `metrics` is never empty. What happens to the data is an implementation detail; callers only
    /// observe whether the emission succeeded.
    ///
    /// # Errors
    ///
    /// Any failure in delivering the metrics is reported through `Self::Error`.
    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), Self::Error>;
}

// Blanket implementations.
macro_rules! impl_emitter {
    ($inner_ty:ident, $ptr_ty:ty) => {
        impl<$inner_ty> $crate::Emitter for $ptr_ty
        where
            $inner_ty: $crate::Emitter + ?Sized,
        {
            type Error = $inner_ty::Error;

            fn emit(
                &self,
                properties: &$crate::Properties,
                metrics: &[$crate::Metric],
            ) -> Result<(), Self::Error> {
                std::ops::Deref::deref(self).emit(properties, metrics)
            }
        }
    };
}

impl_emitter!(T, &T);
impl_emitter!(T, &mut T);
impl_emitter!(T, std::boxed::Box<T>);
impl_emitter!(T, std::sync::Arc<T>);

/// An emitter backed by a closure.
///
/// Created by [`emitter_fn`].
#[derive(Clone)]
pub struct FnEmitter<F>(F);

impl<F> fmt::Debug for FnEmitter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEmitter").finish_non_exhaustive()
    }
}

impl<F, E> Emitter for FnEmitter<F>
where
    F: Fn(&Properties, &[Metric]) -> Result<(), E>,
{
    type Error = E;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), E> {
        (self.0)(properties, metrics)
    }
}

/// Creates an emitter that calls `f` for every emission.
pub fn emitter_fn<F, E>(f: F) -> FnEmitter<F>
where
    F: Fn(&Properties, &[Metric]) -> Result<(), E>,
{
    FnEmitter(f)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        convert::Infallible,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    use super::{emitter_fn, Emitter, NoopEmitter};
    use crate::{Metric, Properties};

    #[test]
    fn blanket_implementations() {
        fn is_emitter<T: Emitter>(_emitter: T) {}

        let mut local = NoopEmitter;

        is_emitter(NoopEmitter);
        is_emitter(Arc::new(NoopEmitter));
        is_emitter(Box::new(NoopEmitter));
        is_emitter(&local);
        is_emitter(&mut local);

        let boxed: Box<dyn Emitter<Error = Infallible>> = Box::new(NoopEmitter);
        is_emitter(boxed);
    }

    #[test]
    fn shared_emitter_sees_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let emitter = Arc::new(emitter_fn(move |_: &Properties, metrics: &[Metric]| {
            counted.fetch_add(metrics.len(), Ordering::SeqCst);
            Ok::<(), Infallible>(())
        }));

        let metric = Metric::new("startup", "ok").expect("metric should be valid");
        let shared = Arc::clone(&emitter);
        shared.emit(&Properties::new(), std::slice::from_ref(&metric)).expect("emit failed");
        emitter.emit(&Properties::new(), std::slice::from_ref(&metric)).expect("emit failed");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn fn_emitter_passes_arguments_through() {
        let seen = RefCell::new(Vec::new());
        let emitter = emitter_fn(|properties: &Properties, metrics: &[Metric]| {
            seen.borrow_mut().push((properties.clone(), metrics.to_vec()));
            Ok::<(), Infallible>(())
        });

        let mut properties = Properties::new();
        properties.insert("env".to_string(), "prod".to_string());
        let metric = Metric::new("startup", "ok").expect("metric should be valid");
        emitter.emit(&properties, std::slice::from_ref(&metric)).expect("emit failed");

        let seen = seen.into_inner();
        assert_eq!(seen, vec![(properties, vec![metric])]);
    }
}
