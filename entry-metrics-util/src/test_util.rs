use std::convert::Infallible;

use entry_metrics::{Emitter, Metric, Properties};
use mockall::{mock, Sequence};

mock! {
    pub BasicEmitter {}

    impl Emitter for BasicEmitter {
        type Error = Infallible;

        fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), Infallible>;
    }
}

impl MockBasicEmitter {
    /// Creates a mock that expects exactly the given emissions, in order.
    pub fn from_emissions<I>(emissions: I) -> Self
    where
        I: IntoIterator<Item = (Properties, Vec<Metric>)>,
    {
        let mut mock = Self::new();
        let mut seq = Sequence::new();

        for (properties, metrics) in emissions {
            mock.expect_emit()
                .withf(move |p, m| p == &properties && m == metrics.as_slice())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        mock
    }
}

pub fn props(pairs: &[(&str, &str)]) -> Properties {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

pub fn metric(name: &str, data: &str) -> Metric {
    Metric::new(name, data).expect("valid metric")
}
