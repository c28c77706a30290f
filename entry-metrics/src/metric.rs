use std::fmt;

use crate::InvalidMetric;

/// A single recorded data point.
///
/// A metric is always identified by a non-empty name, and carries a free-form string payload. Once
/// constructed, neither can change.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Metric {
    name: String,
    data: String,
}

impl Metric {
    /// Creates a [`Metric`] from a name and a data payload.
    ///
    /// # Errors
    ///
    /// If `name` is empty, [`InvalidMetric::EmptyName`] is returned.
    pub fn new<N, D>(name: N, data: D) -> Result<Self, InvalidMetric>
    where
        N: Into<String>,
        D: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidMetric::EmptyName);
        }

        Ok(Metric { name, data: data.into() })
    }

    /// Name of this metric.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Data payload of this metric.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Creates a copy of this metric whose name is prefixed with `prefix`.
    ///
    /// Names are joined in the format of `<prefix>.<name>`. An empty prefix leaves the name as is.
    pub fn with_prefix(&self, prefix: &str) -> Metric {
        if prefix.is_empty() {
            return self.clone();
        }

        let mut name = String::with_capacity(prefix.len() + 1 + self.name.len());
        name.push_str(prefix);
        name.push('.');
        name.push_str(&self.name);

        Metric { name, data: self.data.clone() }
    }

    /// Consumes this [`Metric`], returning the name and data.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.data)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Metric({}, {})", self.name, self.data)
    }
}
