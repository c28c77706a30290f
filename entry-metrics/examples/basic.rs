//! This example is part unit test and part demonstration.
//!
//! We implement a simple emitter that prints everything it receives, and then show how properties
//! flow into every entry until they are changed or removed.
use std::convert::Infallible;

use entry_metrics::{Emitter, Metric, Metrics, Properties};

#[derive(Default)]
struct PrintEmitter;

impl Emitter for PrintEmitter {
    type Error = Infallible;

    fn emit(&self, properties: &Properties, metrics: &[Metric]) -> Result<(), Infallible> {
        let properties = properties
            .iter()
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect::<Vec<_>>()
            .join(", ");

        for metric in metrics {
            println!("entry '{}': {} [{}]", metric.name(), metric.data(), properties);
        }

        Ok(())
    }
}

fn main() {
    let emitter = PrintEmitter;
    let metrics = Metrics::new(&emitter);

    // No properties yet.
    metrics.entry("Startup", "ok").expect("failed to record entry");

    // Properties are attached to every subsequent entry.
    metrics.set_property("env", "prod");
    metrics.set_property("host", "web-01");
    metrics.entry("Request", "GET /").expect("failed to record entry");
    metrics.entry("Request", "GET /health").expect("failed to record entry");

    // Setting a property again replaces its value.
    metrics.set_property("host", "web-02");
    metrics.entry("Request", "POST /orders").expect("failed to record entry");

    // Removed properties are left out, and removing an unknown one is harmless.
    metrics.remove_property("env");
    metrics.remove_property("not-there");
    metrics.entry("Shutdown", "ok").expect("failed to record entry");

    // Entries without a name are rejected before reaching the emitter.
    if let Err(e) = metrics.entry("", "nameless") {
        println!("rejected: {}", e);
    }
}
