//! Records a handful of entries and prints them through a `tracing` subscriber.
use entry_metrics::MetricsBuilder;
use entry_metrics_exporter_log::LogEmitterBuilder;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let emitter = LogEmitterBuilder::new().with_level(Level::INFO).build();
    let metrics = MetricsBuilder::new()
        .with_property("service", "checkout")
        .with_property("env", "dev")
        .build(&emitter);

    metrics.entry("Startup", "ok").expect("failed to record entry");

    for order in 1..=3 {
        metrics.set_property("order", order.to_string());
        metrics.entry("OrderPlaced", format!("{} items", order * 2)).expect("failed to record entry");
    }

    metrics.remove_property("order");
    metrics.entry("Shutdown", "ok").expect("failed to record entry");
}
