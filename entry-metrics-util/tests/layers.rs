use std::{convert::Infallible, sync::Arc};

use entry_metrics::{Metrics, MetricsBuilder};
use entry_metrics_util::{
    layers::{FanoutBuilder, Layer, PrefixLayer, Stack},
    DebuggingEmitter,
};

#[test]
fn stack_with_fanout_and_prefix() {
    let raw = DebuggingEmitter::new();
    let raw_snapshotter = raw.snapshotter();
    let inner = DebuggingEmitter::new();
    let prefixed_snapshotter = inner.snapshotter();
    let prefixed = PrefixLayer::new("checkout").layer(inner);

    let fanout =
        FanoutBuilder::<Infallible>::default().add_emitter(raw).add_emitter(prefixed).build();
    let metrics = MetricsBuilder::new().with_property("env", "prod").build(Stack::new(fanout));

    metrics.entry("order_placed", "42").expect("entry failed");
    metrics.set_property("region", "eu-west-1");
    metrics.entry("order_shipped", "42").expect("entry failed");

    let raw = raw_snapshotter.snapshot();
    let prefixed = prefixed_snapshotter.snapshot();
    assert_eq!(raw.len(), 2);
    assert_eq!(prefixed.len(), 2);

    assert_eq!(raw[0].metrics()[0].name(), "order_placed");
    assert_eq!(prefixed[0].metrics()[0].name(), "checkout.order_placed");

    // Layers never touch the properties.
    for (r, p) in raw.iter().zip(prefixed.iter()) {
        assert_eq!(r.properties(), p.properties());
        assert_eq!(r.metrics()[0].data(), p.metrics()[0].data());
    }
    assert_eq!(raw[0].properties().len(), 1);
    assert_eq!(raw[1].properties().len(), 2);
}

#[test]
fn shared_emitter_across_recorders() {
    let emitter = Arc::new(DebuggingEmitter::new());
    let snapshotter = emitter.snapshotter();

    let web = Metrics::new(Arc::clone(&emitter));
    web.set_property("component", "web");
    let worker = Metrics::new(Arc::clone(&emitter));
    worker.set_property("component", "worker");

    web.entry("request", "GET /").expect("entry failed");
    worker.entry("job", "resize").expect("entry failed");
    drop(web);
    drop(worker);

    // Dropping the recorders leaves the shared emitter untouched.
    let snapshot = snapshotter.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].properties().get("component").map(String::as_str), Some("web"));
    assert_eq!(snapshot[1].properties().get("component").map(String::as_str), Some("worker"));
    assert_eq!(Arc::strong_count(&emitter), 1);
}
