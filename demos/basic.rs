//! Basic usage of all four metric types using the direct API.
//!
//! Run with: `cargo run --example basic`

use rylv_dogstatsd::{Client, ClientOptions, MetricResult, StatsClient, NO_TAGS};

fn main() -> MetricResult<()> {
    let options = ClientOptions {
        namespace: "myapp.".to_string(),
        global_tags: vec!["env:dev".to_string()],
        buffer_threshold: 0,
    };
    let client = Client::new("127.0.0.1:8125", options)?;

    // Gauge: a point-in-time value, last write wins
    client.gauge("connections.active", 100.0, &["pool:main"], 1.0)?;

    // Counter: a signed delta summed by the aggregator
    client.count("bytes.sent", 1024, &["endpoint:api"], 1.0)?;
    client.incr("request.count", &["endpoint:api"], 1.0)?;

    // Histogram: the aggregator computes percentiles; this one is sampled at 10%
    client.histogram("request.latency", 42.0, &["endpoint:api", "method:get"], 0.1)?;

    // Set: counts distinct members per flush window
    client.set("users.unique", "user-1234", NO_TAGS, 1.0)?;

    client.close()?;
    println!("All metric types sent.");
    Ok(())
}
