//! Turning metrics off without touching call sites.
//!
//! Run with: `METRICS_ADDR=127.0.0.1:8125 cargo run --example disabled`

use rylv_dogstatsd::{Client, ClientOptions, StatsClient, NO_TAGS};

fn handle_request(metrics: &impl StatsClient, id: u64) {
    // Errors are ignored: metrics are best-effort
    let _ = metrics.incr("requests", NO_TAGS, 1.0);
    let _ = metrics.histogram("request.id", id as f64, &["kind:demo"], 1.0);
}

fn main() {
    // `None` when the variable is unset or the address does not resolve
    let metrics: Option<Client> = std::env::var("METRICS_ADDR")
        .ok()
        .and_then(|addr| Client::new(addr, ClientOptions::default()).ok());

    println!("metrics enabled: {}", metrics.is_some());
    for id in 0..10 {
        handle_request(&metrics, id);
    }

    let _ = metrics.close();
}
