//! Batching several metrics into one datagram.
//!
//! Run with: `cargo run --example buffered`

use rylv_dogstatsd::{count, gauge, Client, ClientOptions, MetricResult, StatsClient};

fn main() -> MetricResult<()> {
    let options = ClientOptions {
        namespace: "myapp.".to_string(),
        global_tags: Vec::new(),
        // every 10 metrics go out as a single newline-joined datagram
        buffer_threshold: 10,
    };
    let client = Client::new("127.0.0.1:8125", options)?;

    for i in 0..25 {
        count!(client, "jobs.processed", 1, format!("worker:{}", i % 3))?;
        gauge!(client, "queue.depth", f64::from(25 - i))?;
    }
    println!("{} metrics still buffered", client.buffered());

    // Flush the remainder explicitly; close would do it as well
    client.flush()?;
    client.close()
}
