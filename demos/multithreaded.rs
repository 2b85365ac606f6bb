//! Sharing a Client across multiple threads using Arc.
//!
//! Run with: `cargo run --example multithreaded`

use rylv_dogstatsd::{count, Client, ClientOptions, MetricResult, StatsClient};
use std::sync::Arc;

fn main() -> MetricResult<()> {
    let options = ClientOptions {
        namespace: "myapp.".to_string(),
        global_tags: vec!["service:workers".to_string()],
        buffer_threshold: 20,
    };
    let client = Arc::new(Client::new("127.0.0.1:8125", options)?);

    let mut handles = Vec::new();

    // Spawn worker threads that emit metrics concurrently
    for thread_id in 0..4 {
        let client = client.clone();
        let handle = std::thread::spawn(move || {
            let tag = format!("thread:{thread_id}");

            for i in 0..100 {
                // Direct API
                let _ = client.histogram("task.duration", f64::from(i * 10), &[tag.as_str()], 1.0);

                // Macros work too
                let _ = count!(client, "tasks.completed", 1, tag);
            }
        });
        handles.push(handle);
    }

    // Wait for all threads to finish
    for handle in handles {
        if handle.join().is_err() {
            eprintln!("worker thread panicked");
        }
    }

    // close() only needs a shared reference, so no Arc unwrapping
    client.close()?;
    println!("All threads finished. Metrics flushed.");
    Ok(())
}
