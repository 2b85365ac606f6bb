#![no_main]

use libfuzzer_sys::fuzz_target;
use rylv_dogstatsd::{Client, ClientOptions, NullClient, StatsClient};

// Fuzz target driving a buffered client with arbitrary names and tags
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let options = ClientOptions {
        namespace: String::new(),
        global_tags: Vec::new(),
        buffer_threshold: usize::from(data[0] % 8),
    };
    let Ok(client) = Client::new("127.0.0.1:9999", options) else {
        return;
    };

    let text = String::from_utf8_lossy(&data[1..]);
    let tags: Vec<&str> = text.split(',').collect();

    // Try all operations with this potentially malformed input
    let _ = client.gauge(&text, 1.0, &tags, 1.0);
    let _ = client.count(&text, -1, &tags, 0.5);
    let _ = client.histogram(&text, f64::NAN, &tags, 1.0);
    let _ = client.set(&text, &text, &tags, 1.0);
    let _ = NullClient.set(&text, &text, &tags, 1.0);

    let _ = client.close();
});
