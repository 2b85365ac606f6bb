#![no_main]

use libfuzzer_sys::fuzz_target;
use rylv_dogstatsd::{format_metric, Metric};

// Fuzz target checking the line layout for arbitrary names, tags and values
fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let (numbers, rest) = data.split_at(16);
    let value = f64::from_le_bytes(numbers[..8].try_into().unwrap());
    let rate = f64::from_le_bytes(numbers[8..].try_into().unwrap());
    let text = String::from_utf8_lossy(rest);
    let mut parts = text.split('\0');
    let name = parts.next().unwrap_or_default();
    let namespace = parts.next().unwrap_or_default();
    let tags: Vec<&str> = parts.collect();

    let metrics = [
        Metric::gauge(name, value, &tags, rate),
        Metric::count(name, value as i64, &tags, rate),
        Metric::histogram(name, value, &tags, rate),
        Metric::set(name, namespace, &tags, rate),
    ];

    for metric in &metrics {
        let line = format_metric(metric, namespace, &["global:tag"]);
        let prefix = format!("{namespace}{name}:");
        assert!(line.starts_with(&prefix));

        let joined: String = tags.iter().map(|tag| format!(",{tag}")).collect();
        assert!(line.ends_with(&format!("|#global:tag{joined}")));

        let user_rate_marker = [name, namespace].iter().chain(&tags).any(|s| s.contains("|@"));
        if !user_rate_marker {
            assert_eq!(line.contains("|@"), rate < 1.0);
        }
    }
});
