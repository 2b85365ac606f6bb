use rylv_dogstatsd::{
    Client, ClientOptions, Metric, MetricResult, MetricsError, StatsClient, Transport, NO_TAGS,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A custom transport that collects datagrams in memory for testing
#[derive(Clone, Default)]
pub struct TestTransport {
    datagrams: Arc<Mutex<Vec<String>>>,
    closes: Arc<AtomicUsize>,
    fail_after: Option<usize>,
}

impl TestTransport {
    pub fn failing_after(sent: usize) -> Self {
        Self {
            fail_after: Some(sent),
            ..Self::default()
        }
    }

    pub fn datagrams(&self) -> Vec<String> {
        self.datagrams.lock().unwrap().clone()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl Transport for TestTransport {
    fn send(&self, buf: &[u8]) -> std::io::Result<usize> {
        let mut datagrams = self.datagrams.lock().unwrap();
        if self.fail_after.is_some_and(|limit| datagrams.len() >= limit) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                "socket buffer full",
            ));
        }
        datagrams.push(String::from_utf8(buf.to_vec()).unwrap());
        Ok(buf.len())
    }

    fn close(self: Box<Self>) -> MetricResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn create_client(transport: &TestTransport, buffer_threshold: usize) -> Client {
    let options = ClientOptions {
        namespace: "svc.".to_string(),
        global_tags: vec!["env:test".to_string()],
        buffer_threshold,
    };
    Client::with_transport(transport.clone(), options)
}

// ============================================================================
// Tests for Custom Transport
// ============================================================================

#[test]
fn test_custom_transport_unbuffered() -> MetricResult<()> {
    let transport = TestTransport::default();
    let client = create_client(&transport, 0);

    client.gauge("load", 0.75, &["cpu:0"], 1.0)?;
    client.count("requests", 12, NO_TAGS, 0.1)?;

    assert_eq!(
        transport.datagrams(),
        vec![
            "svc.load:0.750000|g|#env:test,cpu:0",
            "svc.requests:12|c|@0.100000|#env:test",
        ]
    );
    Ok(())
}

#[test]
fn test_custom_transport_batches_in_order() -> MetricResult<()> {
    let transport = TestTransport::default();
    let client = create_client(&transport, 3);

    for i in 0..7 {
        let tag = format!("i:{i}");
        client.count("ordered", i, &[tag], 1.0)?;
    }

    assert_eq!(client.buffered(), 1);
    let datagrams = transport.datagrams();
    assert_eq!(datagrams.len(), 2);
    assert_eq!(
        datagrams[0],
        "svc.ordered:0|c|#env:test,i:0\nsvc.ordered:1|c|#env:test,i:1\nsvc.ordered:2|c|#env:test,i:2"
    );
    assert_eq!(
        datagrams[1],
        "svc.ordered:3|c|#env:test,i:3\nsvc.ordered:4|c|#env:test,i:4\nsvc.ordered:5|c|#env:test,i:5"
    );

    client.close()?;
    assert_eq!(transport.datagrams()[2], "svc.ordered:6|c|#env:test,i:6");
    assert_eq!(transport.closes(), 1);
    Ok(())
}

#[test]
fn test_custom_transport_failure_drops_batch() {
    let transport = TestTransport::failing_after(1);
    let client = create_client(&transport, 2);

    client.incr("a", NO_TAGS, 1.0).unwrap();
    client.incr("b", NO_TAGS, 1.0).unwrap();
    assert_eq!(transport.datagrams().len(), 1);

    client.incr("c", NO_TAGS, 1.0).unwrap();
    let err = client.incr("d", NO_TAGS, 1.0);
    assert!(matches!(err, Err(MetricsError::StdIo(_))));
    assert_eq!(client.buffered(), 0);

    // the failed batch is gone, not resent on close
    client.close().unwrap();
    assert_eq!(transport.datagrams().len(), 1);
    assert_eq!(transport.closes(), 1);
}

#[test]
fn test_prepared_metrics() -> MetricResult<()> {
    let transport = TestTransport::default();
    let client = create_client(&transport, 0);
    let tags = [String::from("a:b")];
    let metrics = [
        Metric::gauge("g", 1.0, &tags, 1.0),
        Metric::count("c", 2, &tags, 1.0),
        Metric::histogram("h", 3.0, &tags, 1.0),
        Metric::set("s", "four", &tags, 1.0),
    ];

    for metric in &metrics {
        client.send(metric)?;
    }

    assert_eq!(
        transport.datagrams(),
        vec![
            "svc.g:1.000000|g|#env:test,a:b",
            "svc.c:2|c|#env:test,a:b",
            "svc.h:3.000000|h|#env:test,a:b",
            "svc.s:four|s|#env:test,a:b",
        ]
    );
    Ok(())
}
