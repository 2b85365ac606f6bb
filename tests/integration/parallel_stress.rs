use crossbeam::channel::{unbounded, Receiver};
use rylv_dogstatsd::{Client, ClientOptions, StatsClient, NO_TAGS};
use std::collections::HashMap;
use std::net::UdpSocket;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Spawns a UDP receiver forwarding every datagram until the socket goes quiet
fn spawn_udp_receiver() -> (std::net::SocketAddr, Receiver<String>) {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("couldn't bind to address");
    socket
        .set_read_timeout(Some(Duration::from_secs(1)))
        .expect("set_read_timeout failed");
    let addr = socket.local_addr().expect("local_addr failed");
    let (sender, receiver) = unbounded();

    thread::spawn(move || {
        let mut buf = [0; 65536];
        while let Ok((number_of_bytes, _)) = socket.recv_from(&mut buf) {
            let text = String::from_utf8(buf[..number_of_bytes].to_vec()).unwrap();
            if sender.send(text).is_err() {
                break;
            }
        }
    });

    (addr, receiver)
}

#[test]
fn test_parallel_buffered_emission() {
    let (addr, receiver) = spawn_udp_receiver();
    let options = ClientOptions {
        namespace: "stress.".to_string(),
        global_tags: Vec::new(),
        buffer_threshold: 10,
    };
    let client = Arc::new(Client::new(addr, options).unwrap());
    let num_threads = 4;
    let iterations_per_thread = 250;

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let client = Arc::clone(&client);
            thread::spawn(move || {
                let tag = format!("thread:{thread_id}");
                for i in 0..iterations_per_thread {
                    client.count("parallel", i, &[tag.as_str()], 1.0).unwrap();
                    if i % 50 == 0 {
                        // slow the emitters a little so the receiver keeps up
                        thread::sleep(Duration::from_millis(1));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    client.close().unwrap();

    let mut lines_per_thread = HashMap::<String, Vec<i64>>::new();
    let mut datagrams = 0;
    while let Ok(datagram) = receiver.recv_timeout(Duration::from_secs(2)) {
        datagrams += 1;
        let lines: Vec<&str> = datagram.split('\n').collect();
        assert_eq!(lines.len(), 10, "batch torn: {datagram}");
        for line in lines {
            let (value, tag) = line
                .strip_prefix("stress.parallel:")
                .and_then(|rest| rest.split_once("|c|#"))
                .expect("malformed line");
            lines_per_thread
                .entry(tag.to_string())
                .or_default()
                .push(value.parse().unwrap());
        }
    }

    assert_eq!(datagrams, num_threads * iterations_per_thread as usize / 10);
    assert_eq!(lines_per_thread.len(), num_threads);
    for values in lines_per_thread.values() {
        // each emitter's lines arrive in the order they were emitted
        let expected: Vec<i64> = (0..iterations_per_thread).collect();
        assert_eq!(values, &expected);
    }
}

#[test]
fn test_close_while_emitting() {
    let (addr, _receiver) = spawn_udp_receiver();
    let options = ClientOptions {
        buffer_threshold: 3,
        ..ClientOptions::default()
    };
    let client = Arc::new(Client::new(addr, options).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            thread::spawn(move || {
                for _ in 0..1000 {
                    // either lands before close or fails with Closed
                    let _ = client.incr("racing", NO_TAGS, 1.0);
                }
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(1));
    client.close().unwrap();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    assert!(client.is_closed());
    assert_eq!(client.buffered(), 0);
}
