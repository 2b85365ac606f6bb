//! # rylv-dogstatsd
//!
//! A fire-and-forget `DogStatsD` client for Rust.
//!
//! ## Features
//!
//! - **Exact wire format**: gauges, counters, histograms and sets with sample
//!   rates and tags, rendered as `name:value|type|@rate|#tags`
//! - **Optional batching**: a buffer threshold joins metrics into a single
//!   newline-delimited datagram
//! - **Thread safe**: one client can be shared by any number of threads
//! - **Disabled mode**: [`NullClient`] and `Option<Client>` accept every call
//!   and send nothing
//!
//! ## Quick Start
//!
//! ```no_run
//! use rylv_dogstatsd::{Client, ClientOptions, StatsClient, NO_TAGS};
//! use rylv_dogstatsd::{count, gauge, histogram, set};
//!
//! let options = ClientOptions {
//!     namespace: "myapp.".to_string(),
//!     global_tags: vec!["env:prod".to_string()],
//!     buffer_threshold: 0,
//! };
//! let client = Client::new("127.0.0.1:8125", options).unwrap();
//!
//! // Direct API
//! client.gauge("connections.active", 100.0, &["pool:main"], 1.0).ok();
//! client.count("request.count", 1, &["endpoint:api"], 1.0).ok();
//! client.histogram("request.latency", 42.0, &["endpoint:api"], 0.1).ok();
//! client.set("users.unique", "user-1234", NO_TAGS, 1.0).ok();
//!
//! // Convenience macros, sample rate 1.0
//! gauge!(client, "connections.active", 100.0, "pool:main").ok();
//! count!(client, "request.count", 1, "endpoint:api").ok();
//! histogram!(client, "request.latency", 42.0, "endpoint:api").ok();
//! set!(client, "users.unique", "user-1234").ok();
//!
//! // Close flushes buffered metrics and releases the socket
//! client.close().ok();
//! ```
//!
//! ## Disabling metrics
//!
//! ```
//! use rylv_dogstatsd::{Client, StatsClient, NO_TAGS};
//!
//! let client: Option<Client> = None;
//! assert!(client.incr("requests", NO_TAGS, 1.0).is_ok());
//! assert!(client.close().is_ok());
//! ```

// #![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

// https://docs.datadoghq.com/developers/dogstatsd/datagram_shell/?tab=metrics
mod dogstats;
mod error;

pub use dogstats::buffer::MAX_SAFE_DATAGRAM_SIZE;
pub use dogstats::client::{Client, ClientConfig, ClientOptions, NullClient, StatsClient};
pub use dogstats::format::{format_metric, write_metric};
pub use dogstats::transport::{Transport, UdpTransport};
pub use dogstats::{Metric, MetricType, MetricValue, NO_TAGS};
pub use error::MetricsError;

/// Result type for metric operations.
///
/// Wraps errors that can occur while creating a client or transmitting metrics.
pub type MetricResult<T> = Result<T, MetricsError>;
