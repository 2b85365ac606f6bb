use std::net::ToSocketAddrs;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::{debug, error};

use super::buffer::CommandBuffer;
use super::format::format_metric;
use super::transport::{Transport, UdpTransport};
use super::Metric;
use crate::{MetricResult, MetricsError};

/// Trait defining the metric emission interface.
///
/// Implemented by the real [`Client`], by the disabled [`NullClient`], and
/// by `Option<C>`, `&C` and `Arc<C>` for any implementor `C`, so call sites
/// never need to check whether metrics are enabled.
///
/// Emission errors are transport errors. Metrics are best-effort, so callers
/// usually ignore them.
pub trait StatsClient {
    /// Formats and sends (or buffers) a prepared metric event.
    ///
    /// # Errors
    /// Returns `MetricsError::StdIo` if the transport failed and
    /// `MetricsError::Closed` after the client was closed.
    fn send<T: AsRef<str>>(&self, metric: &Metric<'_, T>) -> MetricResult<()>;

    /// Sends any buffered metrics as one datagram.
    ///
    /// # Errors
    /// Returns the transport error, if any.
    fn flush(&self) -> MetricResult<()>;

    /// Flushes buffered metrics and releases the transport.
    ///
    /// # Errors
    /// Returns the flush error first, then the transport close error.
    fn close(&self) -> MetricResult<()>;

    /// Records a point-in-time value.
    ///
    /// # Errors
    /// See [`StatsClient::send`].
    fn gauge<T: AsRef<str>>(
        &self,
        name: &str,
        value: f64,
        tags: &[T],
        rate: f64,
    ) -> MetricResult<()> {
        self.send(&Metric::gauge(name, value, tags, rate))
    }

    /// Adds `delta` to a counter.
    ///
    /// # Errors
    /// See [`StatsClient::send`].
    fn count<T: AsRef<str>>(
        &self,
        name: &str,
        delta: i64,
        tags: &[T],
        rate: f64,
    ) -> MetricResult<()> {
        self.send(&Metric::count(name, delta, tags, rate))
    }

    /// Records a sample whose distribution is computed by the aggregator.
    ///
    /// # Errors
    /// See [`StatsClient::send`].
    fn histogram<T: AsRef<str>>(
        &self,
        name: &str,
        value: f64,
        tags: &[T],
        rate: f64,
    ) -> MetricResult<()> {
        self.send(&Metric::histogram(name, value, tags, rate))
    }

    /// Records a member of a set.
    ///
    /// # Errors
    /// See [`StatsClient::send`].
    fn set<T: AsRef<str>>(
        &self,
        name: &str,
        value: &str,
        tags: &[T],
        rate: f64,
    ) -> MetricResult<()> {
        self.send(&Metric::set(name, value, tags, rate))
    }

    /// Increments a counter by one.
    ///
    /// # Errors
    /// See [`StatsClient::send`].
    fn incr<T: AsRef<str>>(&self, name: &str, tags: &[T], rate: f64) -> MetricResult<()> {
        self.count(name, 1, tags, rate)
    }

    /// Decrements a counter by one.
    ///
    /// # Errors
    /// See [`StatsClient::send`].
    fn decr<T: AsRef<str>>(&self, name: &str, tags: &[T], rate: f64) -> MetricResult<()> {
        self.count(name, -1, tags, rate)
    }
}

/// Namespace and global tags applied to every metric of a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended verbatim to all metric names. Include a trailing dot
    /// if desired (e.g., `"myapp."` results in `"myapp.metric"`).
    pub namespace: String,
    /// Tags written before each metric's own tags.
    pub global_tags: Vec<String>,
}

/// Construction options for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Prefix prepended verbatim to all metric names.
    pub namespace: String,
    /// Tags written before each metric's own tags.
    pub global_tags: Vec<String>,
    /// Number of metrics batched into one datagram. `0` sends each metric
    /// as soon as it is emitted.
    pub buffer_threshold: usize,
}

struct ClientState {
    buffer: CommandBuffer,
    // `None` once closed
    transport: Option<Box<dyn Transport>>,
}

impl ClientState {
    fn shutdown(&mut self) -> MetricResult<()> {
        let Some(transport) = self.transport.take() else {
            return Ok(());
        };
        let flushed = self.buffer.flush(&*transport);
        let closed = transport.close();
        debug!("dogstatsd client closed");
        flushed.and(closed)
    }
}

/// A dogstatsd client sending metrics over a [`Transport`], UDP by default.
///
/// The client is `Send + Sync` and is meant to be shared across threads,
/// for example through an `Arc<Client>`. Formatting runs without locks; the
/// buffer and transport sit behind a single mutex so that a batch is never
/// sent twice or torn between threads.
///
/// Namespace and global tags can be replaced at any time. Each emission reads
/// one consistent snapshot of them.
///
/// # Example
///
/// ```no_run
/// use rylv_dogstatsd::{Client, ClientOptions, StatsClient};
///
/// let options = ClientOptions {
///     namespace: "myapp.".to_string(),
///     global_tags: vec!["env:prod".to_string()],
///     buffer_threshold: 20,
/// };
/// let client = Client::new("127.0.0.1:8125", options).unwrap();
///
/// client.gauge("connections.active", 100.0, &["pool:main"], 1.0).ok();
/// client.count("request.count", 1, &["endpoint:api"], 1.0).ok();
/// client.histogram("request.latency", 42.0, &["endpoint:api"], 0.5).ok();
/// client.set("users.unique", "user-1234", &["endpoint:api"], 1.0).ok();
///
/// client.close().ok();
/// ```
pub struct Client {
    config: ArcSwap<ClientConfig>,
    state: Mutex<ClientState>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Client")
            .field("config", &self.config.load_full())
            .field("buffered", &state.buffer.len())
            .field("buffer_threshold", &state.buffer.threshold())
            .field("closed", &state.transport.is_none())
            .finish()
    }
}

impl Client {
    /// Creates a client sending to `addr` over UDP.
    ///
    /// # Errors
    /// Returns `MetricsError::Resolve` if `addr` does not resolve and
    /// `MetricsError::StdIo` if the socket cannot be created.
    pub fn new<A: ToSocketAddrs>(addr: A, options: ClientOptions) -> MetricResult<Self> {
        let transport = UdpTransport::connect(addr)?;
        Ok(Self::with_transport(transport, options))
    }

    /// Creates a client sending through a caller-provided transport.
    #[must_use]
    pub fn with_transport<T: Transport + 'static>(transport: T, options: ClientOptions) -> Self {
        let config = ClientConfig {
            namespace: options.namespace,
            global_tags: options.global_tags,
        };
        Self {
            config: ArcSwap::from_pointee(config),
            state: Mutex::new(ClientState {
                buffer: CommandBuffer::new(options.buffer_threshold),
                transport: Some(Box::new(transport)),
            }),
        }
    }

    /// Returns the current namespace and global tags.
    #[must_use]
    pub fn config(&self) -> Arc<ClientConfig> {
        self.config.load_full()
    }

    /// Replaces namespace and global tags at once.
    pub fn set_config(&self, config: ClientConfig) {
        self.config.store(Arc::new(config));
    }

    /// Replaces the namespace, keeping the global tags.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        self.config.rcu(|current| ClientConfig {
            namespace: namespace.clone(),
            global_tags: current.global_tags.clone(),
        });
    }

    /// Replaces the global tags, keeping the namespace.
    pub fn set_global_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let global_tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        self.config.rcu(|current| ClientConfig {
            namespace: current.namespace.clone(),
            global_tags: global_tags.clone(),
        });
    }

    /// Number of metrics batched per datagram.
    #[must_use]
    pub fn buffer_threshold(&self) -> usize {
        self.state.lock().buffer.threshold()
    }

    /// Changes the batch size. Buffered metrics that no longer fit under the
    /// new threshold are flushed immediately.
    ///
    /// # Errors
    /// Returns the transport error of the triggered flush.
    pub fn set_buffer_threshold(&self, threshold: usize) -> MetricResult<()> {
        let mut state = self.state.lock();
        let ClientState { buffer, transport } = &mut *state;
        match transport.as_deref() {
            Some(transport) => buffer.set_threshold(threshold, transport),
            None => Err(MetricsError::Closed),
        }
    }

    /// Number of metrics waiting in the buffer.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// Returns `true` once [`StatsClient::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().transport.is_none()
    }
}

impl StatsClient for Client {
    fn send<T: AsRef<str>>(&self, metric: &Metric<'_, T>) -> MetricResult<()> {
        let line = {
            let config = self.config.load();
            format_metric(metric, &config.namespace, &config.global_tags)
        };

        let mut state = self.state.lock();
        let ClientState { buffer, transport } = &mut *state;
        let transport = transport.as_deref().ok_or(MetricsError::Closed)?;
        buffer.append(line, transport)
    }

    fn flush(&self) -> MetricResult<()> {
        let mut state = self.state.lock();
        let ClientState { buffer, transport } = &mut *state;
        match transport.as_deref() {
            Some(transport) => buffer.flush(transport),
            None => Ok(()),
        }
    }

    fn close(&self) -> MetricResult<()> {
        self.state.lock().shutdown()
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        if let Err(err) = self.state.get_mut().shutdown() {
            error!("Error closing dogstatsd client: {err}");
        }
    }
}

/// A client that discards every metric.
///
/// Hand this out when metrics are disabled: every operation, including
/// `close`, succeeds without doing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClient;

impl StatsClient for NullClient {
    fn send<T: AsRef<str>>(&self, _metric: &Metric<'_, T>) -> MetricResult<()> {
        Ok(())
    }

    fn flush(&self) -> MetricResult<()> {
        Ok(())
    }

    fn close(&self) -> MetricResult<()> {
        Ok(())
    }
}

impl<C: StatsClient> StatsClient for Option<C> {
    fn send<T: AsRef<str>>(&self, metric: &Metric<'_, T>) -> MetricResult<()> {
        self.as_ref().map_or(Ok(()), |client| client.send(metric))
    }

    fn flush(&self) -> MetricResult<()> {
        self.as_ref().map_or(Ok(()), |client| client.flush())
    }

    fn close(&self) -> MetricResult<()> {
        self.as_ref().map_or(Ok(()), |client| client.close())
    }
}

impl<C: StatsClient + ?Sized> StatsClient for &C {
    fn send<T: AsRef<str>>(&self, metric: &Metric<'_, T>) -> MetricResult<()> {
        (**self).send(metric)
    }

    fn flush(&self) -> MetricResult<()> {
        (**self).flush()
    }

    fn close(&self) -> MetricResult<()> {
        (**self).close()
    }
}

impl<C: StatsClient + ?Sized> StatsClient for Arc<C> {
    fn send<T: AsRef<str>>(&self, metric: &Metric<'_, T>) -> MetricResult<()> {
        (**self).send(metric)
    }

    fn flush(&self) -> MetricResult<()> {
        (**self).flush()
    }

    fn close(&self) -> MetricResult<()> {
        (**self).close()
    }
}
