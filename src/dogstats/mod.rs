pub mod buffer;
pub mod client;
pub mod format;
pub mod macros;
pub mod transport;

/// Empty tag list, for emission calls that carry no tags of their own.
///
/// ```no_run
/// use rylv_dogstatsd::{Client, ClientOptions, StatsClient, NO_TAGS};
///
/// let client = Client::new("127.0.0.1:8125", ClientOptions::default()).unwrap();
/// client.incr("heartbeat", NO_TAGS, 1.0).ok();
/// ```
pub const NO_TAGS: &[&str] = &[];

/// The kind of a metric, which selects the wire type suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetricType {
    /// Point-in-time value, last write wins at the aggregator.
    Gauge,
    /// Signed delta summed at the aggregator.
    Count,
    /// Sample whose distribution is computed at the aggregator.
    Histogram,
    /// Distinct string member seen within a flush window.
    Set,
}

impl MetricType {
    /// Returns the wire type suffix (`g`, `c`, `h` or `s`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gauge => "g",
            Self::Count => "c",
            Self::Histogram => "h",
            Self::Set => "s",
        }
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric value tagged with its kind.
///
/// The variant decides both the type suffix and how the value is rendered,
/// so a count can never be rendered with a decimal point and a gauge never
/// without one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MetricValue<'a> {
    /// Rendered fixed-point with six decimals.
    Gauge(f64),
    /// Rendered as a signed base-10 integer.
    Count(i64),
    /// Rendered fixed-point with six decimals.
    Histogram(f64),
    /// Rendered verbatim.
    Set(&'a str),
}

impl MetricValue<'_> {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn metric_type(&self) -> MetricType {
        match self {
            Self::Gauge(_) => MetricType::Gauge,
            Self::Count(_) => MetricType::Count,
            Self::Histogram(_) => MetricType::Histogram,
            Self::Set(_) => MetricType::Set,
        }
    }
}

/// A single metric event, borrowed from the caller for the duration of an
/// emission call.
///
/// `sample_rate` only controls whether the `|@rate` suffix is written (it is
/// written when the rate is below `1.0`). The event is always sent; sampling
/// decisions belong to the caller.
#[derive(Clone, Debug)]
pub struct Metric<'a, T = &'a str> {
    /// Metric name, prefixed with the client namespace when formatted.
    pub name: &'a str,
    /// Value and kind.
    pub value: MetricValue<'a>,
    /// Tags appended after the client global tags.
    pub tags: &'a [T],
    /// Sample rate in `(0, 1]`.
    pub sample_rate: f64,
}

impl<'a, T: AsRef<str>> Metric<'a, T> {
    /// Builds a gauge event.
    #[must_use]
    pub const fn gauge(name: &'a str, value: f64, tags: &'a [T], sample_rate: f64) -> Self {
        Self {
            name,
            value: MetricValue::Gauge(value),
            tags,
            sample_rate,
        }
    }

    /// Builds a count event.
    #[must_use]
    pub const fn count(name: &'a str, delta: i64, tags: &'a [T], sample_rate: f64) -> Self {
        Self {
            name,
            value: MetricValue::Count(delta),
            tags,
            sample_rate,
        }
    }

    /// Builds a histogram event.
    #[must_use]
    pub const fn histogram(name: &'a str, value: f64, tags: &'a [T], sample_rate: f64) -> Self {
        Self {
            name,
            value: MetricValue::Histogram(value),
            tags,
            sample_rate,
        }
    }

    /// Builds a set event.
    #[must_use]
    pub const fn set(name: &'a str, value: &'a str, tags: &'a [T], sample_rate: f64) -> Self {
        Self {
            name,
            value: MetricValue::Set(value),
            tags,
            sample_rate,
        }
    }

    /// Returns the kind of this event.
    #[must_use]
    pub const fn metric_type(&self) -> MetricType {
        self.value.metric_type()
    }
}
