//! Rendering of metric events into dogstatsd datagram lines.
//!
//! ```text
//! <namespace><name>:<value>|<type>[|@<rate>][|#<tag>,<tag>,...]
//! ```

use std::fmt::Write;

use super::{Metric, MetricValue};

/// Formats `metric` into a freshly allocated wire line.
///
/// Global tags are written before the metric's own tags. Nothing is
/// validated: empty names, empty tags and non-finite values are rendered
/// as they are, the aggregator decides what it accepts.
#[must_use]
pub fn format_metric<T, G>(metric: &Metric<'_, T>, namespace: &str, global_tags: &[G]) -> String
where
    T: AsRef<str>,
    G: AsRef<str>,
{
    let mut line = String::with_capacity(line_capacity(metric, namespace, global_tags));
    write_metric(&mut line, metric, namespace, global_tags);
    line
}

/// Appends the wire line for `metric` to `out`, without a trailing newline.
pub fn write_metric<T, G>(
    out: &mut String,
    metric: &Metric<'_, T>,
    namespace: &str,
    global_tags: &[G],
) where
    T: AsRef<str>,
    G: AsRef<str>,
{
    out.push_str(namespace);
    out.push_str(metric.name);
    out.push(':');
    match metric.value {
        MetricValue::Gauge(value) | MetricValue::Histogram(value) => push_fixed(out, value),
        MetricValue::Count(delta) => out.push_str(itoa::Buffer::new().format(delta)),
        MetricValue::Set(token) => out.push_str(token),
    }
    out.push('|');
    out.push_str(metric.metric_type().as_str());

    if metric.sample_rate < 1.0 {
        out.push_str("|@");
        push_fixed(out, metric.sample_rate);
    }

    let mut tags = global_tags
        .iter()
        .map(AsRef::as_ref)
        .chain(metric.tags.iter().map(AsRef::as_ref));
    if let Some(first) = tags.next() {
        out.push_str("|#");
        out.push_str(first);
        for tag in tags {
            out.push(',');
            out.push_str(tag);
        }
    }
}

// Infinities are spelled `+Inf`/`-Inf` as other dogstatsd clients emit them;
// NaN already prints as `NaN`.
#[inline]
fn push_fixed(out: &mut String, value: f64) {
    if value.is_infinite() {
        out.push_str(if value > 0.0 { "+Inf" } else { "-Inf" });
        return;
    }
    // writing into a String cannot fail
    let _ = write!(out, "{value:.6}");
}

// Exact for everything but the numeric part, which is guessed.
fn line_capacity<T, G>(metric: &Metric<'_, T>, namespace: &str, global_tags: &[G]) -> usize
where
    T: AsRef<str>,
    G: AsRef<str>,
{
    let value_len = match metric.value {
        MetricValue::Set(token) => token.len(),
        _ => 20,
    };
    let tags_len: usize = global_tags
        .iter()
        .map(|tag| tag.as_ref().len() + 1)
        .chain(metric.tags.iter().map(|tag| tag.as_ref().len() + 1))
        .sum();

    // ':' + '|' + type + '|@' + rate + '|#'
    namespace.len() + metric.name.len() + value_len + tags_len + 2 + 1 + 11 + 2
}
