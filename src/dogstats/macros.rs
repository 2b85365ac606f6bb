/// Macro for recording a gauge with a sample rate of `1.0` and a variable
/// number of tags.
///
/// Tags may be any mix of `&str` and `String` expressions. The return value
/// is the emission result, which can be ignored.
///
/// # Examples
///
/// ```no_run
/// use rylv_dogstatsd::{gauge, Client, ClientOptions, StatsClient};
///
/// let client = Client::new("127.0.0.1:8125", ClientOptions::default()).unwrap();
///
/// // With static string tags
/// let _ = gauge!(client, "connections.active", 100.0, "pool:main", "db:users");
///
/// // With mixed static and owned string tags
/// let _ = gauge!(client, "queue.depth", 12.0, "service:web", format!("shard:{}", 3));
///
/// // With no tags
/// let _ = gauge!(client, "memory.usage", 512.0);
/// ```
#[macro_export]
macro_rules! gauge {
    ($client:expr, $metric:expr, $value:expr $(, $tag:expr)+ $(,)?) => {
        $client.gauge(
            $metric,
            $value,
            &[$(::core::convert::AsRef::<str>::as_ref(&$tag)),+],
            1.0,
        )
    };
    ($client:expr, $metric:expr, $value:expr $(,)?) => {
        $client.gauge($metric, $value, $crate::NO_TAGS, 1.0)
    };
}

/// Macro for adding to a counter with a sample rate of `1.0` and a variable
/// number of tags.
///
/// # Examples
///
/// ```no_run
/// use rylv_dogstatsd::{count, Client, ClientOptions, StatsClient};
///
/// let client = Client::new("127.0.0.1:8125", ClientOptions::default()).unwrap();
///
/// let _ = count!(client, "requests.total", 1, "endpoint:api", "method:get");
/// let _ = count!(client, "errors.total", -2);
/// ```
#[macro_export]
macro_rules! count {
    ($client:expr, $metric:expr, $delta:expr $(, $tag:expr)+ $(,)?) => {
        $client.count(
            $metric,
            $delta,
            &[$(::core::convert::AsRef::<str>::as_ref(&$tag)),+],
            1.0,
        )
    };
    ($client:expr, $metric:expr, $delta:expr $(,)?) => {
        $client.count($metric, $delta, $crate::NO_TAGS, 1.0)
    };
}

/// Macro for recording a histogram sample with a sample rate of `1.0` and a
/// variable number of tags.
///
/// # Examples
///
/// ```no_run
/// use rylv_dogstatsd::{histogram, Client, ClientOptions, StatsClient};
///
/// let client = Client::new("127.0.0.1:8125", ClientOptions::default()).unwrap();
///
/// let _ = histogram!(client, "request.duration", 100.0, "endpoint:api");
/// let _ = histogram!(client, "response.size", 1024.0);
/// ```
#[macro_export]
macro_rules! histogram {
    ($client:expr, $metric:expr, $value:expr $(, $tag:expr)+ $(,)?) => {
        $client.histogram(
            $metric,
            $value,
            &[$(::core::convert::AsRef::<str>::as_ref(&$tag)),+],
            1.0,
        )
    };
    ($client:expr, $metric:expr, $value:expr $(,)?) => {
        $client.histogram($metric, $value, $crate::NO_TAGS, 1.0)
    };
}

/// Macro for recording a set member with a sample rate of `1.0` and a
/// variable number of tags.
///
/// # Examples
///
/// ```no_run
/// use rylv_dogstatsd::{set, Client, ClientOptions, StatsClient};
///
/// let client = Client::new("127.0.0.1:8125", ClientOptions::default()).unwrap();
///
/// let _ = set!(client, "users.unique", "user-42", "endpoint:login");
/// let _ = set!(client, "hosts.seen", "web-01");
/// ```
#[macro_export]
macro_rules! set {
    ($client:expr, $metric:expr, $value:expr $(, $tag:expr)+ $(,)?) => {
        $client.set(
            $metric,
            $value,
            &[$(::core::convert::AsRef::<str>::as_ref(&$tag)),+],
            1.0,
        )
    };
    ($client:expr, $metric:expr, $value:expr $(,)?) => {
        $client.set($metric, $value, $crate::NO_TAGS, 1.0)
    };
}
