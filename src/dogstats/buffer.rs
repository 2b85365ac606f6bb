use tracing::{debug, warn};

use super::transport::Transport;
use crate::MetricResult;

/// Payload size above which a batched datagram risks fragmentation on a
/// typical 1500 byte MTU path.
pub const MAX_SAFE_DATAGRAM_SIZE: usize = 1432;

// Upper bound on the line slots reserved up front; larger thresholds grow on demand.
const MAX_PREALLOCATED_LINES: usize = 64;

/// Ordered queue of formatted lines waiting to be sent as one datagram.
///
/// With a threshold of `0` every line is sent on its own. Otherwise lines
/// accumulate until the queue holds `threshold` of them, at which point the
/// whole queue is joined with `\n` and sent in the same call.
///
/// The buffer is flushed by line count only. Long names or many tags can
/// produce a joined payload above [`MAX_SAFE_DATAGRAM_SIZE`]; it is still
/// sent, and a warning is logged.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<String>,
    threshold: usize,
    payload: String,
}

impl CommandBuffer {
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            commands: Vec::with_capacity(threshold.min(MAX_PREALLOCATED_LINES)),
            threshold,
            payload: String::new(),
        }
    }

    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Queues `line`, sending it right away when unbuffered or flushing the
    /// queue when it reaches the threshold.
    ///
    /// # Errors
    /// Returns the transport error of the send or flush triggered by this call.
    pub fn append(&mut self, line: String, transport: &dyn Transport) -> MetricResult<()> {
        if self.threshold == 0 {
            transport.send(line.as_bytes())?;
            return Ok(());
        }

        self.commands.push(line);
        if self.commands.len() >= self.threshold {
            self.flush(transport)?;
        }
        Ok(())
    }

    /// Sends every queued line as one newline-joined datagram.
    ///
    /// The queue is emptied whether or not the send succeeds; failed lines are
    /// dropped, not retried.
    ///
    /// # Errors
    /// Returns the transport error, if any.
    pub fn flush(&mut self, transport: &dyn Transport) -> MetricResult<()> {
        if self.is_empty() {
            return Ok(());
        }

        self.payload.clear();
        let mut iter = self.commands.iter();
        if let Some(command) = iter.next() {
            self.payload.push_str(command);
        }
        for command in iter {
            self.payload.push('\n');
            self.payload.push_str(command);
        }

        let count = self.commands.len();
        self.commands.clear();

        if count > 1 && self.payload.len() > MAX_SAFE_DATAGRAM_SIZE {
            warn!(
                "flushing {count} metrics in a {} byte datagram, above {MAX_SAFE_DATAGRAM_SIZE}",
                self.payload.len()
            );
        }

        let result = transport.send(self.payload.as_bytes());
        self.payload.clear();
        debug!("flushed {count} buffered metrics");
        result?;
        Ok(())
    }

    /// Changes the threshold, flushing queued lines that the new threshold
    /// no longer allows to wait.
    ///
    /// # Errors
    /// Returns the transport error of the triggered flush.
    pub fn set_threshold(
        &mut self,
        threshold: usize,
        transport: &dyn Transport,
    ) -> MetricResult<()> {
        self.threshold = threshold;
        if threshold == 0 || self.commands.len() >= threshold {
            self.flush(transport)?;
        }
        Ok(())
    }
}
