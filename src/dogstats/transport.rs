use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use tracing::{debug, warn};

use crate::{MetricResult, MetricsError};

/// Datagram transport used by the client to ship formatted metrics.
///
/// Implement this trait to send metrics somewhere other than a UDP socket,
/// for example an in-memory sink in tests.
pub trait Transport: Send {
    /// Sends `buf` as a single datagram, returning the number of bytes written.
    ///
    /// # Errors
    /// Returns the underlying I/O error. Callers treat it as non-fatal.
    fn send(&self, buf: &[u8]) -> std::io::Result<usize>;

    /// Releases the transport. Called at most once, when the client is closed.
    ///
    /// # Errors
    /// Returns `MetricResult::Err` if the resources could not be released cleanly.
    fn close(self: Box<Self>) -> MetricResult<()> {
        Ok(())
    }
}

/// A UDP socket connected to a single dogstatsd destination.
#[derive(Debug)]
pub struct UdpTransport {
    sock: UdpSocket,
    destination_addr: SocketAddr,
}

impl UdpTransport {
    /// Resolves `addr`, binds an ephemeral local socket of the same address
    /// family and connects it to the first resolved address.
    ///
    /// # Errors
    /// Returns `MetricsError::Resolve` if `addr` does not resolve and
    /// `MetricsError::StdIo` if the socket cannot be bound or connected.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> MetricResult<Self> {
        let destination_addr = addr
            .to_socket_addrs()
            .map_err(|err| MetricsError::Resolve(err.to_string()))?
            .next()
            .ok_or_else(|| MetricsError::Resolve("no address found".to_string()))?;

        let bind_addr = if destination_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let sock = UdpSocket::bind(bind_addr)?;
        sock.connect(destination_addr)?;
        debug!("dogstatsd transport connected to {destination_addr}");

        Ok(Self {
            sock,
            destination_addr,
        })
    }

    /// Address the datagrams are sent to.
    #[must_use]
    pub const fn destination(&self) -> SocketAddr {
        self.destination_addr
    }

    /// Local address the socket is bound to.
    ///
    /// # Errors
    /// Returns the I/O error reported by the socket.
    pub fn local_addr(&self) -> MetricResult<SocketAddr> {
        Ok(self.sock.local_addr()?)
    }
}

impl Transport for UdpTransport {
    fn send(&self, buf: &[u8]) -> std::io::Result<usize> {
        let r = self.sock.send(buf);
        if let Err(ref err) = r {
            warn!("UDP send error: {err}");
        }
        r
    }

    fn close(self: Box<Self>) -> MetricResult<()> {
        debug!("dogstatsd transport to {} closed", self.destination_addr);
        drop(self);
        Ok(())
    }
}
