//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) and responses are read into a
//! 512-byte buffer; anything longer is cut off by the socket.

use super::{DnsTransport, TransportResponse};
use crate::dns::wire::MAX_UDP_PAYLOAD;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// DNS over UDP transport
pub struct UdpTransport {
    timeout: Duration,
    retries: u32,
}

impl UdpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            retries: 0,
        }
    }

    /// Extra attempts made after a timed-out exchange.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    async fn exchange_once(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_error(server, "Failed to bind UDP socket", e))?;

        socket
            .connect(server)
            .await
            .map_err(|e| transport_error(server, "Failed to connect UDP socket", e))?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| transport_error(server, "Failed to send UDP query", e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_PAYLOAD];

        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| transport_error(server, "Failed to receive UDP response", e))?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let mut attempt = 0;

        loop {
            match self.exchange_once(server, message_bytes).await {
                Ok(bytes) => {
                    return Ok(TransportResponse {
                        bytes,
                        protocol_used: "UDP",
                    })
                }
                Err(DomainError::TransportTimeout { .. }) if attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        server = %server,
                        attempt = attempt,
                        retries = self.retries,
                        "UDP query timed out, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn transport_error(server: SocketAddr, context: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        message: format!("{}: {}", context, e),
    }
}
