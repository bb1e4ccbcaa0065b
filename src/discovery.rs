//! Hub discovery via SSDP multicast.

use std::net::SocketAddr;

use log::debug;

use crate::config::{ClientConfig, DiscoveryConfig};
use crate::errors::Error;
use crate::hub::Hub;
use crate::protocol::{self, LOCATION_MARKER, MAC_MARKER};
use crate::runtime::{self, AsyncUdpSocket, UdpSocket};

type Result<T> = std::result::Result<T, Error>;

const REPLY_BUFFER: usize = 1024;

/// A hub that answered a discovery query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredHub {
    /// Address taken from the reply's `LOCATION` header.
    pub address: String,
    /// Where the reply datagram came from.
    pub source: SocketAddr,
}

impl DiscoveredHub {
    /// Convert this discovered hub into a [`Hub`] client.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let found = discover_hub(&DiscoveryConfig::default()).await?;
    /// let hub = found.into_hub(ClientConfig::default());
    /// ```
    pub fn into_hub(self, config: ClientConfig) -> Hub {
        Hub::with_config(&self.address, config)
    }
}

/// Find the hub on the local network.
///
/// Sends one search datagram to `config.target` and waits up to
/// `config.timeout` for a single reply. There is no retry.
///
/// # Examples
///
/// ```ignore
/// use yeelight_hub_rs::{DiscoveryConfig, discover_hub};
///
/// let found = discover_hub(&DiscoveryConfig::default()).await?;
/// println!("hub at {}", found.address);
/// ```
pub async fn discover_hub(config: &DiscoveryConfig) -> Result<DiscoveredHub> {
    let socket = UdpSocket::bind(&config.bind_addr)
        .await
        .map_err(|e| Error::socket("bind", e))?;

    let request = protocol::search_request(&config.service_type);
    socket
        .send_to(request.as_bytes(), &config.target)
        .await
        .map_err(|e| Error::discovery(format!("sending search to {}: {}", config.target, e)))?;
    debug!("sent discovery search to {}", config.target);

    let mut buffer = [0u8; REPLY_BUFFER];
    let (size, source) = runtime::timeout(config.timeout, socket.recv_from(&mut buffer))
        .await
        .map_err(|_| Error::timed_out("discovery", config.timeout))?
        .map_err(|e| Error::discovery(format!("receiving reply: {}", e)))?;

    let reply = String::from_utf8_lossy(&buffer[..size]);
    debug!("discovery reply from {}: {:?}", source, reply);

    let address = extract_location(&reply)?;
    Ok(DiscoveredHub { address, source })
}

/// Extract the text between `LOCATION: ` and the line break ahead of `MAC: `.
pub(crate) fn extract_location(reply: &str) -> Result<String> {
    let start = reply
        .find(LOCATION_MARKER)
        .map(|i| i + LOCATION_MARKER.len())
        .ok_or_else(|| Error::discovery("reply has no LOCATION header"))?;
    let end = reply
        .find(MAC_MARKER)
        .and_then(|i| i.checked_sub(2))
        .ok_or_else(|| Error::discovery("reply has no MAC header"))?;

    if end < start {
        return Err(Error::discovery(
            "LOCATION header does not precede MAC header",
        ));
    }

    reply
        .get(start..end)
        .map(String::from)
        .ok_or_else(|| Error::discovery("LOCATION value is not valid text"))
}
