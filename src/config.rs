//! Client, transport and discovery configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};

use crate::errors::Error;
use crate::protocol;

type Result<T> = std::result::Result<T, Error>;

/// Bounded retry of transient failures (connect errors and timeouts).
///
/// Protocol and parse errors are never retried.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Attempts made after the first one fails.
    pub max_retries: u32,
    /// Delay before each retry; the last entry repeats when retries outnumber it.
    #[serde_as(as = "Vec<DurationMilliSeconds<u64>>")]
    pub delays: Vec<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 0,
            delays: vec![Duration::from_millis(250)],
        }
    }
}

impl RetryPolicy {
    /// No retries: one attempt per call.
    pub fn none() -> Self {
        Self::default()
    }

    /// Retry up to `max_retries` times with a fixed delay.
    pub fn fixed(max_retries: u32, delay: Duration) -> Self {
        RetryPolicy {
            max_retries,
            delays: vec![delay],
        }
    }

    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        let idx = (attempt as usize).min(self.delays.len().saturating_sub(1));
        self.delays.get(idx).copied().unwrap_or_default()
    }
}

/// Deadlines and retry behaviour of one command exchange.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub connect_timeout: Duration,
    /// Covers writing the command and reading the reply line.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub read_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            connect_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(2),
            retry: RetryPolicy::default(),
        }
    }
}

/// Configuration of a [`crate::Hub`] client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Command port on the hub.
    pub port: u16,
    pub transport: TransportConfig,
    /// Accepted status-reply header tokens, tried in order.
    pub response_headers: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            port: protocol::COMMAND_PORT,
            transport: TransportConfig::default(),
            response_headers: protocol::RESPONSE_HEADERS
                .iter()
                .map(|h| h.to_string())
                .collect(),
        }
    }
}

impl ClientConfig {
    /// Load from JSON; missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use yeelight_hub_rs::ClientConfig;
    ///
    /// let config = ClientConfig::from_json(r#"{"port": 4000}"#).unwrap();
    /// assert_eq!(config.port, 4000);
    /// assert_eq!(config.response_headers, vec!["GLB", "GL"]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }
}

/// Configuration of a discovery query.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Where the search datagram is sent.
    pub target: String,
    /// Local address the query socket binds to.
    pub bind_addr: String,
    /// Value of the `ST` header.
    pub service_type: String,
    /// How long to wait for the single reply.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            target: protocol::SSDP_TARGET.to_string(),
            bind_addr: "0.0.0.0:0".to_string(),
            service_type: protocol::SERVICE_TYPE.to_string(),
            timeout: Duration::from_secs(3),
        }
    }
}

impl DiscoveryConfig {
    /// Load from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.port, 10003);
        assert_eq!(config.transport.retry.max_retries, 0);
        assert_eq!(config.transport.read_timeout, Duration::from_secs(2));

        let discovery = DiscoveryConfig::default();
        assert_eq!(discovery.target, "239.255.255.250:1900");
        assert_eq!(discovery.service_type, "yeelink:yeebox");
    }

    #[test]
    fn test_durations_in_millis() {
        let config = ClientConfig::from_json(
            r#"{"transport": {"read_timeout": 1500, "retry": {"max_retries": 2, "delays": [100, 400]}}}"#,
        )
        .unwrap();
        assert_eq!(config.transport.read_timeout, Duration::from_millis(1500));
        assert_eq!(config.transport.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.transport.retry.max_retries, 2);
        assert_eq!(config.transport.retry.delay(0), Duration::from_millis(100));
        assert_eq!(config.transport.retry.delay(5), Duration::from_millis(400));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DiscoveryConfig::from_json("{\"timeout\": \"soon\"}"),
            Err(Error::JsonLoad(_))
        ));
    }

    #[test]
    fn test_empty_delays() {
        let policy = RetryPolicy {
            max_retries: 1,
            delays: vec![],
        };
        assert_eq!(policy.delay(0), Duration::ZERO);
    }
}
