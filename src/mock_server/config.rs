//! Mock server configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Default artificial processing delay
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Delay before answering each submission, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl MockServerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// URL the form should post to when pointed at this server
    pub fn endpoint_url(&self) -> String {
        format!("http://{}/api/onboard", self.addr)
    }
}
