use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Port the server binds when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Config for a specific port on the loopback interface.
    pub fn with_port(port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port),
        }
    }

    /// Read the listening port from the `PORT` environment variable,
    /// falling back to [`DEFAULT_PORT`].
    pub fn from_env() -> ServerResult<Self> {
        match std::env::var("PORT") {
            Ok(raw) => {
                let port: u16 = raw
                    .parse()
                    .map_err(|_| ServerError::Config(format!("invalid PORT value: {raw:?}")))?;
                Ok(Self::with_port(port))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_port(DEFAULT_PORT)
    }
}
