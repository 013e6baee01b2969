use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{Result, ServiceError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONCURRENCY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    addr: SocketAddr,
    max_concurrency: usize,
}

/// Listens on every interface at [DEFAULT_PORT].
impl Default for Config {
    fn default() -> Self {
        Config {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl Config {
    /// Read the listening port from `PORT`, falling back to [DEFAULT_PORT]
    /// when it is unset.
    pub fn from_env() -> Result<Self> {
        Config::from_port_var(env::var("PORT").ok().as_deref())
    }

    fn from_port_var(port: Option<&str>) -> Result<Self> {
        let config = Config::default();
        match port {
            None => Ok(config),
            Some(port) => {
                let port = port
                    .trim()
                    .parse::<u16>()
                    .map_err(|err| ServiceError::InvalidPort(format!("{}: {}", port, err)))?;
                Ok(config.with_port(port))
            }
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Cap on requests handled at the same time across all connections.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max.max(1);
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}
