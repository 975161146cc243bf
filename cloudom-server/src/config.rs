//! Listener configuration read from the environment.

use std::net::SocketAddr;

use anyhow::Context;

pub const HOST_ENV: &str = "CLOUDOM_SUPPORT_HOST";
pub const PORT_ENV: &str = "CLOUDOM_SUPPORT_PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;

/// Largest chat request body read, in bytes.
pub const MAX_BODY_BYTES: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `CLOUDOM_SUPPORT_HOST` and `CLOUDOM_SUPPORT_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unparseable ports
    /// fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup(HOST_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup(PORT_ENV)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid host/port {}:{} for cloudom-support", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_host_and_port() {
        let config = ServerConfig::from_lookup(lookup(&[(HOST_ENV, "0.0.0.0"), (PORT_ENV, "9000")]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[(PORT_ENV, "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_host_is_an_error() {
        let config = ServerConfig { host: "not a host".into(), port: 1 };
        assert!(config.socket_addr().is_err());
    }
}
