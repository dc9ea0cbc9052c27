use std::{
    env,
    fmt::Display,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            host: try_load("RUST_HOST", "0.0.0.0")?,
            port: try_load("RUST_PORT", "3000")?,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Invalid {key} value {value:?}: {e}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_used_when_unset() {
        let port: u16 = try_load("MENU_TEST_UNSET_PORT", "3000").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_invalid_value() {
        let port = try_load::<u16>("MENU_TEST_UNSET_PORT", "not-a-port");
        assert!(port.is_err());
    }

    #[test]
    fn test_address() {
        let config = Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
        };

        assert_eq!(config.address().to_string(), "127.0.0.1:8080");
    }
}
