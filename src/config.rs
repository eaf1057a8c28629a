//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::api::routes::check_route_path;
use crate::error::{AppError, Result};

/// Which deployment's greeting is served on `GET /`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Greeting {
    /// Plain-text team greeting.
    #[default]
    RegularSnails,
    /// Plain-text Luxta placeholder.
    Luxta,
    /// Rendered `home` page.
    Home,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Routes ===
    /// Greeting variant served on `/`.
    #[serde(default)]
    pub greeting: Greeting,

    /// Mount path of the "new HTTP API function" route.
    #[serde(default = "default_my_api_path")]
    pub my_api_path: String,

    /// Expose Prometheus metrics on `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_my_api_path() -> String {
    "/jtrejomyapi".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            greeting: Greeting::default(),
            my_api_path: default_my_api_path(),
            metrics_enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        if self.host.parse::<IpAddr>().is_err() {
            return Err(AppError::InvalidConfig(format!(
                "HOST must be an IP address, got {:?}",
                self.host
            )));
        }

        if check_route_path(&self.my_api_path).is_err() {
            return Err(AppError::InvalidConfig(format!(
                "MY_API_PATH must be a literal path starting with '/', got {:?}",
                self.my_api_path
            )));
        }

        Ok(())
    }

    /// Socket address to bind the listener on.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppError::InvalidConfig(format!("invalid HOST {:?}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
