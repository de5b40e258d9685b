//! Startup configuration, read once from the environment.

use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const SITE_TITLE: &str = "SITE_TITLE";
    pub const OWNER_NAME: &str = "OWNER_NAME";
    pub const OWNER_TAGLINE: &str = "OWNER_TAGLINE";
    pub const OWNER_BIO: &str = "OWNER_BIO";
    pub const GITHUB_URL: &str = "GITHUB_URL";
    pub const LINKEDIN_URL: &str = "LINKEDIN_URL";
    /// Only the value "true" (any case) enables `/reset`.
    pub const ENABLE_RESET: &str = "ENABLE_RESET";
    pub const REDIS_HOST: &str = "REDIS_HOST";
    pub const REDIS_PORT: &str = "REDIS_PORT";
    pub const BIND_ADDR: &str = "BIND_ADDR";
    /// "redis" (default) or "memory"
    pub const STORE_BACKEND: &str = "STORE_BACKEND";
}

/// Default values
pub mod defaults {
    pub const SITE_TITLE: &str = "Visit Tracker Pro";
    pub const OWNER_NAME: &str = "Your Name";
    pub const OWNER_TAGLINE: &str = "DevOps & Cloud Enthusiast";
    pub const OWNER_BIO: &str = "DevOps Engineer who loves to automate with CI/CD, and \
        containerize all the things. This tiny app tracks visits and pins random \
        locations on a map to keep things fun.";
    pub const REDIS_HOST: &str = "redis";
    pub const REDIS_PORT: u16 = 6379;
    pub const BIND_ADDR: &str = "0.0.0.0:5002";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be a socket address like 0.0.0.0:5002, got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} must be \"redis\" or \"memory\", got {value:?}")]
    UnknownStoreBackend { var: &'static str, value: String },
}

/// Which [`crate::store::VisitStore`] implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Some(Self::Redis),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub site_title: String,
    pub owner_name: String,
    pub owner_tagline: String,
    pub owner_bio: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub enable_reset: bool,
    pub redis_host: String,
    pub redis_port: u16,
    pub bind_addr: SocketAddr,
    pub store_backend: StoreBackend,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup. A variable that is set but
    /// empty is taken as-is; defaults only apply to unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let redis_port = match lookup(env_vars::REDIS_PORT) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: env_vars::REDIS_PORT,
                value,
            })?,
            None => defaults::REDIS_PORT,
        };

        let bind_value = text(env_vars::BIND_ADDR, defaults::BIND_ADDR);
        let bind_addr = bind_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: env_vars::BIND_ADDR,
                value: bind_value.clone(),
            })?;

        let store_backend = match lookup(env_vars::STORE_BACKEND) {
            Some(value) => {
                StoreBackend::parse(&value).ok_or(ConfigError::UnknownStoreBackend {
                    var: env_vars::STORE_BACKEND,
                    value,
                })?
            }
            None => StoreBackend::Redis,
        };

        Ok(Self {
            site_title: text(env_vars::SITE_TITLE, defaults::SITE_TITLE),
            owner_name: text(env_vars::OWNER_NAME, defaults::OWNER_NAME),
            owner_tagline: text(env_vars::OWNER_TAGLINE, defaults::OWNER_TAGLINE),
            owner_bio: text(env_vars::OWNER_BIO, defaults::OWNER_BIO),
            github_url: text(env_vars::GITHUB_URL, ""),
            linkedin_url: text(env_vars::LINKEDIN_URL, ""),
            enable_reset: lookup(env_vars::ENABLE_RESET)
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            redis_host: text(env_vars::REDIS_HOST, defaults::REDIS_HOST),
            redis_port,
            bind_addr,
            store_backend,
        })
    }

    /// Connection URL for the Redis backend.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/", self.redis_host, self.redis_port)
    }
}
