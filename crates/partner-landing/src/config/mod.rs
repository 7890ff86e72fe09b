use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_ORDER_SYSTEM_URL: &str = "https://orders.comparepower.com/";
pub const DEFAULT_PARTNERS_DATA_PATH: &str = "data/partners.json";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the landing service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub partners: PartnersConfig,
    pub orders: OrderSystemConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let data_path = env::var("PARTNERS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PARTNERS_DATA_PATH));

        let order_url = env::var("ORDER_SYSTEM_URL")
            .unwrap_or_else(|_| DEFAULT_ORDER_SYSTEM_URL.to_string());
        let orders = OrderSystemConfig::parse(&order_url)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            partners: PartnersConfig { data_path },
            orders,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the generated partner dataset.
#[derive(Debug, Clone)]
pub struct PartnersConfig {
    pub data_path: PathBuf,
}

/// Origin of the external order system that receives lead redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSystemConfig {
    pub origin: Url,
}

impl OrderSystemConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let origin = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidOrderUrl {
            value: raw.to_string(),
            source,
        })?;

        if origin.cannot_be_a_base() || !matches!(origin.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedOrderUrl {
                value: raw.to_string(),
            });
        }

        Ok(Self { origin })
    }
}

impl Default for OrderSystemConfig {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORDER_SYSTEM_URL).expect("default order URL is valid"),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidOrderUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedOrderUrl {
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidOrderUrl { value, .. } => {
                write!(f, "ORDER_SYSTEM_URL '{value}' is not a valid absolute URL")
            }
            ConfigError::UnsupportedOrderUrl { value } => {
                write!(f, "ORDER_SYSTEM_URL '{value}' must be an http(s) origin")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::UnsupportedOrderUrl { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidOrderUrl { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("PARTNERS_DATA_PATH");
        env::remove_var("ORDER_SYSTEM_URL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.partners.data_path,
            PathBuf::from(DEFAULT_PARTNERS_DATA_PATH)
        );
        assert_eq!(config.orders, OrderSystemConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "not-a-port");
        let err = AppConfig::load().expect_err("port must be numeric");
        assert!(matches!(err, ConfigError::InvalidPort));
        reset_env();
    }

    #[test]
    fn order_url_override_is_validated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ORDER_SYSTEM_URL", "https://orders.example.test/start");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.orders.origin.as_str(),
            "https://orders.example.test/start"
        );

        env::set_var("ORDER_SYSTEM_URL", "mailto:sales@example.test");
        let err = AppConfig::load().expect_err("mailto is not an origin");
        assert!(matches!(err, ConfigError::UnsupportedOrderUrl { .. }));

        env::set_var("ORDER_SYSTEM_URL", "orders");
        let err = AppConfig::load().expect_err("relative URL rejected");
        assert!(matches!(err, ConfigError::InvalidOrderUrl { .. }));
        reset_env();
    }
}
