use crate::workflows::compensation::Locale;
use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PROFILE_BASE_URL: &str = "https://app.bamboohr.com/employees/employee.php?id=";
pub const DEFAULT_LOCATION_ID: &str = "1200146";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_WORK_LOCATION: &str = "Remote";

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub notifications: NotificationConfig,
    pub requisitions: RequisitionConfig,
    pub onboarding: OnboardingConfig,
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
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat { value: raw })?,
            Err(_) => LogFormat::default(),
        };

        let locale = match env::var("NOTIFY_LOCALE") {
            Ok(raw) => Locale::parse(&raw).ok_or(ConfigError::InvalidLocale { value: raw })?,
            Err(_) => Locale::default(),
        };
        let profile_base_url = env::var("NOTIFY_PROFILE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROFILE_BASE_URL.to_string());
        let utc_offset = match env::var("NOTIFY_UTC_OFFSET_MINUTES") {
            Ok(raw) => parse_offset_minutes(&raw)?,
            Err(_) => Utc.fix(),
        };

        let location_id =
            env::var("REQUISITION_LOCATION_ID").unwrap_or_else(|_| DEFAULT_LOCATION_ID.to_string());
        let currency =
            env::var("REQUISITION_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());

        let location =
            env::var("ONBOARDING_LOCATION").unwrap_or_else(|_| DEFAULT_WORK_LOCATION.to_string());
        let sandbox = match env::var("ONBOARDING_SANDBOX") {
            Ok(raw) => parse_flag("ONBOARDING_SANDBOX", raw)?,
            Err(_) => false,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                log_format,
            },
            notifications: NotificationConfig {
                locale,
                profile_base_url,
                utc_offset,
            },
            requisitions: RequisitionConfig {
                location_id,
                currency,
            },
            onboarding: OnboardingConfig {
                location,
                sandbox,
                ..OnboardingConfig::default()
            },
        })
    }
}

fn parse_offset_minutes(raw: &str) -> Result<FixedOffset, ConfigError> {
    let minutes = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::InvalidUtcOffset)?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ConfigError::InvalidUtcOffset)
}

fn parse_flag(key: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value: raw }),
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
    /// `EnvFilter` directives, e.g. `info` or `warn,hr_automation=debug`.
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Rendering options for compensation change notifications.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub locale: Locale,
    /// Employee id is appended verbatim to this prefix.
    pub profile_base_url: String,
    pub utc_offset: FixedOffset,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            utc_offset: Utc.fix(),
        }
    }
}

/// Constants stamped into every requisition payload.
#[derive(Debug, Clone)]
pub struct RequisitionConfig {
    pub location_id: String,
    pub currency: String,
}

impl Default for RequisitionConfig {
    fn default() -> Self {
        Self {
            location_id: DEFAULT_LOCATION_ID.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Fixed employment terms stamped onto every new BambooHR employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingConfig {
    pub employment_status: String,
    pub pay_type: String,
    pub pay_per: String,
    pub exempt: String,
    pub location: String,
    /// Prefixes names with `TEST_` and replaces work emails with
    /// `example.com` addresses so trial runs never collide with real staff.
    pub sandbox: bool,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            employment_status: "Full-Time".to_string(),
            pay_type: "Salary".to_string(),
            pay_per: "Year".to_string(),
            exempt: "Exempt".to_string(),
            location: DEFAULT_WORK_LOCATION.to_string(),
            sandbox: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },
    #[error("APP_LOG_FORMAT '{value}' is not supported (expected compact or json)")]
    InvalidLogFormat { value: String },
    #[error("NOTIFY_LOCALE '{value}' is not supported (expected uk or en)")]
    InvalidLocale { value: String },
    #[error("NOTIFY_UTC_OFFSET_MINUTES must be whole minutes within +/- 24 hours")]
    InvalidUtcOffset,
    #[error("{key} must be a boolean flag, got '{value}'")]
    InvalidFlag { key: &'static str, value: String },
}
