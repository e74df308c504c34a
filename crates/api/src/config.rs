use serde::Deserialize;
use shared::jwt::{DEFAULT_LEEWAY_SECS, DEFAULT_TOKEN_TTL_SECS};
use shared::password::HashingParams;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    pub auth: AuthConfig,
    /// Time-series sink for `POST /data/temp`
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Server-side statement timeout; 0 disables it
    #[serde(default = "default_statement_timeout")]
    pub statement_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared by token issuing and verification
    pub jwt_secret: String,

    /// Token and cookie lifetime in seconds (default: 48 hours)
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,

    /// Clock skew tolerance when checking `exp`
    #[serde(default = "default_jwt_leeway")]
    pub leeway_secs: u64,

    /// Domain attribute of the Authentication cookie; host-only when unset
    #[serde(default)]
    pub cookie_domain: Option<String>,

    #[serde(default)]
    pub cookie_secure: bool,

    #[serde(default = "default_password_memory_kib")]
    pub password_memory_kib: u32,

    #[serde(default = "default_password_iterations")]
    pub password_iterations: u32,

    #[serde(default = "default_password_parallelism")]
    pub password_parallelism: u32,
}

#[derive(Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Base URL of the InfluxDB HTTP API, e.g. `http://localhost:8086`
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_telemetry_database")]
    pub database: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_telemetry_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            database: default_telemetry_database(),
            username: String::new(),
            password: String::new(),
            timeout_ms: default_telemetry_timeout_ms(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_max_connections() -> u32 {
    20
}
fn default_min_connections() -> u32 {
    2
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_idle_timeout() -> u64 {
    600
}
fn default_statement_timeout() -> u64 {
    15
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_token_ttl() -> i64 {
    DEFAULT_TOKEN_TTL_SECS
}
fn default_jwt_leeway() -> u64 {
    DEFAULT_LEEWAY_SECS
}
fn default_password_memory_kib() -> u32 {
    HashingParams::default().memory_kib
}
fn default_password_iterations() -> u32 {
    HashingParams::default().iterations
}
fn default_password_parallelism() -> u32 {
    HashingParams::default().parallelism
}
fn default_telemetry_database() -> String {
    "fleet".to_string()
}
fn default_telemetry_timeout_ms() -> u64 {
    5000
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("cookie_domain", &self.cookie_domain)
            .field("cookie_secure", &self.cookie_secure)
            .field("password_memory_kib", &self.password_memory_kib)
            .field("password_iterations", &self.password_iterations)
            .field("password_parallelism", &self.password_parallelism)
            .finish()
    }
}

impl std::fmt::Debug for TelemetryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryConfig")
            .field("enabled", &self.enabled)
            .field("url", &self.url)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl AuthConfig {
    /// Argon2 cost parameters for the credential hasher.
    pub fn hashing_params(&self) -> HashingParams {
        HashingParams {
            memory_kib: self.password_memory_kib,
            iterations: self.password_iterations,
            parallelism: self.password_parallelism,
        }
    }
}

impl DatabaseConfig {
    /// Pool settings in the shape the persistence crate expects.
    pub fn pool_config(&self) -> persistence::db::DatabaseConfig {
        persistence::db::DatabaseConfig {
            url: self.url.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            connect_timeout_secs: self.connect_timeout_secs,
            idle_timeout_secs: self.idle_timeout_secs,
            statement_timeout_secs: self.statement_timeout_secs,
        }
    }
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with FLEET__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FLEET").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration from embedded defaults plus overrides, without files.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30

            [database]
            url = ""
            max_connections = 20
            min_connections = 2
            connect_timeout_secs = 10
            idle_timeout_secs = 600
            statement_timeout_secs = 15

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [auth]
            jwt_secret = "test-secret"
            token_ttl_secs = 172800
            leeway_secs = 30
            cookie_secure = false
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.database.url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "FLEET__DATABASE__URL environment variable must be set".to_string(),
            ));
        }

        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "FLEET__AUTH__JWT_SECRET environment variable must be set".to_string(),
            ));
        }

        if self.auth.token_ttl_secs <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "token_ttl_secs must be positive".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigValidationError::InvalidValue(
                "min_connections cannot exceed max_connections".to_string(),
            ));
        }

        if self.telemetry.enabled && self.telemetry.url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "telemetry.url is required when telemetry is enabled".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
