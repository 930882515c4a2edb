/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Postgres connection string. Required.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A lone `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds. Unset means requests never time out.
    pub request_timeout_secs: Option<u64>,
}

/// Reasons the configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `DATABASE_URL`         | required  |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | unset     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "3000", "a valid u16")?;

        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) if !value.trim().is_empty() => Some(parse_value(
                "REQUEST_TIMEOUT_SECS",
                value,
                "a valid u64",
            )?),
            _ => None,
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
        })
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    parse_value(var, value, expected)
}

fn parse_value<T>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    let parsed: Result<T, _> = value.trim().parse();
    parsed.map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
