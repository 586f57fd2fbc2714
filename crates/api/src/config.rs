use fixhub_ai::GeminiConfig;

/// Server configuration, read once at startup.
///
/// Every field has a default suitable for local development; production
/// overrides them through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Allowed CORS origins, comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds.
    pub shutdown_timeout_secs: u64,
    /// Upstream Gemini connection settings.
    pub gemini: GeminiConfig,
}

/// Read an env var, falling back to `default` when unset.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an env var. Startup is the one place where panicking
/// on bad configuration is the right call.
fn parse_env_or<T: std::str::FromStr>(key: &str, default: &str) -> T {
    env_or(key, default)
        .parse()
        .unwrap_or_else(|_| panic!("{key} must be a valid {}", std::any::type_name::<T>()))
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// | Env var                 | Default                                     |
    /// |-------------------------|---------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                   |
    /// | `PORT`                  | `3000`                                      |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                     |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                        |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                                        |
    /// | `GEMINI_API_URL`        | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_API_KEY`        | (empty)                                     |
    /// | `GEMINI_TEXT_MODEL`     | `gemini-2.5-flash`                          |
    /// | `GEMINI_IMAGE_MODEL`    | `gemini-2.5-flash-image-preview`            |
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let gemini = GeminiConfig {
            api_url: env_or("GEMINI_API_URL", "https://generativelanguage.googleapis.com"),
            api_key: env_or("GEMINI_API_KEY", ""),
            text_model: env_or("GEMINI_TEXT_MODEL", "gemini-2.5-flash"),
            image_model: env_or("GEMINI_IMAGE_MODEL", "gemini-2.5-flash-image-preview"),
        };

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env_or("PORT", "3000"),
            cors_origins,
            request_timeout_secs: parse_env_or("REQUEST_TIMEOUT_SECS", "30"),
            shutdown_timeout_secs: parse_env_or("SHUTDOWN_TIMEOUT_SECS", "30"),
            gemini,
        }
    }
}
