use envconfig::Envconfig;

/// Runtime configuration, read from the process environment (and `.env`).
#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    #[envconfig(from = "DATABASE_URL")]
    pub database_url: String,

    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PORT", default = "5000")]
    pub port: u16,

    #[envconfig(from = "DB_POOL_SIZE", default = "10")]
    pub pool_size: u32,

    /// Upper bound on how long a request waits for a pooled connection.
    #[envconfig(from = "DB_POOL_TIMEOUT_SECS", default = "5")]
    pub pool_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call the API, or `*` for any.
    #[envconfig(from = "CORS_ALLOWED_ORIGINS", default = "*")]
    pub cors_allowed_origins: String,
}
