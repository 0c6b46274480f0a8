use database::db::{ConfigError, DatabaseConfig};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Reads `BIND_ADDRESS` and the database settings, loading `.env` first
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_env()?;
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            bind_address,
            database,
        })
    }
}
