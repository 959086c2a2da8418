//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use rollcall_core::RollcallError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader.
///
/// Sources are applied in order:
/// 1. `config/default.toml` - Default values
/// 2. `config/{environment}.toml` - Environment-specific overrides
/// 3. `config/local.toml` - Local overrides (not committed)
/// 4. Environment variables with the `ROLLCALL_` prefix
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    pub fn load(config_dir: &str) -> Result<AppConfig, RollcallError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("ROLLCALL_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("ROLLCALL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| RollcallError::internal(format!("configuration error: {}", e)))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| RollcallError::internal(format!("configuration error: {}", e)))?;

        Ok(app_config)
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<AppConfig, RollcallError> {
        Self::load("./config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_directory_falls_back_to_defaults() {
        let config = ConfigLoader::load("./does-not-exist").unwrap();
        assert_eq!(config.app.name, "rollcall");
        assert_eq!(config.server.rest_port, 8080);
    }
}
