//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::RegistrarConfig;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<RegistrarConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;
        debug!(
            path = %path.display(),
            entities = config.entities.len(),
            "Loaded registrar config"
        );
        Ok(config)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<RegistrarConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: RegistrarConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }
}
