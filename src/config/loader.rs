//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::PanelConfig;
use crate::config::validation::validate_config;
use crate::error::ValidationError;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err.message())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PanelConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    load_config_str(&content)
}

/// Parse and validate configuration from TOML text.
pub fn load_config_str(content: &str) -> Result<PanelConfig, ConfigError> {
    let config: PanelConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = load_config_str(
            r#"
            [client]
            id = "hsd-main"
            chain = "handshake"

            [connection]
            host = "panel.local"
            ssl = true
            port = 443
            "#,
        )
        .unwrap();

        assert_eq!(config.client.id.as_deref(), Some("hsd-main"));
        assert_eq!(config.client.base_path, "/clients");
        assert_eq!(config.connection.timeout_secs, 30);
        assert_eq!(config.transactions.copy.send, "Sent");
    }

    #[test]
    fn test_invalid_config_reports_validation() {
        let err = load_config_str("[client]\nchain = \"dogecoin\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("dogecoin is not a supported chain"));
    }

    #[test]
    fn test_parse_error() {
        let err = load_config_str("[client\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[explorer]\nnetwork = \"testnet\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.explorer.network, "testnet");

        let missing = load_config(Path::new("/nonexistent/panel.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
