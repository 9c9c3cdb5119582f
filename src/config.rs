//! Configuration management for the Karat ledger

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub token: TokenConfig,
}

/// Descriptive token metadata plus the supply minted at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Whole tokens credited to the deployer when the ledger is created.
    #[serde(default = "default_initial_supply")]
    pub initial_supply: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            symbol: default_symbol(),
            initial_supply: default_initial_supply(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
        }
    }
}

fn default_name() -> String {
    "ETC Token".to_string()
}

fn default_symbol() -> String {
    "ETC".to_string()
}

fn default_initial_supply() -> u64 {
    10_000
}

/// Load configuration from `ledger.toml` in the working directory, falling
/// back to built-in defaults when the file is absent.
pub fn load_config() -> Result<LedgerConfig, Box<dyn std::error::Error>> {
    load_config_from(Path::new("ledger.toml"))
}

pub fn load_config_from(path: &Path) -> Result<LedgerConfig, Box<dyn std::error::Error>> {
    let config_str = fs::read_to_string(path).unwrap_or_default();
    let config: LedgerConfig = if config_str.is_empty() {
        // Provide sane defaults when ledger.toml is absent
        LedgerConfig::default()
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    if config.token.name.is_empty() {
        return Err("token.name must be set in ledger.toml".into());
    }

    if config.token.symbol.is_empty() {
        return Err("token.symbol must be set in ledger.toml".into());
    }

    if config.token.initial_supply == 0 {
        return Err("token.initial_supply must be greater than zero".into());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("ledger.toml")).unwrap();
        assert_eq!(config.token.name, "ETC Token");
        assert_eq!(config.token.symbol, "ETC");
        assert_eq!(config.token.initial_supply, 10_000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.toml");
        fs::write(&path, "[token]\nsymbol = \"KAR\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.token.symbol, "KAR");
        assert_eq!(config.token.name, "ETC Token");
        assert_eq!(config.token.initial_supply, 10_000);
    }

    #[test]
    fn test_zero_initial_supply_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ledger.toml");
        fs::write(&path, "[token]\ninitial_supply = 0\n").unwrap();

        let result = load_config_from(&path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("initial_supply must be greater than zero"));
    }
}
