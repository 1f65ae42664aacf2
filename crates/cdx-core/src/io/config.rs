use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub bond_length: f64,
    pub max_page_height: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bond_length: 30.0,
            max_page_height: 64.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid value for '{field}': {value} (must be finite and positive)")]
    Invalid { field: &'static str, value: f64 },
}

impl ExportConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check("bond_length", self.bond_length)?;
        Self::check("max_page_height", self.max_page_height)
    }

    fn check(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Invalid { field, value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_matches_standard_drawing_settings() {
        let config = ExportConfig::default();
        assert_eq!(config.bond_length, 30.0);
        assert_eq!(config.max_page_height, 64.0);
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("export.toml");
        fs::write(&file_path, "bond_length = 14.4\nmax_page_height = 40.0\n").unwrap();

        let config = ExportConfig::load(&file_path).unwrap();
        assert_eq!(config.bond_length, 14.4);
        assert_eq!(config.max_page_height, 40.0);
    }

    #[test]
    fn load_applies_defaults_for_missing_fields() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        fs::write(&file_path, "bond_length = 40.0\n").unwrap();

        let config = ExportConfig::load(&file_path).unwrap();
        assert_eq!(config.bond_length, 40.0);
        assert_eq!(config.max_page_height, 64.0);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("non_existent.toml");
        let result = ExportConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.toml");
        fs::write(&file_path, "this is not toml").unwrap();
        let result = ExportConfig::load(&file_path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn load_rejects_non_positive_bond_length() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("zero.toml");
        fs::write(&file_path, "bond_length = 0.0\n").unwrap();

        let result = ExportConfig::load(&file_path);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "bond_length",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let config = ExportConfig {
            bond_length: 30.0,
            max_page_height: f64::NAN,
        };
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "max_page_height",
                ..
            })
        ));
    }
}
