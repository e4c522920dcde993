//! Configuration for the package sorter

use parcelsort_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sorter configuration, usually loaded from YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SorterConfig {
    /// Classification thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Limits at which a package becomes bulky or heavy. All comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Volume at or above which a package is bulky (cm³)
    #[serde(default = "default_volume_cm3")]
    pub volume_cm3: f64,

    /// Single dimension at or above which a package is bulky (cm)
    #[serde(default = "default_dimension_cm")]
    pub dimension_cm: f64,

    /// Mass at or above which a package is heavy (kg)
    #[serde(default = "default_mass_kg")]
    pub mass_kg: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            volume_cm3: default_volume_cm3(),
            dimension_cm: default_dimension_cm(),
            mass_kg: default_mass_kg(),
        }
    }
}

impl Thresholds {
    /// Check that every threshold is finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("volume_cm3", self.volume_cm3),
            ("dimension_cm", self.dimension_cm),
            ("mass_kg", self.mass_kg),
        ];

        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::config(format!(
                    "threshold {} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl SorterConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("invalid sorter config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            "Loaded sorter config from {} (volume >= {} cm3, dimension >= {} cm, mass >= {} kg)",
            path.display(),
            config.thresholds.volume_cm3,
            config.thresholds.dimension_cm,
            config.thresholds.mass_kg
        );
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }
}

fn default_volume_cm3() -> f64 {
    1_000_000.0
}

fn default_dimension_cm() -> f64 {
    150.0
}

fn default_mass_kg() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.volume_cm3, 1_000_000.0);
        assert_eq!(t.dimension_cm, 150.0);
        assert_eq!(t.mass_kg, 20.0);
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
thresholds:
  volume_cm3: 500000
  mass_kg: 15.5
"#;

        let config = SorterConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.thresholds.volume_cm3, 500_000.0);
        assert_eq!(config.thresholds.dimension_cm, 150.0);
        assert_eq!(config.thresholds.mass_kg, 15.5);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SorterConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SorterConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let err = SorterConfig::from_yaml("thresholds:\n  mass_kg: 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("mass_kg"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = SorterConfig::from_yaml("thresholds: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thresholds:\n  dimension_cm: 120").unwrap();

        let config = SorterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.thresholds.dimension_cm, 120.0);
    }

    #[test]
    fn test_from_missing_file() {
        let err = SorterConfig::from_file("/nonexistent/parcelsort.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
