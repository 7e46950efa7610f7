use super::error::{validate_min_confidence, validate_min_support, MiningError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of an orchestrated run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiningConfig {
    pub min_support: f64,
    /// Presentation threshold only: mining itself never filters on it.
    pub min_confidence: f64,
    pub remove_singletons: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.2,
            min_confidence: 0.5,
            remove_singletons: false,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_remove_singletons(mut self, remove_singletons: bool) -> Self {
        self.remove_singletons = remove_singletons;
        self
    }

    /// Parse and validate; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MiningError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_min_support(self.min_support)?;
        validate_min_confidence(self.min_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MiningConfig::default();
        assert_eq!(config.min_support, 0.2);
        assert_eq!(config.min_confidence, 0.5);
        assert!(!config.remove_singletons);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = MiningConfig::from_json(r#"{"minSupport": 0.4, "removeSingletons": true}"#)
            .unwrap();
        assert_eq!(config.min_support, 0.4);
        assert_eq!(config.min_confidence, 0.5);
        assert!(config.remove_singletons);
    }

    #[test]
    fn test_from_json_rejects() {
        assert_eq!(
            MiningConfig::from_json(r#"{"minSupport": 0.0}"#),
            Err(MiningError::InvalidMinSupport(0.0))
        );
        assert_eq!(
            MiningConfig::from_json(r#"{"minConfidence": 1.5}"#),
            Err(MiningError::InvalidMinConfidence(1.5))
        );
        assert!(matches!(
            MiningConfig::from_json("not json"),
            Err(MiningError::Config(_))
        ));
    }
}
