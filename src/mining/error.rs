use super::types::Algorithm;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("min_support must be in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    #[error("min_confidence must be in [0, 1], got {0}")]
    InvalidMinConfidence(f64),

    #[error("invalid mining config: {0}")]
    Config(String),

    #[error("{algorithm} mining was cancelled")]
    Cancelled { algorithm: Algorithm },
}

pub type Result<T> = std::result::Result<T, MiningError>;

/// Rejects NaN as well as values outside `(0, 1]`.
pub fn validate_min_support(min_support: f64) -> Result<()> {
    if min_support > 0.0 && min_support <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidMinSupport(min_support))
    }
}

pub fn validate_min_confidence(min_confidence: f64) -> Result<()> {
    if (0.0..=1.0).contains(&min_confidence) {
        Ok(())
    } else {
        Err(MiningError::InvalidMinConfidence(min_confidence))
    }
}
