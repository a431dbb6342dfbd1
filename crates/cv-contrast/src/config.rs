//! Accent selection tunables.
//!
//! | Field          | Default | Meaning                                   |
//! |----------------|---------|-------------------------------------------|
//! | `min_contrast` | 7.0     | ratio the chosen text colour must reach   |
//! | `whitish`      | 735/470/110 | see [`crate::whitish`]                |
//! | `max_attempts` | 10 000  | rejection-sampling cap before falling back |
//!
//! Defaults reproduce the page's behaviour. The cap is an addition: with
//! the default thresholds roughly 60% of draws are accepted, so it is
//! never reached, but a misconfigured threshold set that rejects every
//! colour still terminates.

use thiserror::Error;

use crate::contrast::MIN_CONTRAST_RATIO;
use crate::whitish::WhitishThresholds;

/// Default rejection-sampling cap.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum contrast {0} is outside 1.0..=21.0")]
    MinContrastOutOfRange(f64),

    #[error("max attempts must be at least 1")]
    ZeroAttempts,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentConfig {
    pub min_contrast: f64,
    pub whitish: WhitishThresholds,
    pub max_attempts: u32,
}

impl AccentConfig {
    #[must_use]
    pub const fn with_min_contrast(self, min_contrast: f64) -> Self {
        Self {
            min_contrast,
            ..self
        }
    }

    #[must_use]
    pub const fn with_whitish(self, whitish: WhitishThresholds) -> Self {
        Self { whitish, ..self }
    }

    #[must_use]
    pub const fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Check the values are usable.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MinContrastOutOfRange`] when the ratio can never be
    /// met or is below 1, [`ConfigError::ZeroAttempts`] when no draw
    /// would ever be made.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(1.0..=21.0).contains(&self.min_contrast) {
            return Err(ConfigError::MinContrastOutOfRange(self.min_contrast));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(self)
    }
}

impl Default for AccentConfig {
    fn default() -> Self {
        Self {
            min_contrast: MIN_CONTRAST_RATIO,
            whitish: WhitishThresholds::DEFAULT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = AccentConfig::default();
        assert_eq!(config.whitish, WhitishThresholds::DEFAULT);
        assert_eq!(config.max_attempts, 10_000);
        assert!((config.min_contrast - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_overrides() {
        let config = AccentConfig::default()
            .with_min_contrast(4.5)
            .with_max_attempts(3);
        assert_eq!(config.validate(), Ok(config));
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn rejects_impossible_contrast() {
        let config = AccentConfig::default().with_min_contrast(22.0);
        assert_eq!(config.validate(), Err(ConfigError::MinContrastOutOfRange(22.0)));
    }

    #[test]
    fn rejects_nan_contrast() {
        let config = AccentConfig::default().with_min_contrast(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinContrastOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_zero_attempts() {
        let config = AccentConfig::default().with_max_attempts(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }
}
