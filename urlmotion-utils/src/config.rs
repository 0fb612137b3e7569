// URL Motion: Configuration
//
// A serde-backed description of one animation: which preset to play, how
// fast, and how to decorate each frame. Every field has a default, so `{}`
// is a valid document.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, MotionResult};
use crate::frames::{self, Frames};
use crate::preset::Preset;

/// Milliseconds between frame advances when nothing else is configured
pub const DEFAULT_PERIOD_MS: u64 = 1000;

/// Parameters for the `loadingBar` preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingBarConfig {
    pub symbol: String,
    pub length: usize,
    pub end_character: String,
}

impl Default for LoadingBarConfig {
    fn default() -> Self {
        Self {
            symbol: frames::DEFAULT_BAR_SYMBOL.to_string(),
            length: frames::DEFAULT_BAR_LENGTH,
            end_character: frames::DEFAULT_BAR_END.to_string(),
        }
    }
}

/// Configuration for a single URL fragment animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Delay between frames in milliseconds
    pub period_ms: u64,

    /// Which predefined animation to play
    pub preset: Preset,

    /// Message for the `threeDots` preset
    pub message: String,

    /// Prepended to every frame
    pub prefix: Option<String>,

    /// Appended to every frame
    pub suffix: Option<String>,

    /// Parameters for the `loadingBar` preset
    pub bar: LoadingBarConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            preset: Preset::default(),
            message: frames::DEFAULT_MESSAGE.to_string(),
            prefix: None,
            suffix: None,
            bar: LoadingBarConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> MotionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.period()?;
        log::debug!(
            "Loaded motion config: preset={} period={}ms",
            config.preset,
            config.period_ms
        );
        Ok(config)
    }

    /// Validated tick period
    pub fn period(&self) -> MotionResult<Duration> {
        if self.period_ms == 0 {
            return Err(MotionError::InvalidPeriod { millis: 0 });
        }
        Ok(Duration::from_millis(self.period_ms))
    }

    /// Build the frame sequence this configuration describes
    pub fn frames(&self) -> Frames {
        let mut sequence = match self.preset {
            Preset::ThreeDots => frames::three_dots(&self.message),
            Preset::LoadingBar => frames::loading_bar(
                &self.bar.symbol,
                self.bar.length,
                &self.bar.end_character,
            ),
            other => other.frames(),
        };

        if let Some(prfx) = &self.prefix {
            sequence = frames::prefix(prfx, &sequence);
        }
        if let Some(sufx) = &self.suffix {
            sequence = frames::suffix(sufx, &sequence);
        }

        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MotionConfig::default();
        assert_eq!(config.period_ms, 1000);
        assert_eq!(config.preset, Preset::ThreeDots);
        assert_eq!(config.period().unwrap(), Duration::from_secs(1));
        assert_eq!(config.frames(), frames::three_dots_default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = MotionConfig::from_json("{}").unwrap();
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn test_three_dots_message() {
        let config = MotionConfig::from_json(r#"{"message": "Saving"}"#).unwrap();
        assert_eq!(config.frames()[2], "Saving...");
    }

    #[test]
    fn test_loading_bar_parameters() {
        let config = MotionConfig::from_json(
            r##"{"preset": "loadingBar", "period_ms": 250,
                "bar": {"symbol": "#", "length": 3}}"##,
        )
        .unwrap();
        assert_eq!(config.period().unwrap(), Duration::from_millis(250));
        assert_eq!(config.frames(), vec!["[~~~]", "[#~~]", "[##~]"]);
    }

    #[test]
    fn test_prefix_and_suffix_applied() {
        let config = MotionConfig::from_json(
            r#"{"preset": "arrowSpinner", "prefix": "Uploading ", "suffix": "!"}"#,
        )
        .unwrap();
        let sequence = config.frames();
        assert_eq!(sequence.len(), 8);
        assert_eq!(sequence[0], "Uploading ←!");
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = MotionConfig::from_json(r#"{"period_ms": 0}"#);
        assert!(matches!(result, Err(MotionError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_negative_bar_length_rejected() {
        let result =
            MotionConfig::from_json(r#"{"preset": "loadingBar", "bar": {"length": -2}}"#);
        assert!(matches!(result, Err(MotionError::Config(_))));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let result = MotionConfig::from_json(r#"{"preset": "twirl"}"#);
        assert!(matches!(result, Err(MotionError::Config(_))));
    }
}
