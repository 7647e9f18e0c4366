//! Toast region configuration
//!
//! Loaded from TOML; every key is optional and falls back to the defaults
//! below.
//!
//! ```toml
//! max_visible_toasts = 3          # or "unbounded"
//! placement = "right-bottom"
//! disable_animation = false
//! toast_offset = 0.0
//! compact_viewport = false
//!
//! [animation]
//! enter_ms = 300
//! exit_ms = 300
//!
//! [swipe]
//! horizontal = 100.0
//! vertical = 20.0
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToastError};
use crate::placement::Placement;
use crate::visibility::MaxVisible;

/// Top-level toast configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastConfig {
    pub max_visible_toasts: MaxVisible,
    pub placement: Placement,
    /// Collapse every transition to its final value
    pub disable_animation: bool,
    /// Extra offset added to each toast's distance from the anchored edge
    pub toast_offset: f32,
    /// Narrow viewport: toasts are centered on their edge
    pub compact_viewport: bool,
    pub animation: AnimationConfig,
    pub swipe: SwipeConfig,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible_toasts: MaxVisible::DEFAULT,
            placement: Placement::default(),
            disable_animation: false,
            toast_offset: 0.0,
            compact_viewport: false,
            animation: AnimationConfig::default(),
            swipe: SwipeConfig::default(),
        }
    }
}

/// Enter/exit transition timing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enter_ms: u64,
    pub exit_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_ms: 300,
            exit_ms: 300,
        }
    }
}

/// Swipe-to-dismiss distances
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            horizontal: 100.0,
            vertical: 20.0,
        }
    }
}

impl ToastConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ToastConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        if !(self.swipe.horizontal.is_finite() && self.swipe.horizontal > 0.0) {
            return Err(ToastError::InvalidValue {
                field: "swipe.horizontal",
                reason: format!("must be a positive distance, got {}", self.swipe.horizontal),
            });
        }
        if !(self.swipe.vertical.is_finite() && self.swipe.vertical > 0.0) {
            return Err(ToastError::InvalidValue {
                field: "swipe.vertical",
                reason: format!("must be a positive distance, got {}", self.swipe.vertical),
            });
        }
        if !self.toast_offset.is_finite() {
            return Err(ToastError::InvalidValue {
                field: "toast_offset",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Placement after the compact-viewport override
    pub fn effective_placement(&self) -> Placement {
        if self.compact_viewport {
            self.placement.compact()
        } else {
            self.placement
        }
    }

    /// Enter transition length; zero when animation is disabled
    pub fn enter_duration(&self) -> Duration {
        if self.disable_animation {
            Duration::ZERO
        } else {
            Duration::from_millis(self.animation.enter_ms)
        }
    }

    /// Exit transition length; zero when animation is disabled
    pub fn exit_duration(&self) -> Duration {
        if self.disable_animation {
            Duration::ZERO
        } else {
            Duration::from_millis(self.animation.exit_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToastConfig::default();
        assert_eq!(config.max_visible_toasts, MaxVisible::Limited(3));
        assert_eq!(config.placement, Placement::RightBottom);
        assert!(!config.disable_animation);
        assert_eq!(config.toast_offset, 0.0);
        assert_eq!(config.swipe.horizontal, 100.0);
        assert_eq!(config.swipe.vertical, 20.0);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ToastConfig::from_toml_str("").unwrap();
        assert_eq!(config, ToastConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = ToastConfig::from_toml_str(
            r#"
            max_visible_toasts = "unbounded"
            placement = "center-top"
            disable_animation = true
            toast_offset = 12.5

            [animation]
            enter_ms = 150

            [swipe]
            vertical = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(config.max_visible_toasts, MaxVisible::Unbounded);
        assert_eq!(config.placement, Placement::CenterTop);
        assert!(config.disable_animation);
        assert_eq!(config.toast_offset, 12.5);
        assert_eq!(config.animation.enter_ms, 150);
        assert_eq!(config.animation.exit_ms, 300);
        assert_eq!(config.swipe.horizontal, 100.0);
        assert_eq!(config.swipe.vertical, 30.0);
        assert_eq!(config.exit_duration(), Duration::ZERO);
    }

    #[test]
    fn test_invalid_placement_falls_back_to_default() {
        let config = ToastConfig::from_toml_str(r#"placement = "upper-left""#).unwrap();
        assert_eq!(config.placement, Placement::RightBottom);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            ToastConfig::from_toml_str("max_visible_toasts = 0"),
            Err(ToastError::Parse(_))
        ));
        assert!(matches!(
            ToastConfig::from_toml_str(r#"max_visible_toasts = "lots""#),
            Err(ToastError::Parse(_))
        ));
        assert!(matches!(
            ToastConfig::from_toml_str("[swipe]\nhorizontal = -1.0"),
            Err(ToastError::InvalidValue { field: "swipe.horizontal", .. })
        ));
    }

    #[test]
    fn test_compact_viewport_override() {
        let config = ToastConfig {
            placement: Placement::LeftTop,
            compact_viewport: true,
            ..Default::default()
        };
        assert_eq!(config.effective_placement(), Placement::CenterTop);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = ToastConfig {
            max_visible_toasts: MaxVisible::Unbounded,
            placement: Placement::LeftBottom,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ToastConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ToastConfig::from_path(Path::new("/nonexistent/toastrack.toml"));
        assert!(matches!(result, Err(ToastError::Io(_))));
    }
}
