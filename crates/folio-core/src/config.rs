//! Tunable options for the view-state core.
//!
//! Defaults reproduce the page's observed behaviour; a TOML file can override
//! any subset of them. Values are validated once at load time so the runtime
//! operations never have to deal with nonsensical geometry parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use folio_model::{MarginValue, RootMargin};

use crate::error::ConfigError;
use crate::observer::ObserverOptions;
use crate::scroll::ScrollBehavior;

/// Trigger band for navigation highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Root margin; the default keeps a band from 20% to 30% of the viewport height.
    pub root_margin: RootMargin,
    pub threshold: f64,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            root_margin: RootMargin {
                top: MarginValue::Percent(-20.0),
                right: MarginValue::Px(0.0),
                bottom: MarginValue::Percent(-70.0),
                left: MarginValue::Px(0.0),
            },
            threshold: 0.0,
        }
    }
}

impl SectionsConfig {
    pub fn options(&self) -> ObserverOptions {
        ObserverOptions::new(self.root_margin, self.threshold)
    }
}

/// Trigger region for entrance animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub root_margin: RootMargin,
    /// Minimum visible fraction of the element.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::uniform(MarginValue::Px(-50.0)),
            threshold: 0.1,
        }
    }
}

impl RevealConfig {
    pub fn options(&self) -> ObserverOptions {
        ObserverOptions::new(self.root_margin, self.threshold)
    }
}

/// Card geometry and settle timing for the project carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub card_width: f64,
    pub gap: f64,
    /// Tolerance used for the right-edge check.
    pub epsilon: f64,
    /// Fixed settle window after a programmatic scroll.
    pub settle_delay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: 380.0,
            gap: 24.0,
            epsilon: 1.0,
            settle_delay_ms: 300,
        }
    }
}

impl CarouselConfig {
    /// Distance between the leading edges of two adjacent cards.
    pub fn stride(&self) -> f64 {
        self.card_width + self.gap
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub sections: SectionsConfig,
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
    /// Behaviour requested for programmatic scrolls.
    pub scroll_behavior: ScrollBehavior,
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a TOML config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse and validate TOML source held in memory.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse(source, Path::new("<inline>"))
    }

    fn parse(source: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|source| ConfigError::Toml {
            path: PathBuf::from(origin),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check option ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("sections.threshold", self.sections.threshold)?;
        check_threshold("reveal.threshold", self.reveal.threshold)?;
        let carousel = &self.carousel;
        if !(carousel.card_width.is_finite() && carousel.card_width > 0.0) {
            return Err(ConfigError::invalid(
                "carousel.card_width",
                format!("must be positive, got {}", carousel.card_width),
            ));
        }
        if !(carousel.gap.is_finite() && carousel.gap >= 0.0) {
            return Err(ConfigError::invalid(
                "carousel.gap",
                format!("must be non-negative, got {}", carousel.gap),
            ));
        }
        if !(carousel.epsilon.is_finite() && carousel.epsilon >= 0.0) {
            return Err(ConfigError::invalid(
                "carousel.epsilon",
                format!("must be non-negative, got {}", carousel.epsilon),
            ));
        }
        Ok(())
    }
}

fn check_threshold(option: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            option,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}
