//! Placement configuration parsed from environment variables.

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use crate::geometry::Size;

/// Error returned by [`PlacementConfig::from_env`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// A variable was set but did not parse as a number.
    #[error("{key} is not a number: {value:?}")]
    Parse { key: String, value: String },
    /// A variable parsed but is not usable (zero, negative, or non-finite).
    #[error("{key} must be positive, got {value}")]
    NotPositive { key: String, value: f64 },
    /// The zoom limits contradict each other.
    #[error("zoom limits out of order: min={min} default={default} max={max}")]
    ZoomRange { min: f64, default: f64, max: f64 },
}

/// Zoom limits applied by the viewer's zoom controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: ZOOM_MIN, max: ZOOM_MAX, step: ZOOM_STEP, default: ZOOM_DEFAULT }
    }
}

impl ZoomLimits {
    /// Clamp `zoom` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.min(self.max).max(self.min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Size given to newly placed markers, in document space.
    pub item_size: Size,
    pub zoom: ZoomLimits,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { item_size: Size::new(FIELD_WIDTH, FIELD_HEIGHT), zoom: ZoomLimits::default() }
    }
}

impl PlacementConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PLACEMENT_FIELD_WIDTH`: default 100
    /// - `PLACEMENT_FIELD_HEIGHT`: default 30
    /// - `PLACEMENT_ZOOM_MIN`: default 0.25
    /// - `PLACEMENT_ZOOM_MAX`: default 2.0
    /// - `PLACEMENT_ZOOM_STEP`: default 0.25
    /// - `PLACEMENT_ZOOM_DEFAULT`: default 1.0
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable or not
    /// positive, or when the zoom limits are out of order.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`PlacementConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let width = positive(&lookup, "PLACEMENT_FIELD_WIDTH", FIELD_WIDTH)?;
        let height = positive(&lookup, "PLACEMENT_FIELD_HEIGHT", FIELD_HEIGHT)?;
        let zoom = ZoomLimits {
            min: positive(&lookup, "PLACEMENT_ZOOM_MIN", ZOOM_MIN)?,
            max: positive(&lookup, "PLACEMENT_ZOOM_MAX", ZOOM_MAX)?,
            step: positive(&lookup, "PLACEMENT_ZOOM_STEP", ZOOM_STEP)?,
            default: positive(&lookup, "PLACEMENT_ZOOM_DEFAULT", ZOOM_DEFAULT)?,
        };
        if !(zoom.min <= zoom.default && zoom.default <= zoom.max) {
            return Err(ConfigError::ZoomRange { min: zoom.min, default: zoom.default, max: zoom.max });
        }

        Ok(Self { item_size: Size::new(width, height), zoom })
    }
}

fn positive<F>(lookup: &F, key: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Parse { key: key.into(), value: raw.clone() })?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { key: key.into(), value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
