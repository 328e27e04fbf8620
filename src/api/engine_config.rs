use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Extent;
use crate::error::{ChartError, ChartResult};

use super::resize_debouncer::DEFAULT_RESIZE_DEBOUNCE;

/// Public chart layout configuration.
///
/// Domains are required. Ranges left as `None` are derived from the canvas
/// and follow container resizes; supplied ranges are pinned. This type is
/// serializable so hosts can persist chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutConfig {
    pub x_domain: Extent,
    pub y_domain: Extent,
    #[serde(default)]
    pub x_range: Option<Extent>,
    #[serde(default)]
    pub y_range: Option<Extent>,
    #[serde(default = "default_resize_debounce_micros")]
    pub resize_debounce_micros: u64,
}

impl ChartLayoutConfig {
    /// Creates a config with dynamic ranges and the default debounce delay.
    #[must_use]
    pub fn new(x_domain: Extent, y_domain: Extent) -> Self {
        Self {
            x_domain,
            y_domain,
            x_range: None,
            y_range: None,
            resize_debounce_micros: default_resize_debounce_micros(),
        }
    }

    /// Pins the x output range.
    #[must_use]
    pub fn with_x_range(mut self, range: Extent) -> Self {
        self.x_range = Some(range);
        self
    }

    /// Pins the y output range.
    #[must_use]
    pub fn with_y_range(mut self, range: Extent) -> Self {
        self.y_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_resize_debounce(mut self, delay: Duration) -> Self {
        self.resize_debounce_micros = u64::try_from(delay.as_micros()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_micros(self.resize_debounce_micros)
    }

    /// At least one range follows the canvas, so resizes matter.
    #[must_use]
    pub fn has_dynamic_range(&self) -> bool {
        self.x_range.is_none() || self.y_range.is_none()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_resize_debounce_micros() -> u64 {
    DEFAULT_RESIZE_DEBOUNCE.as_micros() as u64
}
