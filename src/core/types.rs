use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-point numeric interval, `(start, end)`, used for domains and ranges.
///
/// `start` may be greater than `end`; the default y range is inverted.
pub type Extent = (f64, f64);

/// Chart axis orientation: `X` is the primary (horizontal) axis and `Y` the
/// secondary (vertical) one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    X,
    Y,
}

impl AxisOrientation {
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for AxisOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the canvas an axis child draws itself on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisAlignment {
    Top,
    Bottom,
    Left,
    Right,
}

/// Per-orientation pair used for domains, ranges and scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientedPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> OrientedPair<T> {
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn get(&self, orientation: AxisOrientation) -> &T {
        match orientation {
            AxisOrientation::X => &self.x,
            AxisOrientation::Y => &self.y,
        }
    }

    pub fn get_mut(&mut self, orientation: AxisOrientation) -> &mut T {
        match orientation {
            AxisOrientation::X => &mut self.x,
            AxisOrientation::Y => &mut self.y,
        }
    }

    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> OrientedPair<U> {
        OrientedPair {
            x: f(&self.x),
            y: f(&self.y),
        }
    }
}

/// Box padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Container box size carried by resize signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub height: f64,
    pub width: f64,
}

impl ContainerSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { height, width }
    }
}

/// Result of measuring the chart container element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementMetrics {
    pub height: f64,
    pub width: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub padding_left: f64,
}

impl ElementMetrics {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_top = padding.top;
        self.padding_right = padding.right;
        self.padding_bottom = padding.bottom;
        self.padding_left = padding.left;
        self
    }

    #[must_use]
    pub fn padding(self) -> Padding {
        Padding {
            top: self.padding_top,
            right: self.padding_right,
            bottom: self.padding_bottom,
            left: self.padding_left,
        }
    }
}

/// Rendered size of a single tick label, as reported by an axis child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickMetric {
    pub width: f64,
    pub height: f64,
}

impl TickMetric {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Label extent across the axis line: width for x ticks, height for y ticks.
    #[must_use]
    pub fn cross_axis_extent(self, orientation: AxisOrientation) -> f64 {
        match orientation {
            AxisOrientation::X => self.width,
            AxisOrientation::Y => self.height,
        }
    }
}
