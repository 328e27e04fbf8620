use serde::{Deserialize, Serialize};

use crate::core::{
    AxisAlignment, AxisOrientation, AxisScale, Extent, LinearScale, OrientedPair, Padding,
    TickMetric,
};

/// Measured chart container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartState {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub padding: Padding,
    /// Set once the container has been measured for the current cycle.
    pub initialized: bool,
}

/// Plotting rectangle left over after axis extents and tick margins.
///
/// Values may be negative when the container is smaller than the margins it
/// has to reserve; renderers are expected to tolerate that.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasState {
    pub height: Option<f64>,
    pub width: Option<f64>,
}

/// Geometry reported by one axis child.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisState {
    pub alignment: Option<AxisAlignment>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    /// Tick mark length; only the x axis reports one.
    pub tick_height: Option<f64>,
    pub ticks: Option<u32>,
    pub rendered_ticks: Vec<TickMetric>,
    pub first_tick_margin: Option<f64>,
    pub last_tick_margin: Option<f64>,
}

impl AxisState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Registration bookkeeping plus per-orientation axis geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxesState {
    pub x: AxisState,
    pub y: AxisState,
    /// `None` until the first child registers or the chart is measured.
    pub registered: Option<u32>,
    pub rendered: u32,
    pub initialized: bool,
}

impl AxesState {
    #[must_use]
    pub fn axis(&self, orientation: AxisOrientation) -> &AxisState {
        match orientation {
            AxisOrientation::X => &self.x,
            AxisOrientation::Y => &self.y,
        }
    }

    pub fn axis_mut(&mut self, orientation: AxisOrientation) -> &mut AxisState {
        match orientation {
            AxisOrientation::X => &mut self.x,
            AxisOrientation::Y => &mut self.y,
        }
    }

    /// Every registered axis has reported, or no axis is registered at all.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        match self.registered {
            Some(0) => true,
            Some(registered) => self.rendered == registered,
            None => false,
        }
    }
}

/// Complete layout state of one chart instance.
///
/// Owned by a single `ChartLayoutEngine`; hosts only ever get a shared
/// reference to it.
#[derive(Debug)]
pub struct ChartLayoutState {
    pub chart: ChartState,
    pub canvas: CanvasState,
    pub axes: AxesState,
    pub domain: OrientedPair<Option<Extent>>,
    pub range: OrientedPair<Option<Extent>>,
    pub scale: OrientedPair<Box<dyn AxisScale>>,
}

impl Default for ChartLayoutState {
    fn default() -> Self {
        Self {
            chart: ChartState::default(),
            canvas: CanvasState::default(),
            axes: AxesState::default(),
            domain: OrientedPair::default(),
            range: OrientedPair::default(),
            scale: OrientedPair::new(Box::new(LinearScale), Box::new(LinearScale)),
        }
    }
}

impl ChartLayoutState {
    /// Canvas and default ranges are meaningful.
    #[must_use]
    pub fn is_layout_ready(&self) -> bool {
        self.chart.initialized && self.axes.initialized && self.axes.is_settled()
    }

    /// Maps a domain value through the orientation's scale and resolved range.
    ///
    /// Returns `None` until both the domain and the range are known.
    #[must_use]
    pub fn project(&self, orientation: AxisOrientation, value: f64) -> Option<f64> {
        let domain = (*self.domain.get(orientation))?;
        let range = (*self.range.get(orientation))?;
        Some(self.scale.get(orientation).map(value, domain, range))
    }
}
