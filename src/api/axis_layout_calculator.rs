use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisAlignment, AxisOrientation, TickMetric};

use super::ChartLayoutConfig;
use super::canvas_sizer::recompute_canvas;
use super::layout_state::{AxisState, ChartLayoutState};
use super::registration_tracker::record_axis_rendered;

/// Geometry an axis child reports once its own layout pass completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisReport {
    pub alignment: AxisAlignment,
    pub height: f64,
    pub width: f64,
    #[serde(default)]
    pub ticks: Option<u32>,
    #[serde(default)]
    pub tick_height: Option<f64>,
}

/// Space reserved at both ends of an axis for half of its outer tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickMargins {
    pub first: f64,
    pub last: f64,
}

impl TickMargins {
    /// Tick labels are centered on their tick, so half of the first and last
    /// label overflows the nominal axis extent.
    #[must_use]
    pub fn from_rendered_ticks(ticks: &[TickMetric], orientation: AxisOrientation) -> Self {
        let half = |tick: Option<&TickMetric>| {
            tick.map_or(0.0, |tick| tick.cross_axis_extent(orientation) / 2.0)
        };
        Self {
            first: half(ticks.first()),
            last: half(ticks.last()),
        }
    }

    #[must_use]
    pub fn total(self) -> f64 {
        self.first + self.last
    }
}

/// What the finalization gate did with an axis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AxisGate {
    /// Other registered axes still have to report.
    Pending,
    /// The cycle was already finalized; the canvas was recomputed.
    Recomputed,
    /// This report completed the cycle.
    Finalized,
}

/// Stores an axis report, trimming the extent along the axis by its tick
/// margins, then runs the finalization gate.
pub(super) fn layout_rendered_axis(
    state: &mut ChartLayoutState,
    config: &ChartLayoutConfig,
    orientation: AxisOrientation,
    report: AxisReport,
) -> AxisGate {
    store_axis_report(state.axes.axis_mut(orientation), orientation, report);
    record_axis_rendered(&mut state.axes);
    run_finalization_gate(state, config)
}

/// Finalizes the cycle once every registered axis has reported, or right away
/// when none is registered. Later hits only recompute the canvas.
pub(super) fn run_finalization_gate(
    state: &mut ChartLayoutState,
    config: &ChartLayoutConfig,
) -> AxisGate {
    if !state.axes.is_settled() {
        debug!(
            rendered = state.axes.rendered,
            registered = ?state.axes.registered,
            "waiting on remaining axes"
        );
        return AxisGate::Pending;
    }

    recompute_canvas(state, config);
    if state.axes.initialized {
        return AxisGate::Recomputed;
    }

    state.axes.initialized = true;
    debug!(
        rendered = state.axes.rendered,
        canvas_width = ?state.canvas.width,
        canvas_height = ?state.canvas.height,
        "axes initialized"
    );
    AxisGate::Finalized
}

fn store_axis_report(axis: &mut AxisState, orientation: AxisOrientation, report: AxisReport) {
    let margins = TickMargins::from_rendered_ticks(&axis.rendered_ticks, orientation);

    axis.alignment = Some(report.alignment);
    axis.ticks = report.ticks;
    axis.first_tick_margin = Some(margins.first);
    axis.last_tick_margin = Some(margins.last);
    match orientation {
        AxisOrientation::X => {
            axis.tick_height = report.tick_height;
            axis.height = Some(report.height);
            axis.width = Some(report.width - margins.total());
        }
        AxisOrientation::Y => {
            axis.height = Some(report.height - margins.total());
            axis.width = Some(report.width);
        }
    }
}
