use tracing::trace;

use super::ChartLayoutConfig;
use super::layout_state::ChartLayoutState;
use super::range_resolver::resolve_default_ranges;

/// Recomputes the plotting canvas from the chart box and the axis geometry,
/// then refreshes the dynamic ranges.
///
/// Unreported dimensions count as zero and the result is not clamped.
pub(super) fn recompute_canvas(state: &mut ChartLayoutState, config: &ChartLayoutConfig) {
    let x = &state.axes.x;
    let y = &state.axes.y;

    let height = state.chart.height.unwrap_or(0.0)
        - x.height.unwrap_or(0.0)
        - y.first_tick_margin.unwrap_or(0.0)
        - y.last_tick_margin.unwrap_or(0.0);
    let width = state.chart.width.unwrap_or(0.0)
        - y.width.unwrap_or(0.0)
        - x.first_tick_margin.unwrap_or(0.0)
        - x.last_tick_margin.unwrap_or(0.0);

    state.canvas.height = Some(height);
    state.canvas.width = Some(width);
    trace!(width, height, "recompute canvas");

    resolve_default_ranges(state, config);
}
