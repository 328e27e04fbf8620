use tracing::trace;

use crate::core::{AxisOrientation, TickMetric};

use super::layout_state::AxesState;

/// Records a newly mounted axis child and returns the registered count.
pub(super) fn register_axis(axes: &mut AxesState) -> u32 {
    let registered = axes.registered.unwrap_or(0) + 1;
    axes.registered = Some(registered);
    trace!(registered, "register axis");
    registered
}

/// Drops an unmounted axis child and its geometry.
///
/// Returns the registered count after removal.
pub(super) fn unregister_axis(axes: &mut AxesState, orientation: AxisOrientation) -> u32 {
    let registered = axes.registered.unwrap_or(0).saturating_sub(1);
    axes.registered = Some(registered);
    axes.rendered = axes.rendered.min(registered);
    axes.axis_mut(orientation).reset();
    trace!(
        axis = %orientation,
        registered,
        rendered = axes.rendered,
        "unregister axis"
    );
    registered
}

pub(super) fn record_rendered_tick(
    axes: &mut AxesState,
    orientation: AxisOrientation,
    tick: TickMetric,
) {
    let ticks = &mut axes.axis_mut(orientation).rendered_ticks;
    ticks.push(tick);
    trace!(axis = %orientation, count = ticks.len(), "record rendered tick");
}

/// Counts one more rendered axis report, never past the registered count.
pub(super) fn record_axis_rendered(axes: &mut AxesState) -> u32 {
    let next = axes.rendered + 1;
    axes.rendered = match axes.registered {
        Some(registered) => next.min(registered),
        None => next,
    };
    axes.rendered
}

/// Starts a fresh register/report cycle after the chart is re-measured.
///
/// Registration survives; children that are still mounted only report again.
pub(super) fn begin_layout_cycle(axes: &mut AxesState) {
    axes.rendered = 0;
    axes.initialized = false;
    axes.x.rendered_ticks.clear();
    axes.y.rendered_ticks.clear();
}
