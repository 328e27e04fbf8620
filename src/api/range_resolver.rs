use super::ChartLayoutConfig;
use super::layout_state::ChartLayoutState;

/// Fills in ranges the caller left dynamic from the current canvas.
///
/// The y range is inverted: screen space grows downward while chart values
/// grow upward. Caller-supplied ranges are left untouched.
pub(super) fn resolve_default_ranges(state: &mut ChartLayoutState, config: &ChartLayoutConfig) {
    if config.x_range.is_none() {
        state.range.x = Some((0.0, state.canvas.width.unwrap_or(0.0)));
    }
    if config.y_range.is_none() {
        state.range.y = Some((state.canvas.height.unwrap_or(0.0), 0.0));
    }
}
