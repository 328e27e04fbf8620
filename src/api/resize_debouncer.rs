use std::time::Duration;

use tracing::{debug, trace};

use crate::core::ContainerSize;

use super::ChartLayoutConfig;
use super::canvas_sizer::recompute_canvas;
use super::layout_state::ChartLayoutState;

/// One 60 Hz frame.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_micros(16_667);

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResize {
    size: ContainerSize,
    deadline: Duration,
}

/// Keep-latest debounce for container resize signals.
///
/// Time is supplied by the host as a monotonic offset from any fixed epoch.
/// Scheduling while a resize is pending replaces its payload and restarts the
/// delay, so a burst of signals resolves to exactly one application of the
/// last size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDebouncer {
    delay: Duration,
    pending: Option<PendingResize>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE)
    }
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_size(&self) -> Option<ContainerSize> {
        self.pending.map(|pending| pending.size)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.deadline)
    }

    /// Schedules `size`, dropping any payload still waiting.
    ///
    /// Returns `true` when a pending resize was replaced.
    pub fn schedule(&mut self, size: ContainerSize, now: Duration) -> bool {
        let replaced = self.pending.is_some();
        let deadline = now.saturating_add(self.delay);
        self.pending = Some(PendingResize { size, deadline });
        trace!(
            width = size.width,
            height = size.height,
            deadline_us = deadline.as_micros() as u64,
            replaced,
            "schedule resize"
        );
        replaced
    }

    /// Hands out the pending size once its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<ContainerSize> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.size)
            }
            _ => None,
        }
    }

    /// Returns `true` when a pending resize was dropped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Applies a debounced container size to the chart box.
///
/// Returns `true` when the canvas was recomputed. A size that matches the
/// current box is a no-op. Before the chart is measured only the chart box is
/// updated, measurement overwrites it anyway.
pub(super) fn apply_container_size(
    state: &mut ChartLayoutState,
    config: &ChartLayoutConfig,
    size: ContainerSize,
) -> bool {
    let height_changed = state.chart.height != Some(size.height);
    let width_changed = state.chart.width != Some(size.width);

    if height_changed {
        state.chart.height = Some(size.height);
    }
    if width_changed {
        state.chart.width = Some(size.width);
    }

    if !(height_changed || width_changed) {
        trace!("resize matches current chart box");
        return false;
    }

    if !state.chart.initialized {
        debug!(
            width = size.width,
            height = size.height,
            "resize applied before chart is measured"
        );
        return false;
    }

    recompute_canvas(state, config);
    debug!(
        width = size.width,
        height = size.height,
        canvas_width = ?state.canvas.width,
        canvas_height = ?state.canvas.height,
        layout_ready = state.is_layout_ready(),
        "resize applied"
    );
    true
}
