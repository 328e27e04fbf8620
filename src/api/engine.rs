use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{AxisOrientation, AxisScale, ContainerSize, Extent};

use super::layout_state::{CanvasState, ChartLayoutState};
use super::lifecycle::{LayoutPhase, SyncQueue, SyncTask};
use super::resize_debouncer::{ResizeDebouncer, apply_container_size};
use super::ChartLayoutConfig;

/// Layout owner for one chart instance.
///
/// The engine owns the layout state exclusively. Axis children talk to it
/// through `dispatch`, the host drives the deferred phases through
/// `mount`/`flush_sync` and feeds container resizes through `on_resize` and
/// `advance`. Everything runs on the caller's thread.
#[derive(Debug)]
pub struct ChartLayoutEngine {
    pub(super) config: ChartLayoutConfig,
    pub(super) state: ChartLayoutState,
    pub(super) phase: LayoutPhase,
    pub(super) sync: SyncQueue,
    pub(super) resize: ResizeDebouncer,
}

impl ChartLayoutEngine {
    /// Creates the layout state with defaults and queues property setup.
    #[must_use]
    pub fn new(config: ChartLayoutConfig) -> Self {
        let mut sync = SyncQueue::default();
        sync.schedule_once(SyncTask::SetupProperties);
        debug!(
            dynamic_range = config.has_dynamic_range(),
            resize_debounce_us = config.resize_debounce_micros,
            "create chart layout"
        );

        Self {
            resize: ResizeDebouncer::new(config.resize_debounce()),
            config,
            state: ChartLayoutState::default(),
            phase: LayoutPhase::Uninitialized,
            sync,
        }
    }

    /// Replaces the x scale (linear by default).
    #[must_use]
    pub fn with_x_scale(mut self, scale: Box<dyn AxisScale>) -> Self {
        self.state.scale.x = scale;
        self
    }

    /// Replaces the y scale (linear by default).
    #[must_use]
    pub fn with_y_scale(mut self, scale: Box<dyn AxisScale>) -> Self {
        self.state.scale.y = scale;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartLayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ChartLayoutState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> LayoutPhase {
        if self.phase == LayoutPhase::CanvasReady && self.resize.is_pending() {
            LayoutPhase::ResizePending
        } else {
            self.phase
        }
    }

    #[must_use]
    pub fn is_layout_ready(&self) -> bool {
        self.state.is_layout_ready()
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasState {
        self.state.canvas
    }

    #[must_use]
    pub fn range_x(&self) -> Option<Extent> {
        self.state.range.x
    }

    #[must_use]
    pub fn range_y(&self) -> Option<Extent> {
        self.state.range.y
    }

    #[must_use]
    pub fn project_x(&self, value: f64) -> Option<f64> {
        self.state.project(AxisOrientation::X, value)
    }

    #[must_use]
    pub fn project_y(&self, value: f64) -> Option<f64> {
        self.state.project(AxisOrientation::Y, value)
    }

    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }

    /// Deadline of the pending resize, for hosts that arm a real timer.
    #[must_use]
    pub fn pending_resize_deadline(&self) -> Option<Duration> {
        self.resize.deadline()
    }

    /// Feeds a container resize signal observed at `now`.
    ///
    /// Ignored when both ranges are pinned. Otherwise the signal replaces any
    /// pending one and restarts the debounce delay. Returns `true` when the
    /// signal was scheduled.
    pub fn on_resize(&mut self, size: ContainerSize, now: Duration) -> bool {
        if !self.config.has_dynamic_range() {
            trace!(
                width = size.width,
                height = size.height,
                "ignore resize, ranges are pinned"
            );
            return false;
        }
        self.resize.schedule(size, now);
        true
    }

    /// Applies the debounced resize once its delay has elapsed at `now`.
    ///
    /// Returns `true` when the canvas was recomputed.
    pub fn advance(&mut self, now: Duration) -> bool {
        let Some(size) = self.resize.poll(now) else {
            return false;
        };
        apply_container_size(&mut self.state, &self.config, size)
    }

    /// Tears the instance down, dropping any pending resize and held reports.
    pub fn dispose(mut self) -> DisposedLayout {
        let disposed = DisposedLayout {
            dropped_resize: self.resize.cancel(),
            dropped_held_reports: self.sync.clear(),
        };
        debug!(
            dropped_resize = disposed.dropped_resize,
            dropped_held_reports = disposed.dropped_held_reports,
            "dispose chart layout"
        );
        disposed
    }
}

/// Work still queued when an engine was disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisposedLayout {
    pub dropped_resize: bool,
    pub dropped_held_reports: usize,
}
