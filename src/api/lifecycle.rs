use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{AxisOrientation, ElementMetrics, Extent};
use crate::measure::ElementProbe;

use super::axis_layout_calculator::AxisReport;
use super::registration_tracker::begin_layout_cycle;
use super::ChartLayoutEngine;

/// Per-chart layout lifecycle.
///
/// `PropertiesSet` and the first `ChartMeasured` happen once; a re-measure
/// drops back to `PropertiesSet` and runs the axis phases again.
/// `ResizePending` is only ever observed on top of `CanvasReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutPhase {
    Uninitialized,
    PropertiesSet,
    ChartMeasured,
    AxesRegistering,
    AxesRendering,
    CanvasReady,
    ResizePending,
}

/// Work deferred to the host's synchronization pass. Ordering is by variant:
/// property setup always runs before measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum SyncTask {
    SetupProperties,
    MeasureChart,
}

#[derive(Debug, Default)]
pub(super) struct SyncQueue {
    tasks: SmallVec<[SyncTask; 2]>,
    held_reports: SmallVec<[(AxisOrientation, AxisReport); 2]>,
}

impl SyncQueue {
    /// Queues `task` unless it is already waiting.
    pub(super) fn schedule_once(&mut self, task: SyncTask) -> bool {
        if self.tasks.contains(&task) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    fn take_next(&mut self) -> Option<SyncTask> {
        let (index, _) = self
            .tasks
            .iter()
            .enumerate()
            .min_by_key(|(_, task)| **task)?;
        Some(self.tasks.remove(index))
    }

    /// Keeps an axis report that arrived before the chart was measured.
    pub(super) fn hold_report(&mut self, orientation: AxisOrientation, report: AxisReport) {
        self.held_reports.push((orientation, report));
    }

    pub(super) fn held_report_count(&self) -> usize {
        self.held_reports.len()
    }

    fn take_held_reports(&mut self) -> SmallVec<[(AxisOrientation, AxisReport); 2]> {
        std::mem::take(&mut self.held_reports)
    }

    /// Drops everything still queued and returns the number of held reports lost.
    pub(super) fn clear(&mut self) -> usize {
        self.tasks.clear();
        let dropped = self.held_reports.len();
        self.held_reports.clear();
        dropped
    }
}

impl ChartLayoutEngine {
    /// Signals the chart element is attached; measurement runs on the next
    /// `flush_sync`.
    pub fn mount(&mut self) {
        if self.state.chart.initialized {
            trace!("mount ignored, chart already measured");
            return;
        }
        self.sync.schedule_once(SyncTask::MeasureChart);
    }

    /// Invalidates the current measurement and starts a new layout cycle.
    ///
    /// Registered axes stay registered but must report again; reports that
    /// arrive before the next `flush_sync` are held until it measures.
    pub fn remeasure(&mut self) {
        begin_layout_cycle(&mut self.state.axes);
        self.state.chart.initialized = false;
        if self.phase != LayoutPhase::Uninitialized {
            self.phase = LayoutPhase::PropertiesSet;
        }
        self.sync.schedule_once(SyncTask::MeasureChart);
        debug!("remeasure chart, new layout cycle");
    }

    /// Number of axis reports waiting for the chart to be measured.
    #[must_use]
    pub fn held_report_count(&self) -> usize {
        self.sync.held_report_count()
    }

    /// Runs deferred property setup and chart measurement, then replays axis
    /// reports held while the chart was unmeasured.
    pub fn flush_sync<P: ElementProbe + ?Sized>(&mut self, probe: &mut P) -> LayoutPhase {
        while let Some(task) = self.sync.take_next() {
            match task {
                SyncTask::SetupProperties => self.setup_properties(),
                SyncTask::MeasureChart => {
                    let metrics = probe.measure();
                    self.measure_chart(metrics);
                }
            }
        }
        self.phase()
    }

    fn setup_properties(&mut self) {
        let config = self.config;
        self.state.domain.x = Some(config.x_domain);
        self.state.domain.y = Some(config.y_domain);
        if let Some(range) = config.x_range {
            self.state.range.x = Some(range);
        }
        if let Some(range) = config.y_range {
            self.state.range.y = Some(range);
        }

        for (orientation, domain) in [
            (AxisOrientation::X, config.x_domain),
            (AxisOrientation::Y, config.y_domain),
        ] {
            if !is_finite_extent(domain) {
                debug!(
                    axis = %orientation,
                    min = domain.0,
                    max = domain.1,
                    "domain has non-finite bounds, passing through"
                );
            }
        }

        self.phase = LayoutPhase::PropertiesSet;
        debug!(
            x_range_pinned = config.x_range.is_some(),
            y_range_pinned = config.y_range.is_some(),
            "chart properties set"
        );
    }

    fn measure_chart(&mut self, metrics: ElementMetrics) {
        let chart = &mut self.state.chart;
        chart.height = Some(metrics.height);
        chart.width = Some(metrics.width);
        chart.padding = metrics.padding();
        chart.initialized = true;

        let registered = *self.state.axes.registered.get_or_insert(0);
        self.phase = if registered > 0 {
            LayoutPhase::AxesRegistering
        } else {
            LayoutPhase::ChartMeasured
        };
        debug!(
            width = metrics.width,
            height = metrics.height,
            registered,
            "chart measured"
        );

        for (orientation, report) in self.sync.take_held_reports() {
            trace!(axis = %orientation, "replay held axis report");
            self.apply_axis_report(orientation, report);
        }
    }
}

fn is_finite_extent(extent: Extent) -> bool {
    extent.0.is_finite() && extent.1.is_finite()
}
