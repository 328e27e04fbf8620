use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{AxisOrientation, TickMetric};
use crate::error::{ChartError, ChartResult};

use super::axis_layout_calculator::{
    AxisGate, AxisReport, layout_rendered_axis, run_finalization_gate,
};
use super::lifecycle::LayoutPhase;
use super::registration_tracker::{record_rendered_tick, register_axis, unregister_axis};
use super::ChartLayoutEngine;

/// Messages axis children send to their layout owner.
///
/// The wire form is an object tagged by `type`, e.g.
/// `{"type": "RENDERED_TICK", "axis": "x", "tick": {"width": 20, "height": 12}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutAction {
    #[serde(rename = "REGISTER_AXIS")]
    RegisterAxis,
    #[serde(rename = "UNREGISTER_AXIS")]
    UnregisterAxis { axis: AxisOrientation },
    #[serde(rename = "RENDERED_TICK")]
    RenderedTick {
        axis: AxisOrientation,
        tick: TickMetric,
    },
    #[serde(rename = "RENDERED_X_AXIS")]
    RenderedXAxis { axis: AxisReport },
    #[serde(rename = "RENDERED_Y_AXIS")]
    RenderedYAxis { axis: AxisReport },
}

impl LayoutAction {
    pub const TYPE_NAMES: [&'static str; 5] = [
        "REGISTER_AXIS",
        "UNREGISTER_AXIS",
        "RENDERED_TICK",
        "RENDERED_X_AXIS",
        "RENDERED_Y_AXIS",
    ];

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::RegisterAxis => "REGISTER_AXIS",
            Self::UnregisterAxis { .. } => "UNREGISTER_AXIS",
            Self::RenderedTick { .. } => "RENDERED_TICK",
            Self::RenderedXAxis { .. } => "RENDERED_X_AXIS",
            Self::RenderedYAxis { .. } => "RENDERED_Y_AXIS",
        }
    }
}

/// What a dispatched message did to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchOutcome {
    /// State was updated.
    Applied,
    /// Axis report held until the chart is measured.
    Deferred,
    /// The message completed the current layout cycle.
    LayoutFinalized,
    /// Unknown message type; nothing changed.
    Ignored,
}

impl ChartLayoutEngine {
    /// Single reducer for axis-child messages.
    pub fn dispatch(&mut self, action: LayoutAction) -> DispatchOutcome {
        trace!(action = action.type_name(), "dispatch layout action");
        match action {
            LayoutAction::RegisterAxis => {
                register_axis(&mut self.state.axes);
                if self.state.chart.initialized {
                    self.phase = LayoutPhase::AxesRegistering;
                }
                DispatchOutcome::Applied
            }
            LayoutAction::UnregisterAxis { axis } => self.remove_axis(axis),
            LayoutAction::RenderedTick { axis, tick } => {
                record_rendered_tick(&mut self.state.axes, axis, tick);
                if matches!(
                    self.phase,
                    LayoutPhase::ChartMeasured | LayoutPhase::AxesRegistering
                ) {
                    self.phase = LayoutPhase::AxesRendering;
                }
                DispatchOutcome::Applied
            }
            LayoutAction::RenderedXAxis { axis } => {
                self.receive_axis_report(AxisOrientation::X, axis)
            }
            LayoutAction::RenderedYAxis { axis } => {
                self.receive_axis_report(AxisOrientation::Y, axis)
            }
        }
    }

    /// Dispatches a message received as raw JSON from an untyped boundary.
    ///
    /// Unknown `type` values are logged and ignored. Known types with a
    /// malformed payload are rejected with `ChartError::InvalidAction`.
    pub fn dispatch_json(&mut self, input: &str) -> ChartResult<DispatchOutcome> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidAction(format!("failed to parse action json: {e}")))?;
        self.dispatch_value(value)
    }

    pub fn dispatch_value(&mut self, value: Value) -> ChartResult<DispatchOutcome> {
        let Some(action_type) = value.get("type").and_then(Value::as_str) else {
            return Err(ChartError::InvalidAction(
                "action must be an object with a string `type`".to_owned(),
            ));
        };

        if !LayoutAction::TYPE_NAMES
            .iter()
            .any(|known| *known == action_type)
        {
            warn!(action_type, "unknown action type dispatched");
            return Ok(DispatchOutcome::Ignored);
        }

        let action: LayoutAction = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidAction(format!("malformed action payload: {e}"))
        })?;
        Ok(self.dispatch(action))
    }

    fn receive_axis_report(
        &mut self,
        orientation: AxisOrientation,
        report: AxisReport,
    ) -> DispatchOutcome {
        if !self.state.chart.initialized {
            self.sync.hold_report(orientation, report);
            trace!(axis = %orientation, "hold axis report until chart is measured");
            return DispatchOutcome::Deferred;
        }
        self.apply_axis_report(orientation, report)
    }

    pub(super) fn apply_axis_report(
        &mut self,
        orientation: AxisOrientation,
        report: AxisReport,
    ) -> DispatchOutcome {
        let gate = layout_rendered_axis(&mut self.state, &self.config, orientation, report);
        self.outcome_for_gate(gate)
    }

    fn remove_axis(&mut self, orientation: AxisOrientation) -> DispatchOutcome {
        unregister_axis(&mut self.state.axes, orientation);
        if !self.state.chart.initialized {
            return DispatchOutcome::Applied;
        }

        let gate = run_finalization_gate(&mut self.state, &self.config);
        debug!(axis = %orientation, ?gate, "axis removed");
        self.outcome_for_gate(gate)
    }

    fn outcome_for_gate(&mut self, gate: AxisGate) -> DispatchOutcome {
        match gate {
            AxisGate::Pending => {
                self.phase = LayoutPhase::AxesRendering;
                DispatchOutcome::Applied
            }
            AxisGate::Recomputed => {
                self.phase = LayoutPhase::CanvasReady;
                DispatchOutcome::Applied
            }
            AxisGate::Finalized => {
                self.phase = LayoutPhase::CanvasReady;
                DispatchOutcome::LayoutFinalized
            }
        }
    }
}
