use serde::{Deserialize, Serialize};

use crate::core::{Extent, OrientedPair};
use crate::error::{ChartError, ChartResult};

use super::layout_state::{AxesState, CanvasState, ChartState};
use super::lifecycle::LayoutPhase;
use super::ChartLayoutEngine;

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable layout state used by regression tests and debugging tooling.
///
/// Scales are opaque, so only their names are captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub phase: LayoutPhase,
    pub chart: ChartState,
    pub canvas: CanvasState,
    pub axes: AxesState,
    pub domain: OrientedPair<Option<Extent>>,
    pub range: OrientedPair<Option<Extent>>,
    pub scale: OrientedPair<String>,
    pub resize_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LayoutSnapshot,
}

impl LayoutSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<LayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartLayoutEngine {
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        let state = &self.state;
        LayoutSnapshot {
            phase: self.phase(),
            chart: state.chart,
            canvas: state.canvas,
            axes: state.axes.clone(),
            domain: state.domain,
            range: state.range,
            scale: state.scale.map(|scale| scale.name().to_owned()),
            resize_pending: self.resize.is_pending(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
