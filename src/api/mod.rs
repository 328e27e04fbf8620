mod action_dispatcher;
mod axis_layout_calculator;
mod canvas_sizer;
mod engine;
mod engine_config;
mod layout_snapshot;
mod layout_state;
mod lifecycle;
mod range_resolver;
mod registration_tracker;
mod resize_debouncer;

pub use action_dispatcher::{DispatchOutcome, LayoutAction};
pub use axis_layout_calculator::{AxisReport, TickMargins};
pub use engine::{ChartLayoutEngine, DisposedLayout};
pub use engine_config::ChartLayoutConfig;
pub use layout_snapshot::{
    LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1,
};
pub use layout_state::{AxesState, AxisState, CanvasState, ChartLayoutState, ChartState};
pub use lifecycle::LayoutPhase;
pub use resize_debouncer::{DEFAULT_RESIZE_DEBOUNCE, ResizeDebouncer};
