//! chart-layout: layout coordination core for charts.
//!
//! A chart's plot canvas depends on margins taken from tick labels its axis
//! children only know after they render. This crate owns the resulting
//! register-then-report protocol, derives the canvas and default ranges once
//! every registered axis has reported, and debounces container resizes.
//! Rendering, measurement and resize detection stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod measure;
pub mod telemetry;

pub use api::{ChartLayoutConfig, ChartLayoutEngine, LayoutAction};
pub use error::{ChartError, ChartResult};
