pub mod scale;
pub mod types;

pub use scale::{AxisScale, LinearScale};
pub use types::{
    AxisAlignment, AxisOrientation, ContainerSize, ElementMetrics, Extent, OrientedPair, Padding,
    TickMetric,
};
