mod static_probe;

pub use static_probe::StaticElementProbe;

use crate::core::ElementMetrics;

/// Contract implemented by whatever can measure the chart container box.
///
/// The layout core queries the probe once per measurement phase and never
/// caches anything beyond the returned metrics, so hosts are free to back
/// this with a DOM element, a widget allocation or a fixed value.
pub trait ElementProbe {
    fn measure(&mut self) -> ElementMetrics;
}
