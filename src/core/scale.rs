use std::fmt;

use crate::core::types::Extent;

/// Domain-to-range mapping consumed by plot renderers.
///
/// The layout core never inspects a scale; it only stores the one the caller
/// picked so renderers can read it back next to the resolved range.
pub trait AxisScale: fmt::Debug {
    fn name(&self) -> &str;
    fn map(&self, value: f64, domain: Extent, range: Extent) -> f64;
}

/// Default scale: straight linear interpolation of `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearScale;

impl AxisScale for LinearScale {
    fn name(&self) -> &str {
        "linear"
    }

    fn map(&self, value: f64, domain: Extent, range: Extent) -> f64 {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        let span = domain_end - domain_start;
        // Degenerate domains collapse onto the middle of the range.
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - domain_start) / span
        };
        range_start + normalized * (range_end - range_start)
    }
}
