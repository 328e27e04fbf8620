use crate::core::ElementMetrics;
use crate::measure::ElementProbe;

/// Probe returning fixed metrics, used by tests and headless hosts.
///
/// It counts how often it was queried so callers can assert the core
/// measures exactly once per measurement phase.
#[derive(Debug, Default)]
pub struct StaticElementProbe {
    pub metrics: ElementMetrics,
    pub measure_count: u32,
}

impl StaticElementProbe {
    #[must_use]
    pub fn new(metrics: ElementMetrics) -> Self {
        Self {
            metrics,
            measure_count: 0,
        }
    }
}

impl ElementProbe for StaticElementProbe {
    fn measure(&mut self) -> ElementMetrics {
        self.measure_count += 1;
        self.metrics
    }
}
