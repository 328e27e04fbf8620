use approx::assert_relative_eq;
use chart_layout::api::{AxisReport, ChartLayoutConfig, ChartLayoutEngine, LayoutAction};
use chart_layout::core::{
    AxisAlignment, AxisOrientation, AxisScale, ElementMetrics, Extent, Padding, TickMetric,
};
use chart_layout::measure::StaticElementProbe;

fn run_reference_layout(config: ChartLayoutConfig) -> ChartLayoutEngine {
    let mut engine = ChartLayoutEngine::new(config);
    let mut probe = StaticElementProbe::new(ElementMetrics::new(800.0, 600.0));
    engine.mount();
    engine.flush_sync(&mut probe);

    engine.dispatch(LayoutAction::RegisterAxis);
    engine.dispatch(LayoutAction::RegisterAxis);
    for _ in 0..2 {
        engine.dispatch(LayoutAction::RenderedTick {
            axis: AxisOrientation::X,
            tick: TickMetric::new(20.0, 14.0),
        });
        engine.dispatch(LayoutAction::RenderedTick {
            axis: AxisOrientation::Y,
            tick: TickMetric::new(36.0, 10.0),
        });
    }
    engine.dispatch(LayoutAction::RenderedXAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Bottom,
            height: 30.0,
            width: 780.0,
            ticks: Some(10),
            tick_height: Some(6.0),
        },
    });
    engine.dispatch(LayoutAction::RenderedYAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Left,
            height: 560.0,
            width: 50.0,
            ticks: Some(5),
            tick_height: None,
        },
    });
    engine
}

#[test]
fn reference_chart_produces_expected_canvas() {
    let engine = run_reference_layout(ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0)));
    let axes = &engine.state().axes;

    assert_eq!(axes.x.first_tick_margin, Some(10.0));
    assert_eq!(axes.x.last_tick_margin, Some(10.0));
    assert_eq!(axes.x.width, Some(760.0));
    assert_eq!(axes.x.height, Some(30.0));
    assert_eq!(axes.x.tick_height, Some(6.0));

    assert_eq!(axes.y.first_tick_margin, Some(5.0));
    assert_eq!(axes.y.last_tick_margin, Some(5.0));
    assert_eq!(axes.y.height, Some(550.0));
    assert_eq!(axes.y.width, Some(50.0));

    assert_eq!(engine.canvas().height, Some(560.0));
    assert_eq!(engine.canvas().width, Some(730.0));
}

#[test]
fn dynamic_ranges_follow_canvas() {
    let engine = run_reference_layout(ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0)));
    assert_eq!(engine.range_x(), Some((0.0, 730.0)));
    assert_eq!(engine.range_y(), Some((560.0, 0.0)));
}

#[test]
fn pinned_ranges_are_never_overwritten() {
    let config = ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0))
        .with_x_range((10.0, 20.0))
        .with_y_range((0.0, 300.0));
    let engine = run_reference_layout(config);

    assert_eq!(engine.range_x(), Some((10.0, 20.0)));
    assert_eq!(engine.range_y(), Some((0.0, 300.0)));
    assert_eq!(engine.canvas().width, Some(730.0));
}

#[test]
fn one_pinned_range_leaves_the_other_dynamic() {
    let config = ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0)).with_y_range((0.0, 300.0));
    let engine = run_reference_layout(config);

    assert_eq!(engine.range_x(), Some((0.0, 730.0)));
    assert_eq!(engine.range_y(), Some((0.0, 300.0)));
}

#[test]
fn container_padding_is_recorded_but_not_subtracted() {
    let mut engine = ChartLayoutEngine::new(ChartLayoutConfig::new((0.0, 1.0), (0.0, 1.0)));
    let padding = Padding {
        top: 4.0,
        right: 8.0,
        bottom: 4.0,
        left: 8.0,
    };
    let mut probe =
        StaticElementProbe::new(ElementMetrics::new(400.0, 300.0).with_padding(padding));
    engine.mount();
    engine.flush_sync(&mut probe);
    engine.dispatch(LayoutAction::RenderedYAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Right,
            height: 300.0,
            width: 40.0,
            ticks: None,
            tick_height: None,
        },
    });

    assert_eq!(engine.state().chart.padding, padding);
    assert_eq!(engine.canvas().width, Some(360.0));
    assert_eq!(engine.canvas().height, Some(300.0));
}

#[test]
fn fractional_tick_margins_are_carried_exactly() {
    let mut engine = ChartLayoutEngine::new(ChartLayoutConfig::new((0.0, 1.0), (0.0, 1.0)));
    let mut probe = StaticElementProbe::new(ElementMetrics::new(500.5, 320.25));
    engine.mount();
    engine.flush_sync(&mut probe);
    engine.dispatch(LayoutAction::RegisterAxis);
    engine.dispatch(LayoutAction::RenderedTick {
        axis: AxisOrientation::X,
        tick: TickMetric::new(17.3, 11.0),
    });
    engine.dispatch(LayoutAction::RenderedTick {
        axis: AxisOrientation::X,
        tick: TickMetric::new(23.9, 11.0),
    });
    engine.dispatch(LayoutAction::RenderedXAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Bottom,
            height: 27.5,
            width: 480.0,
            ticks: Some(6),
            tick_height: Some(4.0),
        },
    });

    let canvas = engine.canvas();
    assert_relative_eq!(canvas.width.unwrap_or(f64::NAN), 500.5 - 8.65 - 11.95);
    assert_relative_eq!(canvas.height.unwrap_or(f64::NAN), 320.25 - 27.5);
    assert_relative_eq!(
        engine.state().axes.x.width.unwrap_or(f64::NAN),
        480.0 - 20.6,
        epsilon = 1e-9
    );
}

#[test]
fn projection_uses_default_linear_scale_and_resolved_range() {
    let engine = run_reference_layout(ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0)));

    assert_eq!(engine.project_x(0.0), Some(0.0));
    assert_eq!(engine.project_x(50.0), Some(365.0));
    assert_eq!(engine.project_y(0.0), Some(560.0));
    assert_eq!(engine.project_y(10.0), Some(0.0));
    assert_eq!(engine.state().scale.x.name(), "linear");
}

#[test]
fn projection_is_unavailable_before_layout() {
    let engine = ChartLayoutEngine::new(ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0)));
    assert_eq!(engine.project_x(10.0), None);
    assert_eq!(engine.project_y(10.0), None);
}

#[derive(Debug)]
struct StepScale;

impl AxisScale for StepScale {
    fn name(&self) -> &str {
        "step"
    }

    fn map(&self, value: f64, domain: Extent, range: Extent) -> f64 {
        if value < (domain.0 + domain.1) / 2.0 {
            range.0
        } else {
            range.1
        }
    }
}

#[test]
fn caller_scale_replaces_default() {
    let config = ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0));
    let mut engine = ChartLayoutEngine::new(config).with_x_scale(Box::new(StepScale));
    let mut probe = StaticElementProbe::new(ElementMetrics::new(200.0, 100.0));
    engine.mount();
    engine.flush_sync(&mut probe);
    engine.dispatch(LayoutAction::RenderedXAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Bottom,
            height: 20.0,
            width: 200.0,
            ticks: None,
            tick_height: None,
        },
    });

    assert_eq!(engine.state().scale.x.name(), "step");
    assert_eq!(engine.state().scale.y.name(), "linear");
    assert_eq!(engine.project_x(10.0), Some(0.0));
    assert_eq!(engine.project_x(90.0), Some(200.0));
}

#[test]
fn invalid_domain_passes_through_to_scale() {
    let config = ChartLayoutConfig::new((f64::NAN, 10.0), (0.0, 10.0));
    let mut engine = ChartLayoutEngine::new(config);
    let mut probe = StaticElementProbe::new(ElementMetrics::new(200.0, 100.0));
    engine.mount();
    engine.flush_sync(&mut probe);
    engine.dispatch(LayoutAction::RenderedXAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Bottom,
            height: 20.0,
            width: 200.0,
            ticks: None,
            tick_height: None,
        },
    });

    assert!(engine.is_layout_ready());
    assert!(engine.state().domain.x.is_some_and(|(min, _)| min.is_nan()));
    assert!(engine.project_x(5.0).is_some_and(f64::is_nan));
}
