use std::time::Duration;

use chart_layout::api::{
    AxisReport, ChartLayoutConfig, ChartLayoutEngine, DEFAULT_RESIZE_DEBOUNCE, LayoutAction,
    LayoutPhase,
};
use chart_layout::core::{AxisAlignment, AxisOrientation, ContainerSize, ElementMetrics, TickMetric};
use chart_layout::measure::StaticElementProbe;

fn laid_out_engine(config: ChartLayoutConfig) -> ChartLayoutEngine {
    let mut engine = ChartLayoutEngine::new(config);
    let mut probe = StaticElementProbe::new(ElementMetrics::new(800.0, 600.0));
    engine.mount();
    engine.flush_sync(&mut probe);

    engine.dispatch(LayoutAction::RegisterAxis);
    engine.dispatch(LayoutAction::RegisterAxis);
    engine.dispatch(LayoutAction::RenderedTick {
        axis: AxisOrientation::X,
        tick: TickMetric::new(20.0, 12.0),
    });
    engine.dispatch(LayoutAction::RenderedTick {
        axis: AxisOrientation::X,
        tick: TickMetric::new(20.0, 12.0),
    });
    engine.dispatch(LayoutAction::RenderedXAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Bottom,
            height: 30.0,
            width: 780.0,
            ticks: Some(8),
            tick_height: Some(6.0),
        },
    });
    engine.dispatch(LayoutAction::RenderedYAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Left,
            height: 570.0,
            width: 50.0,
            ticks: Some(5),
            tick_height: None,
        },
    });
    engine
}

fn dynamic_config() -> ChartLayoutConfig {
    ChartLayoutConfig::new((0.0, 100.0), (0.0, 10.0))
}

#[test]
fn default_debounce_is_one_frame_at_sixty_hz() {
    let engine = ChartLayoutEngine::new(dynamic_config());
    assert_eq!(engine.config().resize_debounce(), DEFAULT_RESIZE_DEBOUNCE);
    assert_eq!(DEFAULT_RESIZE_DEBOUNCE, Duration::from_micros(16_667));
}

#[test]
fn burst_of_resizes_applies_only_latest_once() {
    let mut engine = laid_out_engine(dynamic_config());
    assert_eq!(engine.canvas().width, Some(730.0));

    let mut now = Duration::ZERO;
    for width in [900.0, 950.0, 1000.0, 1100.0] {
        assert!(engine.on_resize(ContainerSize::new(width, 650.0), now));
        now += Duration::from_millis(5);
        assert!(!engine.advance(now));
    }
    assert_eq!(engine.phase(), LayoutPhase::ResizePending);
    assert_eq!(engine.state().chart.width, Some(800.0));

    let deadline = engine
        .pending_resize_deadline()
        .expect("resize should be pending");
    assert_eq!(deadline, Duration::from_millis(15) + DEFAULT_RESIZE_DEBOUNCE);

    assert!(engine.advance(deadline));
    assert_eq!(engine.state().chart.width, Some(1100.0));
    assert_eq!(engine.state().chart.height, Some(650.0));
    assert_eq!(engine.canvas().width, Some(1030.0));
    assert_eq!(engine.canvas().height, Some(620.0));
    assert_eq!(engine.range_x(), Some((0.0, 1030.0)));
    assert_eq!(engine.range_y(), Some((620.0, 0.0)));
    assert_eq!(engine.phase(), LayoutPhase::CanvasReady);

    assert!(!engine.advance(deadline + Duration::from_secs(1)));
}

#[test]
fn resize_is_ignored_when_both_ranges_are_pinned() {
    let config = dynamic_config()
        .with_x_range((0.0, 500.0))
        .with_y_range((400.0, 0.0));
    let mut engine = laid_out_engine(config);

    assert!(!engine.on_resize(ContainerSize::new(1200.0, 900.0), Duration::ZERO));
    assert!(!engine.has_pending_resize());
    assert!(!engine.advance(Duration::from_secs(1)));
    assert_eq!(engine.state().chart.width, Some(800.0));
    assert_eq!(engine.range_x(), Some((0.0, 500.0)));
    assert_eq!(engine.range_y(), Some((400.0, 0.0)));
}

#[test]
fn one_dynamic_range_keeps_resize_active() {
    let config = dynamic_config().with_x_range((0.0, 500.0));
    let mut engine = laid_out_engine(config);

    assert!(engine.on_resize(ContainerSize::new(800.0, 700.0), Duration::ZERO));
    assert!(engine.advance(DEFAULT_RESIZE_DEBOUNCE));
    assert_eq!(engine.range_x(), Some((0.0, 500.0)));
    assert_eq!(engine.range_y(), Some((670.0, 0.0)));
}

#[test]
fn unchanged_size_does_not_recompute() {
    let mut engine = laid_out_engine(dynamic_config());

    engine.on_resize(ContainerSize::new(800.0, 600.0), Duration::ZERO);
    assert!(!engine.advance(DEFAULT_RESIZE_DEBOUNCE));
    assert!(!engine.has_pending_resize());
    assert_eq!(engine.canvas().width, Some(730.0));
}

#[test]
fn height_only_change_recomputes_canvas() {
    let mut engine = laid_out_engine(dynamic_config());

    engine.on_resize(ContainerSize::new(800.0, 480.0), Duration::ZERO);
    assert!(engine.advance(DEFAULT_RESIZE_DEBOUNCE));
    assert_eq!(engine.state().chart.width, Some(800.0));
    assert_eq!(engine.canvas().height, Some(450.0));
    assert_eq!(engine.canvas().width, Some(730.0));
}

#[test]
fn custom_debounce_delay_is_honored() {
    let config = dynamic_config().with_resize_debounce(Duration::from_millis(100));
    let mut engine = laid_out_engine(config);

    engine.on_resize(ContainerSize::new(640.0, 480.0), Duration::from_millis(1_000));
    assert!(!engine.advance(Duration::from_millis(1_099)));
    assert!(engine.advance(Duration::from_millis(1_100)));
    assert_eq!(engine.canvas().width, Some(570.0));
}

#[test]
fn resize_while_late_axis_is_pending_recomputes_canvas() {
    let mut engine = ChartLayoutEngine::new(dynamic_config());
    let mut probe = StaticElementProbe::new(ElementMetrics::new(800.0, 600.0));
    engine.mount();
    engine.flush_sync(&mut probe);
    engine.dispatch(LayoutAction::RegisterAxis);
    engine.dispatch(LayoutAction::RenderedXAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Bottom,
            height: 30.0,
            width: 800.0,
            ticks: None,
            tick_height: None,
        },
    });
    assert_eq!(engine.canvas().width, Some(800.0));
    assert_eq!(engine.canvas().height, Some(570.0));

    engine.dispatch(LayoutAction::RegisterAxis);
    assert!(!engine.is_layout_ready());

    engine.on_resize(ContainerSize::new(400.0, 300.0), Duration::ZERO);
    assert!(engine.advance(DEFAULT_RESIZE_DEBOUNCE));
    assert!(!engine.is_layout_ready());
    assert_eq!(engine.state().chart.width, Some(400.0));
    assert_eq!(engine.canvas().width, Some(400.0));
    assert_eq!(engine.canvas().height, Some(270.0));
    assert_eq!(engine.range_x(), Some((0.0, 400.0)));
    assert_eq!(engine.range_y(), Some((270.0, 0.0)));

    engine.dispatch(LayoutAction::RenderedYAxis {
        axis: AxisReport {
            alignment: AxisAlignment::Left,
            height: 270.0,
            width: 60.0,
            ticks: None,
            tick_height: None,
        },
    });
    assert!(engine.is_layout_ready());
    assert_eq!(engine.canvas().width, Some(340.0));
    assert_eq!(engine.canvas().height, Some(270.0));
}

#[test]
fn resize_before_measurement_is_overwritten_by_measurement() {
    let mut engine = ChartLayoutEngine::new(dynamic_config());
    engine.on_resize(ContainerSize::new(1000.0, 500.0), Duration::ZERO);
    assert!(!engine.advance(DEFAULT_RESIZE_DEBOUNCE));
    assert_eq!(engine.state().chart.width, Some(1000.0));
    assert_eq!(engine.canvas().width, None);

    let mut probe = StaticElementProbe::new(ElementMetrics::new(800.0, 600.0));
    engine.mount();
    engine.flush_sync(&mut probe);
    assert_eq!(engine.state().chart.width, Some(800.0));
    assert_eq!(engine.state().chart.height, Some(600.0));
}

#[test]
fn dispose_drops_pending_resize() {
    let mut engine = laid_out_engine(dynamic_config());
    engine.on_resize(ContainerSize::new(1000.0, 500.0), Duration::ZERO);
    assert!(engine.has_pending_resize());

    let disposed = engine.dispose();
    assert!(disposed.dropped_resize);
    assert_eq!(disposed.dropped_held_reports, 0);
}
