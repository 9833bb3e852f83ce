use approx::assert_relative_eq;
use pricechart_rs::api::{
    ChartEngine, ChartEngineConfig, RenderInputs, RenderOutcome, RenderState, build_render_frame,
};
use pricechart_rs::core::{
    PRICE_HEADROOM_RATIO, RawChangePoint, RawPrice, RawPricePoint, SelectedEvent,
};
use pricechart_rs::render::{DrawPrimitive, NullRenderer, RenderFrame};

fn row(date: &str, price: f64) -> RawPricePoint {
    RawPricePoint {
        date: date.to_owned(),
        price: RawPrice::Number(price),
    }
}

fn change_point(date: &str) -> RawChangePoint {
    RawChangePoint {
        date: date.to_owned(),
    }
}

fn event(date: &str, impact: &str) -> SelectedEvent {
    SelectedEvent {
        event_id: 1,
        event_date: date.to_owned(),
        event_name: "OPEC production cut".to_owned(),
        event_type: "OPEC".to_owned(),
        expected_impact: impact.to_owned(),
        description: String::new(),
    }
}

fn sample_series() -> Vec<RawPricePoint> {
    vec![
        row("2020-01-01", 50.0),
        row("2020-01-02", 55.0),
        row("2020-01-03", 45.0),
    ]
}

fn build(inputs: &RenderInputs<'_>) -> RenderFrame {
    build_render_frame(&ChartEngineConfig::default(), inputs)
        .expect("frame build")
        .expect("non-empty series")
}

#[test]
fn empty_series_skips_rendering_and_stays_idle() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");

    let outcome = engine
        .render(&RenderInputs::new(&[], &[]))
        .expect("render");
    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(engine.state(), RenderState::Idle);

    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_calls, 0);
}

#[test]
fn series_emptied_by_dropped_rows_also_skips() {
    let series = vec![row("bad-date", 50.0)];
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");

    let outcome = engine
        .render(&RenderInputs::new(&series, &[]))
        .expect("render");
    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(engine.state(), RenderState::Idle);
}

#[test]
fn render_reaches_the_renderer_and_reports_counts() {
    let series = sample_series();
    let change_points = vec![change_point("2020-01-02")];
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");

    let outcome = engine
        .render(&RenderInputs::new(&series, &change_points))
        .expect("render");
    let RenderOutcome::Rendered {
        point_count,
        dropped_point_count,
        primitive_count,
    } = outcome
    else {
        panic!("expected a rendered outcome");
    };
    assert_eq!(point_count, 3);
    assert_eq!(dropped_point_count, 0);
    assert!(primitive_count > 0);
    assert_eq!(engine.state(), RenderState::Rendered);

    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_primitive_count, primitive_count);
}

#[test]
fn rendering_after_data_loss_returns_to_idle() {
    let series = sample_series();
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");

    engine
        .render(&RenderInputs::new(&series, &[]))
        .expect("render");
    assert_eq!(engine.state(), RenderState::Rendered);

    engine.render(&RenderInputs::new(&[], &[])).expect("render");
    assert_eq!(engine.state(), RenderState::Idle);
}

#[test]
fn price_domain_matches_scenario() {
    let series = sample_series();
    let frame = build(&RenderInputs::new(&series, &[]));

    // Highest gridline row corresponds to a tick at or below 1.1 * 55.
    assert!(frame.validate().is_ok());
    let config = ChartEngineConfig::default();
    let expected_upper = 55.0 * PRICE_HEADROOM_RATIO;
    assert_relative_eq!(expected_upper, 60.5, epsilon = 1e-9);
    // Gridline tick rows never exceed the plot area.
    for line in frame
        .lines()
        .filter(|line| line.color == config.style.grid_line_color)
    {
        assert!(line.y1 >= -1e-9 && line.y1 <= frame.geometry.plot_height() + 1e-9);
    }
}

#[test]
fn each_change_point_yields_one_dashed_marker_and_label_in_input_order() {
    let series = sample_series();
    // Duplicates and out-of-range dates still produce a marker each.
    let change_points = vec![
        change_point("2020-01-02"),
        change_point("2020-01-02"),
        change_point("2021-06-01"),
    ];
    let frame = build(&RenderInputs::new(&series, &change_points));

    let config = ChartEngineConfig::default();
    let markers: Vec<_> = frame.lines().filter(|line| line.is_dashed()).collect();
    assert_eq!(markers.len(), 3);

    let plot_height = frame.geometry.plot_height();
    let plot_width = frame.geometry.plot_width();
    for marker in &markers {
        assert_eq!(marker.x1, marker.x2);
        assert_eq!(marker.y1, 0.0);
        assert_relative_eq!(marker.y2, plot_height, epsilon = 1e-9);
        assert_eq!(marker.color, config.style.change_point_color);
    }

    // First two markers share the scenario position at the domain midpoint.
    assert_relative_eq!(markers[0].x1, plot_width / 2.0, epsilon = 1e-6);
    assert_relative_eq!(markers[1].x1, plot_width / 2.0, epsilon = 1e-6);
    // The out-of-range marker still lands where the scale extrapolates.
    assert!(markers[2].x1 > plot_width);

    let labels = frame
        .texts()
        .filter(|text| text.text == config.style.change_point_label)
        .count();
    assert_eq!(labels, 3);
}

#[test]
fn malformed_change_point_is_dropped_without_failing_the_pass() {
    let series = sample_series();
    let change_points = vec![change_point("2020-01-02"), change_point("garbage")];
    let frame = build(&RenderInputs::new(&series, &change_points));

    assert_eq!(frame.lines().filter(|line| line.is_dashed()).count(), 1);
}

#[test]
fn matched_event_marker_sits_on_the_curve() {
    let series = sample_series();
    let selected = event("2020-01-02", "increase");
    let inputs = RenderInputs::new(&series, &[]).with_selected_event(&selected);
    let frame = build(&inputs);

    let config = ChartEngineConfig::default();
    let marker = frame.circles().next().expect("event marker");
    // y(55) with domain [0, 60.5] over an inverted 440 px range.
    let expected_y = frame.geometry.plot_height() * (1.0 - 55.0 / 60.5);
    assert_relative_eq!(marker.cy, expected_y, epsilon = 1e-6);
    assert_relative_eq!(marker.cx, frame.geometry.plot_width() / 2.0, epsilon = 1e-6);
    assert_eq!(marker.fill, config.style.event_increase_fill);
    assert_eq!(marker.radius, config.style.event_marker_radius_px);
}

#[test]
fn unmatched_event_marker_falls_back_to_the_zero_baseline() {
    let series = sample_series();
    let selected = event("2020-01-05", "decrease");
    let inputs = RenderInputs::new(&series, &[]).with_selected_event(&selected);
    let frame = build(&inputs);

    let config = ChartEngineConfig::default();
    let marker = frame.circles().next().expect("event marker");
    assert_relative_eq!(marker.cy, frame.geometry.plot_height(), epsilon = 1e-9);
    // Two days past a two-day domain: one full plot width beyond the right edge.
    assert!(marker.cx > frame.geometry.plot_width());
    assert_eq!(marker.fill, config.style.event_decrease_fill);
}

#[test]
fn event_with_malformed_date_is_skipped_silently() {
    let series = sample_series();
    let selected = event("05-01-2020", "increase");
    let inputs = RenderInputs::new(&series, &[]).with_selected_event(&selected);
    let frame = build(&inputs);

    assert_eq!(frame.circles().count(), 0);
}

#[test]
fn identical_inputs_produce_identical_frames() {
    let series = sample_series();
    let change_points = vec![change_point("2020-01-02")];
    let selected = event("2020-01-02", "increase");
    let inputs = RenderInputs::new(&series, &change_points).with_selected_event(&selected);

    let first = build(&inputs);
    let second = build(&inputs);
    assert_eq!(first, second);
}

#[test]
fn draw_order_puts_axes_below_curve_below_annotations() {
    let series = sample_series();
    let change_points = vec![change_point("2020-01-02")];
    let selected = event("2020-01-02", "increase");
    let inputs = RenderInputs::new(&series, &change_points).with_selected_event(&selected);
    let frame = build(&inputs);

    let first_axis_line = frame
        .primitives
        .iter()
        .position(|primitive| matches!(primitive, DrawPrimitive::Line(_)))
        .expect("axis line");
    let curve = frame
        .primitives
        .iter()
        .position(|primitive| matches!(primitive, DrawPrimitive::Path(_)))
        .expect("curve path");
    let change_marker = frame
        .primitives
        .iter()
        .position(|primitive| {
            matches!(primitive, DrawPrimitive::Line(line) if line.is_dashed())
        })
        .expect("change-point marker");
    let event_marker = frame
        .primitives
        .iter()
        .position(|primitive| matches!(primitive, DrawPrimitive::Circle(_)))
        .expect("event marker");

    assert!(first_axis_line < curve);
    assert!(curve < change_marker);
    assert!(change_marker < event_marker);
}

#[test]
fn curve_path_covers_all_points_with_one_move_and_cubics() {
    use pricechart_rs::render::PathCommand;

    let series = sample_series();
    let frame = build(&RenderInputs::new(&series, &[]));

    let path = frame.paths().next().expect("price curve");
    assert_eq!(path.commands.len(), 3);
    assert!(matches!(path.commands[0], PathCommand::MoveTo { .. }));
    assert!(
        path.commands[1..]
            .iter()
            .all(|command| matches!(command, PathCommand::CubicTo { .. }))
    );
}

#[test]
fn single_point_series_renders_without_a_curve() {
    let series = vec![row("2020-01-01", 50.0)];
    let frame = build(&RenderInputs::new(&series, &[]));

    assert_eq!(frame.paths().count(), 0);
    assert!(frame.lines().count() > 0);
}
