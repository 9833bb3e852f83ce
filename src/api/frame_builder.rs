use tracing::debug;

use crate::core::{ParsedSeries, PriceScale, TimeScale, monotone_segments};
use crate::error::ChartResult;
use crate::render::{PathCommand, PathPrimitive, RenderFrame};

use super::{ChartEngineConfig, RenderInputs, annotations, axis_grid};

/// Materializes backend-agnostic primitives for one draw pass.
///
/// Pure with respect to its inputs: the same config and inputs always
/// produce the same frame, and no state survives between calls. Returns
/// `None` when the parsed series is empty (rendering short-circuits).
pub fn build_render_frame(
    config: &ChartEngineConfig,
    inputs: &RenderInputs<'_>,
) -> ChartResult<Option<RenderFrame>> {
    config.validate()?;

    let series = ParsedSeries::parse(inputs.series);
    if series.is_empty() {
        debug!(
            dropped = series.dropped(),
            "skipping render of empty price series"
        );
        return Ok(None);
    }
    build_frame_from_series(config, &series, inputs).map(Some)
}

pub(super) fn build_frame_from_series(
    config: &ChartEngineConfig,
    series: &ParsedSeries,
    inputs: &RenderInputs<'_>,
) -> ChartResult<RenderFrame> {
    let geometry = config.geometry;
    let style = &config.style;

    // Scales are built once and shared by every stage of the pass so the
    // curve, gridlines, and annotations stay pixel-aligned.
    let time_scale = TimeScale::from_points(series.points(), geometry.plot_width())?;
    let price_scale = PriceScale::from_points(series.points(), geometry.plot_height())?;

    let mut frame = RenderFrame::new(geometry);
    axis_grid::push_axes_and_grid(&mut frame, time_scale, price_scale, geometry, style)?;
    push_price_curve(&mut frame, series, time_scale, price_scale, style)?;
    annotations::push_change_points(
        &mut frame,
        inputs.change_points,
        time_scale,
        geometry,
        style,
    )?;
    if let Some(event) = inputs.selected_event {
        annotations::push_event_highlight(
            &mut frame,
            event,
            series,
            time_scale,
            price_scale,
            style,
        )?;
    }

    frame.validate()?;
    debug!(
        points = series.len(),
        dropped = series.dropped(),
        primitives = frame.len(),
        "built render frame"
    );
    Ok(frame)
}

/// Projects the series through the shared scales and emits one continuous
/// monotone path. A single-point series yields no curve.
fn push_price_curve(
    frame: &mut RenderFrame,
    series: &ParsedSeries,
    time_scale: TimeScale,
    price_scale: PriceScale,
    style: &super::RenderStyle,
) -> ChartResult<()> {
    let mut projected = Vec::with_capacity(series.len());
    for point in series.points() {
        projected.push((
            time_scale.time_to_pixel(point.time)?,
            price_scale.price_to_pixel(point.price)?,
        ));
    }

    let segments = monotone_segments(&projected);
    if segments.is_empty() {
        return Ok(());
    }

    let mut commands = Vec::with_capacity(segments.len() + 1);
    commands.push(PathCommand::MoveTo {
        x: segments[0].x0,
        y: segments[0].y0,
    });
    for segment in segments {
        commands.push(PathCommand::CubicTo {
            cx1: segment.cx1,
            cy1: segment.cy1,
            cx2: segment.cx2,
            cy2: segment.cy2,
            x: segment.x1,
            y: segment.y1,
        });
    }

    frame.push_path(PathPrimitive::new(
        commands,
        style.series_stroke_width,
        style.series_line_color,
    ));
    Ok(())
}
