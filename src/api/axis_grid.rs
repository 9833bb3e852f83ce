use chrono::DateTime;

use crate::core::{Geometry, PriceScale, TimeScale, day_aligned_time_ticks, nice_linear_ticks};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::RenderStyle;

const TICK_LABEL_GAP_PX: f64 = 4.0;

/// Emits both axes, tick labels, gridlines, and axis titles.
///
/// Runs first in the render pass so every later element draws on top.
pub(super) fn push_axes_and_grid(
    frame: &mut RenderFrame,
    time_scale: TimeScale,
    price_scale: PriceScale,
    geometry: Geometry,
    style: &RenderStyle,
) -> ChartResult<()> {
    push_time_axis(frame, time_scale, geometry, style)?;
    push_price_axis_and_grid(frame, price_scale, geometry, style)?;
    push_axis_titles(frame, geometry, style);
    Ok(())
}

/// Bottom axis at `y = plot_height`: axis line, tick marks, date labels.
fn push_time_axis(
    frame: &mut RenderFrame,
    time_scale: TimeScale,
    geometry: Geometry,
    style: &RenderStyle,
) -> ChartResult<()> {
    let plot_width = geometry.plot_width();
    let plot_height = geometry.plot_height();

    frame.push_line(LinePrimitive::new(
        0.0,
        plot_height,
        plot_width,
        plot_height,
        style.axis_line_width,
        style.axis_line_color,
    ));

    let (domain_start, domain_end) = time_scale.domain();
    for tick in day_aligned_time_ticks(domain_start, domain_end, style.time_tick_target) {
        let x = time_scale.time_to_pixel(tick)?;
        frame.push_line(LinePrimitive::new(
            x,
            plot_height,
            x,
            plot_height + style.axis_tick_mark_length_px,
            style.axis_line_width,
            style.axis_line_color,
        ));
        frame.push_text(TextPrimitive::new(
            format_time_label(tick)?,
            x,
            plot_height + style.axis_tick_mark_length_px + TICK_LABEL_GAP_PX,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

/// Left axis at `x = 0` plus horizontal gridlines at the same tick rows.
fn push_price_axis_and_grid(
    frame: &mut RenderFrame,
    price_scale: PriceScale,
    geometry: Geometry,
    style: &RenderStyle,
) -> ChartResult<()> {
    let plot_width = geometry.plot_width();
    let plot_height = geometry.plot_height();

    frame.push_line(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        plot_height,
        style.axis_line_width,
        style.axis_line_color,
    ));

    let (domain_start, domain_end) = price_scale.domain();
    let ticks = nice_linear_ticks(domain_start, domain_end, style.price_tick_target);
    let tick_step = tick_step_hint(&ticks);

    for tick in ticks {
        let y = price_scale.price_to_pixel(tick)?;
        frame.push_line(LinePrimitive::new(
            -style.axis_tick_mark_length_px,
            y,
            0.0,
            y,
            style.axis_line_width,
            style.axis_line_color,
        ));
        frame.push_text(TextPrimitive::new(
            format_price_label(tick, tick_step),
            -style.axis_tick_mark_length_px - TICK_LABEL_GAP_PX,
            y - style.axis_label_font_size_px * 0.5,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
        // Gridline companion to the tick row, text-free.
        frame.push_line(LinePrimitive::new(
            0.0,
            y,
            plot_width,
            y,
            style.grid_line_width,
            style.grid_line_color,
        ));
    }
    Ok(())
}

fn push_axis_titles(frame: &mut RenderFrame, geometry: Geometry, style: &RenderStyle) {
    frame.push_text(TextPrimitive::new(
        style.time_axis_title.clone(),
        geometry.plot_width() * 0.5,
        geometry.plot_height() + geometry.margin.bottom,
        style.axis_title_font_size_px,
        style.axis_title_color,
        TextHAlign::Center,
    ));
    frame.push_text(
        TextPrimitive::new(
            style.price_axis_title.clone(),
            -geometry.margin.left + style.axis_title_font_size_px,
            geometry.plot_height() * 0.5,
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Center,
        )
        .with_rotation(-90.0),
    );
}

fn format_time_label(unix_seconds: f64) -> ChartResult<String> {
    let datetime = DateTime::from_timestamp(unix_seconds as i64, 0).ok_or_else(|| {
        ChartError::InvalidData(format!("time tick {unix_seconds} is outside datetime range"))
    })?;
    Ok(datetime.date_naive().format("%Y-%m-%d").to_string())
}

/// Distance between adjacent ticks, used to pick label precision.
fn tick_step_hint(ticks: &[f64]) -> f64 {
    ticks
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .find(|step| step.is_finite() && *step > 0.0)
        .unwrap_or(1.0)
}

fn format_price_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil().max(0.0).min(6.0) as usize
    };
    format!("{value:.decimals$}")
}
