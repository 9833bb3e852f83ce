use tracing::warn;

use crate::core::{
    ExpectedImpact, Geometry, ParsedSeries, PriceScale, RawChangePoint, SelectedEvent, TimeScale,
    date_to_unix_seconds, parse_date,
};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RenderFrame, TextHAlign, TextPrimitive,
};

use super::RenderStyle;

/// Emits one dashed full-height marker and one label per change point.
///
/// Input order is preserved; duplicates and out-of-range dates each still
/// produce a marker. Entries with unparseable dates are dropped with a
/// warning, matching the series parse policy.
pub(super) fn push_change_points(
    frame: &mut RenderFrame,
    change_points: &[RawChangePoint],
    time_scale: TimeScale,
    geometry: Geometry,
    style: &RenderStyle,
) -> ChartResult<()> {
    let plot_height = geometry.plot_height();
    let dash = LineStrokeStyle::Dashed {
        dash_px: style.change_point_dash_px,
        gap_px: style.change_point_gap_px,
    };

    for change_point in change_points {
        let date = match parse_date(&change_point.date) {
            Ok(date) => date,
            Err(error) => {
                warn!(date = %change_point.date, %error, "dropping change point with malformed date");
                continue;
            }
        };

        let x = time_scale.time_to_pixel(date_to_unix_seconds(date))?;
        frame.push_line(
            LinePrimitive::new(
                x,
                0.0,
                x,
                plot_height,
                style.change_point_stroke_width,
                style.change_point_color,
            )
            .with_stroke_style(dash),
        );
        frame.push_text(TextPrimitive::new(
            style.change_point_label.clone(),
            x,
            style.change_point_label_y_px,
            style.change_point_label_font_size_px,
            style.change_point_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

/// Emits the filled highlight marker for the selected event.
///
/// When the event date has no exact price-point match the marker's y falls
/// back to the zero-price baseline instead of being suppressed; that
/// fallback is an observable contract of the dashboard and is kept as-is.
/// The x position may land outside the plot area and is emitted unchanged.
pub(super) fn push_event_highlight(
    frame: &mut RenderFrame,
    event: &SelectedEvent,
    series: &ParsedSeries,
    time_scale: TimeScale,
    price_scale: PriceScale,
    style: &RenderStyle,
) -> ChartResult<()> {
    let date = match parse_date(&event.event_date) {
        Ok(date) => date,
        Err(error) => {
            warn!(
                event_id = event.event_id,
                date = %event.event_date,
                %error,
                "dropping selected-event highlight with malformed date"
            );
            return Ok(());
        }
    };

    let price = series.lookup(date).map_or(0.0, |point| point.price);
    let x = time_scale.time_to_pixel(date_to_unix_seconds(date))?;
    let y = price_scale.price_to_pixel(price)?;

    let (fill, border) = impact_colors(ExpectedImpact::from_label(&event.expected_impact), style);
    frame.push_circle(
        CirclePrimitive::new(x, y, style.event_marker_radius_px, fill)
            .with_border(style.event_marker_border_width_px, border),
    );
    Ok(())
}

fn impact_colors(impact: ExpectedImpact, style: &RenderStyle) -> (Color, Color) {
    match impact {
        ExpectedImpact::Increase => (style.event_increase_fill, style.event_increase_border),
        ExpectedImpact::Decrease => (style.event_decrease_fill, style.event_decrease_border),
        ExpectedImpact::Neutral => (style.event_neutral_fill, style.event_neutral_border),
    }
}
