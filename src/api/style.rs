use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants for one chart rendering.
///
/// Defaults reproduce the dashboard's original palette: blue price curve,
/// red dashed change-point markers, green selected-event highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub series_line_color: Color,
    pub series_stroke_width: f64,

    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_tick_mark_length_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub time_tick_target: usize,
    pub price_tick_target: usize,

    pub grid_line_color: Color,
    pub grid_line_width: f64,

    pub time_axis_title: String,
    pub price_axis_title: String,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,

    pub change_point_color: Color,
    pub change_point_stroke_width: f64,
    pub change_point_dash_px: f64,
    pub change_point_gap_px: f64,
    pub change_point_label: String,
    pub change_point_label_y_px: f64,
    pub change_point_label_font_size_px: f64,

    pub event_marker_radius_px: f64,
    pub event_marker_border_width_px: f64,
    pub event_increase_fill: Color,
    pub event_increase_border: Color,
    pub event_decrease_fill: Color,
    pub event_decrease_border: Color,
    pub event_neutral_fill: Color,
    pub event_neutral_border: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_color: Color::from_rgb8(0x34, 0x98, 0xdb),
            series_stroke_width: 2.0,

            axis_line_color: Color::from_rgb8(0x33, 0x33, 0x33),
            axis_line_width: 1.0,
            axis_tick_mark_length_px: 6.0,
            axis_label_color: Color::from_rgb8(0x33, 0x33, 0x33),
            axis_label_font_size_px: 10.0,
            time_tick_target: 10,
            price_tick_target: 10,

            grid_line_color: Color::from_rgb8(0xe0, 0xe0, 0xe0),
            grid_line_width: 1.0,

            time_axis_title: "Date".to_owned(),
            price_axis_title: "Price (USD per Barrel)".to_owned(),
            axis_title_color: Color::from_rgb8(0x33, 0x33, 0x33),
            axis_title_font_size_px: 14.0,

            change_point_color: Color::from_rgb8(0xe7, 0x4c, 0x3c),
            change_point_stroke_width: 2.0,
            change_point_dash_px: 5.0,
            change_point_gap_px: 5.0,
            change_point_label: "Change Point".to_owned(),
            change_point_label_y_px: 20.0,
            change_point_label_font_size_px: 12.0,

            event_marker_radius_px: 6.0,
            event_marker_border_width_px: 2.0,
            event_increase_fill: Color::from_rgb8(0x2e, 0xcc, 0x71),
            event_increase_border: Color::from_rgb8(0x27, 0xae, 0x60),
            event_decrease_fill: Color::from_rgb8(0xc0, 0x39, 0x2b),
            event_decrease_border: Color::from_rgb8(0x96, 0x28, 0x1b),
            event_neutral_fill: Color::from_rgb8(0x2e, 0xcc, 0x71),
            event_neutral_border: Color::from_rgb8(0x27, 0xae, 0x60),
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("series_stroke_width", self.series_stroke_width),
            ("axis_line_width", self.axis_line_width),
            ("axis_tick_mark_length_px", self.axis_tick_mark_length_px),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("grid_line_width", self.grid_line_width),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("change_point_stroke_width", self.change_point_stroke_width),
            ("change_point_dash_px", self.change_point_dash_px),
            ("change_point_gap_px", self.change_point_gap_px),
            (
                "change_point_label_font_size_px",
                self.change_point_label_font_size_px,
            ),
            ("event_marker_radius_px", self.event_marker_radius_px),
            (
                "event_marker_border_width_px",
                self.event_marker_border_width_px,
            ),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style field `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.change_point_label_y_px.is_finite() {
            return Err(ChartError::InvalidData(
                "style field `change_point_label_y_px` must be finite".to_owned(),
            ));
        }
        if self.time_tick_target == 0 || self.price_tick_target == 0 {
            return Err(ChartError::InvalidData(
                "tick targets must be > 0".to_owned(),
            ));
        }
        if self.change_point_label.is_empty()
            || self.time_axis_title.is_empty()
            || self.price_axis_title.is_empty()
        {
            return Err(ChartError::InvalidData(
                "style label texts must not be empty".to_owned(),
            ));
        }

        for color in [
            self.series_line_color,
            self.axis_line_color,
            self.axis_label_color,
            self.grid_line_color,
            self.axis_title_color,
            self.change_point_color,
            self.event_increase_fill,
            self.event_increase_border,
            self.event_decrease_fill,
            self.event_decrease_border,
            self.event_neutral_fill,
            self.event_neutral_border,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
