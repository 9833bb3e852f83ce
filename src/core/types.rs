use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 60.0,
        }
    }
}

/// Fixed drawing-area dimensions.
///
/// Pixel origin is top-left and y grows downward; the plot area excludes
/// the margins on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: Margin::default(),
        }
    }
}

impl Geometry {
    #[must_use]
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Horizontal extent of the plot area in pixels.
    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Vertical extent of the plot area in pixels.
    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(self) -> ChartResult<Self> {
        let finite = self.width.is_finite()
            && self.height.is_finite()
            && self.margin.top.is_finite()
            && self.margin.right.is_finite()
            && self.margin.bottom.is_finite()
            && self.margin.left.is_finite();
        if !finite || self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidGeometry {
                plot_width: self.plot_width(),
                plot_height: self.plot_height(),
            });
        }
        Ok(self)
    }
}

/// One normalized observation of the price series.
///
/// `time` is the date at midnight UTC expressed as unix seconds so the time
/// scale can treat dates as plain comparable numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub time: f64,
    pub price: f64,
}
