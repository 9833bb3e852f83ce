use crate::core::scale::{LinearScale, normalize_range};
use crate::core::types::PricePoint;
use crate::error::{ChartError, ChartResult};

/// Widening applied to a single-date series so the mapping stays defined.
const MIN_TIME_SPAN_SECONDS: f64 = 86_400.0;

/// Temporal axis: unix seconds onto `[0, plot_width]`.
///
/// Built fresh per render pass and shared by every renderer stage so the
/// curve, gridlines, and annotations stay pixel-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Fits the domain to `[min(time), max(time)]` over the parsed points.
    pub fn from_points(points: &[PricePoint], plot_width: f64) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot width must be finite and > 0".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.time.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            min = min.min(point.time);
            max = max.max(point.time);
        }

        let (start, end) = normalize_range(min, max, MIN_TIME_SPAN_SECONDS)?;
        Ok(Self {
            linear: LinearScale::new(start, end, 0.0, plot_width)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    /// Maps unix seconds to pixel x; out-of-domain times extrapolate.
    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.apply(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }
}
