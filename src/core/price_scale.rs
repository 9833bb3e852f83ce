use crate::core::scale::LinearScale;
use crate::core::types::PricePoint;
use crate::error::{ChartError, ChartResult};

/// Headroom above the maximum observed price.
pub const PRICE_HEADROOM_RATIO: f64 = 1.1;

/// Upper bound used when every observed price is zero.
const MIN_PRICE_SPAN: f64 = 1.0;

/// Price axis: raw prices onto an inverted `[plot_height, 0]` pixel range.
///
/// The domain lower bound is pinned at zero regardless of the smallest
/// observed price; the upper bound carries 10% headroom over the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    linear: LinearScale,
}

impl PriceScale {
    pub fn from_points(points: &[PricePoint], plot_height: f64) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot height must be finite and > 0".to_owned(),
            ));
        }

        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.price.is_finite() || point.price < 0.0 {
                return Err(ChartError::InvalidData(
                    "price values must be finite and >= 0".to_owned(),
                ));
            }
            max = max.max(point.price);
        }

        let upper = if max > 0.0 {
            max * PRICE_HEADROOM_RATIO
        } else {
            MIN_PRICE_SPAN
        };
        Ok(Self {
            linear: LinearScale::new(0.0, upper, plot_height, 0.0)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    /// Maps a raw price to pixel y; larger prices land higher (smaller y).
    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        self.linear.apply(price)
    }

    pub fn pixel_to_price(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }
}
