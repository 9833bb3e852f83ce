pub mod curve;
pub mod price_scale;
pub mod scale;
pub mod temporal;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use curve::{CubicSegment, monotone_segments};
pub use price_scale::{PRICE_HEADROOM_RATIO, PriceScale};
pub use scale::LinearScale;
pub use temporal::{
    ExpectedImpact, ParsedSeries, RawChangePoint, RawPrice, RawPricePoint, SelectedEvent,
    date_to_unix_seconds, parse_date, parse_price,
};
pub use ticks::{day_aligned_time_ticks, nice_linear_ticks};
pub use time_scale::TimeScale;
pub use types::{Geometry, Margin, PricePoint};
