use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("malformed date `{value}`: expected YYYY-MM-DD")]
    MalformedDate { value: String },

    #[error("malformed price `{value}`: expected a finite, non-negative number")]
    MalformedPrice { value: String },

    #[error("price series is empty")]
    EmptySeries,

    #[error("invalid geometry: plot area is {plot_width}x{plot_height} px")]
    InvalidGeometry { plot_width: f64, plot_height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
