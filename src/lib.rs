//! pricechart-rs: headless time-series chart engine.
//!
//! This crate turns a raw commodity-price series, a set of change-point
//! markers, and an optional selected event into a deterministic list of
//! backend-agnostic draw primitives. Hosts own the drawing surface; the
//! engine owns only primitive generation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
