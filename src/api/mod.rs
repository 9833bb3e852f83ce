mod annotations;
mod axis_grid;
mod engine;
mod engine_config;
mod frame_builder;
mod style;

pub use engine::{ChartEngine, RenderInputs, RenderOutcome, RenderState};
pub use engine_config::ChartEngineConfig;
pub use frame_builder::build_render_frame;
pub use style::RenderStyle;
