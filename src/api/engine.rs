use tracing::debug;

use crate::core::{ParsedSeries, RawChangePoint, RawPricePoint, SelectedEvent};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngineConfig, frame_builder};

/// Immutable inputs for one render pass, supplied fresh on every call.
///
/// The selected event is an explicit value here, never ambient state, so
/// repeated renders stay referentially transparent.
#[derive(Debug, Clone, Copy)]
pub struct RenderInputs<'a> {
    pub series: &'a [RawPricePoint],
    pub change_points: &'a [RawChangePoint],
    pub selected_event: Option<&'a SelectedEvent>,
}

impl<'a> RenderInputs<'a> {
    #[must_use]
    pub fn new(series: &'a [RawPricePoint], change_points: &'a [RawChangePoint]) -> Self {
        Self {
            series,
            change_points,
            selected_event: None,
        }
    }

    #[must_use]
    pub fn with_selected_event(mut self, event: &'a SelectedEvent) -> Self {
        self.selected_event = Some(event);
        self
    }
}

/// Whether a surface currently reflects the last-seen inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    #[default]
    Idle,
    Rendered,
}

/// Result of one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The series was empty after parsing; nothing was drawn.
    Skipped,
    Rendered {
        point_count: usize,
        dropped_point_count: usize,
        primitive_count: usize,
    },
}

/// Main orchestration facade consumed by host applications.
///
/// Every render is a full clear-and-rebuild: the previous frame is
/// discarded, the temporal index and scales are recomputed, and axes/grid,
/// curve, and annotations are emitted in that fixed order. No partial
/// re-render path exists. The `&mut self` receiver serializes overlapping
/// renders by construction.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    state: RenderState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            state: RenderState::Idle,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Replaces the drawing geometry/style; takes effect on the next render.
    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Runs one full render pass over the supplied inputs.
    ///
    /// An empty price series (including one emptied by dropped rows) skips
    /// rendering entirely: the renderer is not invoked and the engine
    /// returns to `Idle`.
    pub fn render(&mut self, inputs: &RenderInputs<'_>) -> ChartResult<RenderOutcome> {
        self.config.validate()?;

        let series = ParsedSeries::parse(inputs.series);
        if series.is_empty() {
            debug!(
                dropped = series.dropped(),
                "render skipped: empty price series"
            );
            self.state = RenderState::Idle;
            return Ok(RenderOutcome::Skipped);
        }

        let frame = frame_builder::build_frame_from_series(&self.config, &series, inputs)?;
        self.renderer.render(&frame)?;
        self.state = RenderState::Rendered;
        Ok(RenderOutcome::Rendered {
            point_count: series.len(),
            dropped_point_count: series.dropped(),
            primitive_count: frame.len(),
        })
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
