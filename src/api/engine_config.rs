use serde::{Deserialize, Serialize};

use crate::core::Geometry;
use crate::error::ChartResult;

use super::RenderStyle;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub style: RenderStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        self.style.validate()
    }
}
