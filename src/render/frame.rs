use serde::{Deserialize, Serialize};

use crate::core::Geometry;
use crate::error::ChartResult;
use crate::render::primitives::{
    CirclePrimitive, DrawPrimitive, LinePrimitive, PathPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are kept in one ordered list: the position of a primitive in
/// the list is its z-order, so axes and gridlines emitted first are drawn
/// under the curve and annotations emitted after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub geometry: Geometry,
    pub primitives: Vec<DrawPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            primitives: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.primitives.push(DrawPrimitive::Line(line));
    }

    pub fn push_path(&mut self, path: PathPrimitive) {
        self.primitives.push(DrawPrimitive::Path(path));
    }

    pub fn push_circle(&mut self, circle: CirclePrimitive) {
        self.primitives.push(DrawPrimitive::Circle(circle));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.primitives.push(DrawPrimitive::Text(text));
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Text(text) => Some(text),
            _ => None,
        })
    }
}
