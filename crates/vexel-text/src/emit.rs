//! Render emission boundary.
//!
//! The layout core does not draw. [`TextLayout::emit`] hands each positioned
//! glyph to the render layer as a [`GlyphDraw`], and [`GlyphInstance`] is the
//! packed per-glyph form ready for a GPU instance buffer. Everything past
//! that (atlas sampling, draw submission, color) belongs to the renderer.

use std::ops::Range;

use vexel_core::math::Vec2;

use crate::error::{TextError, TextResult};
use crate::font::GlyphMetrics;
use crate::layout::TextLayout;

/// One glyph handed to the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDraw {
    /// Metrics scaled to the layout's font size.
    pub metrics: GlyphMetrics,
    /// The layout's font-unit scale, for renderers that rasterize on demand.
    pub scale: f32,
    /// Absolute position: emission origin plus the glyph's layout offset.
    pub position: Vec2,
}

impl GlyphDraw {
    /// Pack into the GPU instance form.
    pub fn instance(&self) -> GlyphInstance {
        let bounds = self.metrics.bounds;
        GlyphInstance {
            position: [self.position.x + bounds.x, self.position.y + bounds.y],
            size: [bounds.width, bounds.height],
            atlas_min: [self.metrics.atlas.x as f32, self.metrics.atlas.y as f32],
            atlas_max: [
                (self.metrics.atlas.x + self.metrics.atlas.width) as f32,
                (self.metrics.atlas.y + self.metrics.atlas.height) as f32,
            ],
        }
    }
}

/// Packed per-glyph instance data for GPU upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlyphInstance {
    /// Top-left corner of the glyph quad in layout space.
    pub position: [f32; 2],
    /// Quad size in pixels.
    pub size: [f32; 2],
    /// Atlas rectangle corners, in texels.
    pub atlas_min: [f32; 2],
    pub atlas_max: [f32; 2],
}

impl TextLayout {
    /// Iterate the layout's glyphs (or a sub-range of them) as draws placed
    /// relative to `origin`.
    ///
    /// `range` indexes the glyph buffer; `None` emits everything including
    /// the end-of-text sentinel, which has empty metrics and renders nothing.
    pub fn emit(
        &self,
        origin: Vec2,
        range: Option<Range<usize>>,
    ) -> TextResult<impl Iterator<Item = GlyphDraw> + '_> {
        let range = range.unwrap_or(0..self.glyphs.len());
        if range.start > range.end || range.end > self.glyphs.len() {
            return Err(TextError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.glyphs.len(),
            });
        }
        let scale = self.scale;
        Ok(self.glyphs[range].iter().map(move |glyph| GlyphDraw {
            metrics: glyph.metrics,
            scale,
            position: origin + glyph.offset,
        }))
    }
}
