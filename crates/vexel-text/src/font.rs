//! Glyph and font metric capabilities consumed by the layout engine.
//!
//! Font parsing, rasterization, and atlas management live outside this crate.
//! Layout only needs per-glyph advance/bounds data and font-level vertical
//! metrics, and collaborators supply those through [`GlyphSource`]. A glyph
//! missing from a source is a normal, non-fatal outcome: the layout engine
//! treats it as zero-width.

use tracing::trace;
use vexel_core::geometry::Rect;

/// Metrics for a single glyph, in font units.
///
/// Looked up through a [`GlyphSource`]; never mutated by layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    /// Horizontal distance the pen moves after placing the glyph.
    pub advance: f32,
    /// Tight bounding box relative to the pen position.
    pub bounds: Rect<f32>,
    /// Source rectangle in the glyph atlas, in texels.
    pub atlas: Rect<u32>,
}

impl GlyphMetrics {
    /// Zero-size metrics used for missing glyphs and the end-of-text sentinel.
    pub const EMPTY: Self = Self {
        advance: 0.0,
        bounds: Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        },
        atlas: Rect {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        },
    };

    /// Scale the advance and bounding box by a uniform factor.
    ///
    /// Atlas coordinates are texel addresses and are left untouched.
    pub fn scaled(self, scale: f32) -> Self {
        Self {
            advance: self.advance * scale,
            bounds: self.bounds * scale,
            atlas: self.atlas,
        }
    }
}

/// Vertical metrics for a font face, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance from baseline to the top of the tallest glyph.
    pub ascent: f32,
    /// Distance from baseline to the bottom of the lowest glyph (positive).
    pub descent: f32,
    /// Extra vertical space between consecutive lines.
    pub line_gap: f32,
    /// Font units per em square; converts font units to pixels.
    pub units_per_em: f32,
}

impl FontMetrics {
    /// Factor converting font units to pixels at the given font size.
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em
    }

    /// Total vertical space one line occupies at the given font size.
    pub fn line_height(&self, font_size: f32) -> f32 {
        (self.ascent + self.descent + self.line_gap) * self.scale(font_size)
    }
}

/// Capability trait for glyph metric lookup.
///
/// Implemented by font backends (parsed font files, atlas caches, test
/// doubles). Returning `None` from [`GlyphSource::glyph`] means the face has
/// no glyph for the character; layout continues with empty metrics.
pub trait GlyphSource {
    /// Vertical metrics of the face.
    fn metrics(&self) -> FontMetrics;

    /// Metrics for one character, or `None` if the face lacks it.
    fn glyph(&self, c: char) -> Option<GlyphMetrics>;
}

/// A primary glyph source with at most one secondary fallback.
///
/// The fallback is consulted only when the primary misses and the character
/// is outside the Latin-1 range; Latin-1 misses resolve to empty metrics so a
/// broken primary face stays visually consistent instead of borrowing random
/// ASCII shapes from another font.
pub struct FallbackChain<'a> {
    primary: &'a dyn GlyphSource,
    fallback: Option<&'a dyn GlyphSource>,
}

impl<'a> FallbackChain<'a> {
    pub fn new(primary: &'a dyn GlyphSource) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(primary: &'a dyn GlyphSource, fallback: &'a dyn GlyphSource) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }

    /// Vertical metrics of the primary face.
    pub fn metrics(&self) -> FontMetrics {
        self.primary.metrics()
    }

    /// Resolve one character to metrics, never failing.
    ///
    /// Control characters occupy no visual space and skip lookup entirely.
    pub fn resolve(&self, c: char) -> GlyphMetrics {
        if c.is_control() {
            return GlyphMetrics::EMPTY;
        }
        if let Some(metrics) = self.primary.glyph(c) {
            return metrics;
        }
        if c as u32 > 0xFF
            && let Some(fallback) = self.fallback
            && let Some(metrics) = fallback.glyph(c)
        {
            return metrics;
        }
        trace!(
            codepoint = c as u32,
            "glyph missing from font, continuing with empty metrics"
        );
        GlyphMetrics::EMPTY
    }
}

/// Seam between the layout engine and glyph resolution.
///
/// [`FallbackChain`] implements it directly; [`crate::cache::CachedChain`]
/// adds memoization on top.
pub trait GlyphResolver {
    /// Vertical metrics of the face driving line height.
    fn font_metrics(&self) -> FontMetrics;

    /// Metrics for one character, in font units.
    fn resolve(&mut self, c: char) -> GlyphMetrics;
}

impl GlyphResolver for FallbackChain<'_> {
    fn font_metrics(&self) -> FontMetrics {
        self.metrics()
    }

    fn resolve(&mut self, c: char) -> GlyphMetrics {
        FallbackChain::resolve(self, c)
    }
}

/// Synthetic face where every printable glyph shares one advance.
///
/// Useful for layout tests and benchmarks that need deterministic geometry
/// without real font data.
#[derive(Debug, Clone, Copy)]
pub struct UniformSource {
    pub metrics: FontMetrics,
    pub advance: f32,
}

impl Default for UniformSource {
    fn default() -> Self {
        Self {
            metrics: FontMetrics {
                ascent: 800.0,
                descent: 200.0,
                line_gap: 0.0,
                units_per_em: 1000.0,
            },
            advance: 500.0,
        }
    }
}

impl GlyphSource for UniformSource {
    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        if c.is_control() {
            return None;
        }
        Some(GlyphMetrics {
            advance: self.advance,
            bounds: Rect::new(
                0.0,
                -self.metrics.ascent,
                self.advance,
                self.metrics.ascent + self.metrics.descent,
            ),
            atlas: Rect::new(0, 0, 0, 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that only knows ASCII letters.
    struct AsciiOnly(UniformSource);

    impl GlyphSource for AsciiOnly {
        fn metrics(&self) -> FontMetrics {
            self.0.metrics()
        }

        fn glyph(&self, c: char) -> Option<GlyphMetrics> {
            if c.is_ascii_alphabetic() {
                self.0.glyph(c)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_font_metrics_scale() {
        let metrics = FontMetrics {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 0.0,
            units_per_em: 1000.0,
        };
        assert_eq!(metrics.scale(20.0), 0.02);
        assert_eq!(metrics.line_height(20.0), 20.0);
    }

    #[test]
    fn test_glyph_metrics_scaled() {
        let metrics = GlyphMetrics {
            advance: 500.0,
            bounds: Rect::new(0.0, -800.0, 500.0, 1000.0),
            atlas: Rect::new(3, 4, 5, 6),
        };
        let scaled = metrics.scaled(0.02);
        assert_eq!(scaled.advance, 10.0);
        assert_eq!(scaled.bounds, Rect::new(0.0, -16.0, 10.0, 20.0));
        // atlas texels are untouched by scaling
        assert_eq!(scaled.atlas, Rect::new(3, 4, 5, 6));
    }

    #[test]
    fn test_chain_prefers_primary() {
        let primary = UniformSource {
            advance: 700.0,
            ..Default::default()
        };
        let fallback = UniformSource::default();
        let chain = FallbackChain::with_fallback(&primary, &fallback);
        assert_eq!(chain.resolve('a').advance, 700.0);
    }

    #[test]
    fn test_chain_falls_back_outside_latin1() {
        let primary = AsciiOnly(UniformSource::default());
        let fallback = UniformSource {
            advance: 900.0,
            ..Default::default()
        };
        let chain = FallbackChain::with_fallback(&primary, &fallback);
        assert_eq!(chain.resolve('\u{03bb}').advance, 900.0);
    }

    #[test]
    fn test_chain_no_fallback_for_latin1_miss() {
        let primary = AsciiOnly(UniformSource::default());
        let fallback = UniformSource::default();
        let chain = FallbackChain::with_fallback(&primary, &fallback);
        // '7' is Latin-1: a primary miss must not consult the fallback
        assert_eq!(chain.resolve('7'), GlyphMetrics::EMPTY);
    }

    #[test]
    fn test_chain_total_miss_is_empty() {
        let primary = AsciiOnly(UniformSource::default());
        let chain = FallbackChain::new(&primary);
        assert_eq!(chain.resolve('\u{4e00}'), GlyphMetrics::EMPTY);
    }

    #[test]
    fn test_control_chars_are_empty() {
        let source = UniformSource::default();
        let chain = FallbackChain::new(&source);
        assert_eq!(chain.resolve('\n'), GlyphMetrics::EMPTY);
        assert_eq!(chain.resolve('\t'), GlyphMetrics::EMPTY);
    }
}
