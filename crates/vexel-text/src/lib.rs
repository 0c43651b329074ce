//! Vexel Text - streaming glyph layout
//!
//! This crate lays out a stream of characters into positioned glyph runs:
//! - Line breaking (none / per-glyph / word wrap) in a single pass
//! - Per-line and per-glyph geometry with justification
//! - Hit testing for cursor placement and drag selection
//! - A render emission boundary that yields placed glyphs without drawing
//!
//! Font loading and rasterization stay outside: collaborators supply glyph
//! metrics through the [`GlyphSource`] capability, optionally chained with a
//! single fallback face and fronted by a [`GlyphCache`].
//!
//! ## Quick Start
//!
//! ```
//! use vexel_text::{FallbackChain, LayoutParams, TextLayout, TextWrap, UniformSource, Vec2};
//!
//! let font = UniformSource::default();
//! let mut chain = FallbackChain::new(&font);
//!
//! let params = LayoutParams::new(16.0)
//!     .wrap(TextWrap::Word)
//!     .max_size(Vec2::new(240.0, f32::INFINITY));
//! let layout = TextLayout::build("Hello, world!", &mut chain, &params);
//!
//! assert_eq!(layout.lines.len(), 1);
//!
//! // Hand glyphs to a renderer, placed at an origin
//! for draw in layout.emit(Vec2::new(20.0, 20.0), None).unwrap() {
//!     let _instance = draw.instance();
//! }
//!
//! // Map a pointer position back to a character boundary
//! let hit = layout.hit_test(Vec2::new(12.0, 4.0));
//! assert!(hit.valid);
//! ```
//!
//! A finished [`TextLayout`] is immutable and safe to share; rebuild it when
//! the text or any layout parameter changes.

pub mod cache;
pub mod emit;
pub mod error;
pub mod font;
pub mod hit;
pub mod layout;

// Re-export main types
pub use cache::{CachedChain, GlyphCache};
pub use emit::{GlyphDraw, GlyphInstance};
pub use error::{TextError, TextResult};
pub use font::{FallbackChain, FontMetrics, GlyphMetrics, GlyphResolver, GlyphSource, UniformSource};
pub use hit::HitResult;
pub use layout::{
    LayoutParams, Line, PositionedGlyph, SelectionSpan, TextLayout, TextWrap,
};

// Re-export math types from vexel-core
pub use vexel_core::math::Vec2;
