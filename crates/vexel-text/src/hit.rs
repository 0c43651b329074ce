//! Pointer-to-text mapping (hit testing).
//!
//! Maps a point in layout space to the nearest line and glyph boundary for
//! cursor placement. The `valid` flag reports whether the point actually fell
//! inside some line's box; the index results are the best available mapping
//! either way, so drag-selection keeps tracking a pointer that has left the
//! text bounds.

use vexel_core::math::Vec2;

use crate::layout::TextLayout;

/// Result of a hit test against a finished layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitResult {
    /// Whether the point fell inside any line's box.
    pub valid: bool,
    /// Byte offset of the nearest character boundary.
    pub index: usize,
    /// Index of the nearest line.
    pub line: usize,
    /// Index of the nearest glyph in the layout's glyph buffer.
    pub glyph: usize,
}

impl TextLayout {
    /// Find the line and glyph boundary nearest to `point`.
    ///
    /// The candidate line comes from clamping the point's vertical position;
    /// within that line the glyph with the closest horizontal offset wins,
    /// ties keeping the first. The search range extends one glyph past the
    /// line's stored end so the boundary after the last character on the
    /// line (a trimmed space, the next line's first glyph, or the sentinel)
    /// is reachable.
    pub fn hit_test(&self, point: Vec2) -> HitResult {
        let mut result = HitResult::default();
        if self.lines.is_empty() || self.glyphs.is_empty() {
            return result;
        }

        let max_line = self.lines.len() - 1;
        let mut line_index = if self.line_height > 0.0 {
            ((point.y / self.line_height).floor() as isize).clamp(0, max_line as isize) as usize
        } else {
            0
        };

        // Containment is independent of which line is picked as nearest.
        result.valid = self.lines.iter().any(|line| line.bounds().contains(point));

        let (start, stored_end) = self.lines[line_index].glyph_range;
        let end = (stored_end + 1).min(self.glyphs.len());
        let mut best = start;
        let mut best_distance = f32::INFINITY;
        for glyph in start..end {
            let distance = (self.glyphs[glyph].offset.x - point.x).abs();
            if distance < best_distance {
                best_distance = distance;
                best = glyph;
            }
        }

        if start < end {
            result.index = self.glyphs[best].index;
            result.glyph = best;
            // A vertical clamp past the text's last line lands on the
            // sentinel; report the sentinel's own line in that case.
            if best == self.glyphs.len() - 1 {
                line_index = self.glyphs[best].line;
            }
        }
        result.line = line_index;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FallbackChain, UniformSource};
    use crate::layout::{LayoutParams, TextWrap};

    /// "hi" at size 20: 'h' at x=0, 'i' at x=10, sentinel at x=20.
    fn single_line() -> TextLayout {
        let source = UniformSource::default();
        let mut chain = FallbackChain::new(&source);
        TextLayout::build("hi", &mut chain, &LayoutParams::new(20.0))
    }

    /// "ab cd" word-wrapped into "ab" / "cd" at size 20.
    fn two_lines() -> TextLayout {
        let source = UniformSource::default();
        let mut chain = FallbackChain::new(&source);
        let params = LayoutParams::new(20.0)
            .wrap(TextWrap::Word)
            .max_size(Vec2::new(35.0, f32::INFINITY));
        TextLayout::build("ab cd", &mut chain, &params)
    }

    #[test]
    fn test_hit_at_origin_finds_first_glyph() {
        let layout = single_line();
        let hit = layout.hit_test(Vec2::ZERO);
        assert!(hit.valid);
        assert_eq!(hit.glyph, 0);
        assert_eq!(hit.index, 0);
        assert_eq!(hit.line, 0);
    }

    #[test]
    fn test_hit_past_text_finds_sentinel() {
        let layout = single_line();
        let hit = layout.hit_test(Vec2::new(100.0, 5.0));
        assert!(!hit.valid);
        assert_eq!(hit.glyph, 2);
        assert_eq!(hit.index, 2);
        assert_eq!(hit.line, 0);
    }

    #[test]
    fn test_hit_between_glyphs_picks_nearest() {
        let layout = single_line();
        // x=4 is nearer to 'h' (0) than to 'i' (10)
        assert_eq!(layout.hit_test(Vec2::new(4.0, 5.0)).glyph, 0);
        // x=6 is nearer to 'i'
        assert_eq!(layout.hit_test(Vec2::new(6.0, 5.0)).glyph, 1);
        // exact midpoint keeps the first candidate
        assert_eq!(layout.hit_test(Vec2::new(5.0, 5.0)).glyph, 0);
    }

    #[test]
    fn test_hit_second_line() {
        let layout = two_lines();
        let hit = layout.hit_test(Vec2::new(2.0, 30.0));
        assert!(hit.valid);
        assert_eq!(hit.line, 1);
        // 'c' is the first glyph of the second line
        assert_eq!(layout.glyphs[hit.glyph].ch, 'c');
        assert_eq!(hit.index, 3);
    }

    #[test]
    fn test_hit_below_text_clamps_to_last_line() {
        let layout = two_lines();
        let hit = layout.hit_test(Vec2::new(0.0, 500.0));
        assert!(!hit.valid);
        assert_eq!(hit.line, 1);
        assert_eq!(layout.glyphs[hit.glyph].ch, 'c');
    }

    #[test]
    fn test_hit_above_text_clamps_to_first_line() {
        let layout = two_lines();
        let hit = layout.hit_test(Vec2::new(0.0, -50.0));
        assert!(!hit.valid);
        assert_eq!(hit.line, 0);
        assert_eq!(hit.glyph, 0);
    }

    #[test]
    fn test_hit_far_below_corrects_line_to_sentinel() {
        let layout = single_line();
        // vertical clamp picks line 0 anyway; far x snaps to the sentinel,
        // whose own line is reported
        let hit = layout.hit_test(Vec2::new(50.0, 500.0));
        assert_eq!(hit.glyph, layout.glyphs.len() - 1);
        assert_eq!(hit.line, layout.glyphs[hit.glyph].line);
    }

    #[test]
    fn test_hit_empty_layout_is_default() {
        let source = UniformSource::default();
        let mut chain = FallbackChain::new(&source);
        let layout = TextLayout::build("", &mut chain, &LayoutParams::new(20.0));
        let hit = layout.hit_test(Vec2::new(3.0, 3.0));
        // only the sentinel exists; it is the nearest boundary
        assert_eq!(hit.glyph, 0);
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_selection_round_trip() {
        // a span matching glyph g's character bounds marks glyph g, and
        // hitting that glyph's position maps back to its character index
        let source = UniformSource::default();
        let mut chain = FallbackChain::new(&source);
        let params = LayoutParams::new(20.0).selection(1, 2);
        let layout = TextLayout::build("hi", &mut chain, &params);
        assert_eq!(layout.selection_glyphs.start, Some(1));

        let glyph = layout.glyphs[1];
        let hit = layout.hit_test(glyph.offset + Vec2::new(0.0, 5.0));
        assert_eq!(hit.glyph, 1);
        assert_eq!(hit.index, glyph.index);
    }
}
