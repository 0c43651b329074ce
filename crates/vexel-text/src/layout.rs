//! Streaming glyph layout.
//!
//! [`TextLayout::build`] performs a single pass over the input text, deciding
//! character by character whether a line break occurs, and materializes the
//! result as two flat buffers: positioned glyphs in reading order and lines
//! indexing contiguous slices of them. The pass is driven by [`LineBreaker`],
//! an explicit state machine stepped once per character, with a bounded
//! non-destructive look-ahead for word wrapping.
//!
//! The finished layout is immutable; rebuild it when the text or any layout
//! parameter changes.

use std::str::CharIndices;

use tracing::debug;
use vexel_core::geometry::Rect;
use vexel_core::math::Vec2;

use crate::font::{GlyphMetrics, GlyphResolver};

/// Line wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    /// Never break on width; overflowing text is clipped.
    #[default]
    None,
    /// Break before any glyph that would overflow.
    Glyph,
    /// Break only at word boundaries, unless a single word overflows alone.
    Word,
}

/// Parameters for one layout build.
///
/// Fluent setters follow the builder convention:
///
/// ```
/// use vexel_core::math::Vec2;
/// use vexel_text::{LayoutParams, TextWrap};
///
/// let params = LayoutParams::new(16.0)
///     .wrap(TextWrap::Word)
///     .justify(0.5)
///     .max_size(Vec2::new(320.0, f32::INFINITY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Font size in pixels.
    pub font_size: f32,
    /// Line wrapping mode.
    pub wrap: TextWrap,
    /// Horizontal placement of each line: 0 = left, 0.5 = center, 1 = right.
    pub justify: f32,
    /// Extra horizontal space after every glyph, in pixels.
    pub letter_spacing: f32,
    /// Maximum layout width and height; infinite by default.
    pub max_size: Vec2,
    /// Character-index span to mark in the finished layout, in either order.
    pub selection: Option<(usize, usize)>,
}

impl LayoutParams {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            wrap: TextWrap::None,
            justify: 0.0,
            letter_spacing: 0.0,
            max_size: Vec2::INFINITY,
            selection: None,
        }
    }

    pub fn wrap(mut self, wrap: TextWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn justify(mut self, justify: f32) -> Self {
        self.justify = justify.clamp(0.0, 1.0);
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn max_size(mut self, max_size: Vec2) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn selection(mut self, start: usize, end: usize) -> Self {
        self.selection = Some((start, end));
        self
    }
}

/// One glyph placed in the layout.
///
/// Contains the glyph's scaled metrics rather than referencing them; the
/// layout is the single owner of everything it needs to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Metrics scaled to the layout's font size.
    pub metrics: GlyphMetrics,
    /// The character this glyph renders; `'\0'` for the end-of-text sentinel.
    pub ch: char,
    /// Byte offset of the character in the source text.
    pub index: usize,
    /// Index of the line this glyph sits on.
    pub line: usize,
    /// Pen position within the layout, justification applied.
    pub offset: Vec2,
}

/// One visual line: a contiguous slice of the layout's glyph buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Top-left corner of the line, justification applied.
    pub offset: Vec2,
    /// Measured width and line height. Justification never changes this.
    pub size: Vec2,
    /// Byte-offset span of source characters covered by the line.
    pub index_range: (usize, usize),
    /// Start/end indices into the layout's glyph buffer.
    pub glyph_range: (usize, usize),
}

impl Line {
    /// The line's axis-aligned box in layout space.
    pub fn bounds(&self) -> Rect<f32> {
        Rect::new(self.offset.x, self.offset.y, self.size.x, self.size.y)
    }
}

/// Endpoints of a marked span; each endpoint is independently optional so a
/// selection index beyond the text simply leaves that side unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSpan {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// A finished, immutable text layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Factor that converted font units to pixels for this build.
    pub scale: f32,
    /// Vertical distance between consecutive lines.
    pub line_height: f32,
    /// All placed glyphs in reading order, ending with the sentinel.
    pub glyphs: Vec<PositionedGlyph>,
    /// Lines top to bottom; their glyph ranges slice `glyphs` contiguously.
    pub lines: Vec<Line>,
    /// Maximum line width and sum of line heights.
    pub size: Vec2,
    /// Glyph indices matching the requested selection span.
    pub selection_glyphs: SelectionSpan,
    /// Line indices matching the requested selection span.
    pub selection_lines: SelectionSpan,
}

impl TextLayout {
    /// Lay out `text` with the given glyph resolver and parameters.
    ///
    /// This is the sole construction entry point. It never fails: missing
    /// glyphs occupy no space, degenerate size limits truncate, and running
    /// out of input is the normal termination signal.
    pub fn build<R: GlyphResolver>(text: &str, resolver: &mut R, params: &LayoutParams) -> Self {
        let font_metrics = resolver.font_metrics();
        let scale = font_metrics.scale(params.font_size);
        let line_height = font_metrics.line_height(params.font_size);
        let selection = params
            .selection
            .map(|(a, b)| if a <= b { (a, b) } else { (b, a) });

        let mut layout = TextLayout {
            scale,
            line_height,
            glyphs: Vec::new(),
            lines: Vec::new(),
            size: Vec2::ZERO,
            selection_glyphs: SelectionSpan::default(),
            selection_lines: SelectionSpan::default(),
        };

        let mut breaker = LineBreaker::new(text, resolver, params, scale, line_height);
        let mut open = OpenLine::default();

        while breaker.advance() {
            if let Some(kind) = breaker.broke {
                layout.close_line(&open, &breaker.view(), kind == BreakKind::Wrap, params.justify);
                open = OpenLine {
                    offset: breaker.offset,
                    glyph_start: layout.glyphs.len(),
                    index_start: breaker.index,
                };
            }

            let glyph_index = layout.glyphs.len();
            if let Some((start, end)) = selection {
                if breaker.index == start {
                    layout.selection_glyphs.start = Some(glyph_index);
                    layout.selection_lines.start = Some(layout.lines.len());
                }
                if breaker.index == end {
                    layout.selection_glyphs.end = Some(glyph_index);
                    layout.selection_lines.end = Some(layout.lines.len());
                }
            }

            layout.glyphs.push(PositionedGlyph {
                metrics: breaker.metrics,
                ch: breaker.ch,
                index: breaker.index,
                line: layout.lines.len(),
                offset: breaker.offset,
            });

            if breaker.eof {
                let mut view = breaker.view();
                if breaker.broke.is_some() {
                    // This step both broke and ended the stream: the final
                    // line holds only the sentinel and has no width.
                    view.line_width = 0.0;
                }
                layout.close_line(&open, &view, false, params.justify);
            }
        }

        layout
    }

    /// Measured size of `text` without keeping the layout around.
    pub fn measure<R: GlyphResolver>(text: &str, resolver: &mut R, params: &LayoutParams) -> Vec2 {
        Self::build(text, resolver, params).size
    }

    /// Close the line currently being assembled.
    ///
    /// Sets the glyph range end to the current glyph count (minus the
    /// breaking space when the break was a width wrap), sizes the line from
    /// the breaker's running width, then shifts the line and every glyph on
    /// it by the justification offset. The shift moves placement only; the
    /// measured width is untouched.
    fn close_line(&mut self, open: &OpenLine, breaker: &BreakerView, trim: bool, justify: f32) {
        let mut glyph_end = self.glyphs.len();
        if trim
            && glyph_end > open.glyph_start
            && self.glyphs[glyph_end - 1].ch == ' '
        {
            glyph_end -= 1;
        }

        let size = Vec2::new(breaker.line_width, self.line_height);
        let shift = -size.x * justify;
        for glyph in &mut self.glyphs[open.glyph_start..] {
            glyph.offset.x += shift;
        }

        self.lines.push(Line {
            offset: Vec2::new(open.offset.x + shift, open.offset.y),
            size,
            index_range: (open.index_start, breaker.index),
            glyph_range: (open.glyph_start, glyph_end),
        });
        self.size.x = self.size.x.max(size.x);
        self.size.y += size.y;
    }
}

/// The line being assembled; not part of the finished layout.
#[derive(Debug, Clone, Copy, Default)]
struct OpenLine {
    offset: Vec2,
    glyph_start: usize,
    index_start: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakKind {
    /// A literal `'\n'` ended the previous line.
    Newline,
    /// The pending width overflowed `max_size.x` under a wrapping mode.
    Wrap,
}

/// Streaming line-break state machine.
///
/// `advance` steps it one character at a time. After a step that returned
/// `true`, the public-ish fields describe the glyph event: `ch`/`index`/
/// `metrics` are the character just read, `offset` is where its glyph goes,
/// `broke` says whether a new line started with it, and `eof` marks the
/// final (sentinel) step.
struct LineBreaker<'a, R: GlyphResolver> {
    chars: CharIndices<'a>,
    resolver: &'a mut R,

    scale: f32,
    line_height: f32,
    wrap: TextWrap,
    letter_spacing: f32,
    max_size: Vec2,
    text_len: usize,

    ch: char,
    index: usize,
    metrics: GlyphMetrics,
    line_width: f32,
    offset: Vec2,
    last: char,
    started: bool,
    eof: bool,
    reseed: bool,
    broke: Option<BreakKind>,
    word_end: usize,
    word_width: f32,
}

/// The slice of breaker state `close_line` reads.
struct BreakerView {
    line_width: f32,
    index: usize,
}

impl<'a, R: GlyphResolver> LineBreaker<'a, R> {
    fn new(
        text: &'a str,
        resolver: &'a mut R,
        params: &LayoutParams,
        scale: f32,
        line_height: f32,
    ) -> Self {
        Self {
            chars: text.char_indices(),
            resolver,
            scale,
            line_height,
            wrap: params.wrap,
            letter_spacing: params.letter_spacing,
            max_size: params.max_size,
            text_len: text.len(),
            ch: '\0',
            index: 0,
            metrics: GlyphMetrics::EMPTY,
            line_width: 0.0,
            offset: Vec2::ZERO,
            last: '\0',
            started: false,
            eof: false,
            reseed: false,
            broke: None,
            word_end: 0,
            word_width: 0.0,
        }
    }

    /// Step to the next glyph event.
    ///
    /// Returns `false` once the end-of-text sentinel has been produced by an
    /// earlier step.
    fn advance(&mut self) -> bool {
        if self.eof {
            return false;
        }
        self.broke = None;

        // A break in the previous step carried its glyph onto the fresh
        // line; seed the new line's width with that glyph now.
        if self.reseed {
            self.reseed = false;
            self.line_width = self.metrics.advance + self.letter_spacing;
        }

        // Move the pen past the current glyph before pulling the next one:
        // a glyph's offset is always known at the moment it is emitted.
        if self.started {
            self.offset.x += self.metrics.advance + self.letter_spacing;
        }
        self.started = true;
        self.last = self.ch;

        match self.chars.next() {
            Some((index, ch)) => {
                self.index = index;
                self.ch = ch;
                self.metrics = self.resolver.resolve(ch).scaled(self.scale);
            }
            None => {
                // End of stream becomes the sentinel character; it still
                // runs through the break decision so text ending in '\n'
                // leaves the cursor on its own empty line.
                self.index = self.text_len;
                self.ch = '\0';
                self.metrics = GlyphMetrics::EMPTY;
                self.eof = true;
            }
        }

        // Width the upcoming glyph adds to the line. Word wrap measures the
        // whole upcoming word once per word, so the break decision lands
        // before the word is committed.
        let mut upcoming = self.metrics.advance;
        if self.wrap == TextWrap::Word
            && !self.eof
            && self.index >= self.word_end
            && self.ch != ' '
            && self.ch != '\n'
        {
            self.scan_word();
            upcoming = self.word_width;
        }

        // Break decision. A literal newline always breaks. A width overflow
        // truncates under TextWrap::None and wraps otherwise; a line that
        // has no width yet never breaks, so an unbreakable overflow keeps
        // its single glyph instead of opening empty lines forever.
        let kind = if self.last == '\n' {
            Some(BreakKind::Newline)
        } else if !self.eof && self.line_width > 0.0 && self.line_width + upcoming > self.max_size.x
        {
            if self.wrap == TextWrap::None {
                debug!(index = self.index, "max width reached without wrapping, truncating");
                return self.truncate();
            }
            Some(BreakKind::Wrap)
        } else {
            None
        };

        match kind {
            Some(kind) => {
                let next_y = self.offset.y + self.line_height;
                // Never start a line that cannot fully fit in max height.
                if next_y + self.line_height >= self.max_size.y {
                    debug!(index = self.index, "max height reached, truncating");
                    return self.truncate();
                }
                self.offset.x = 0.0;
                self.offset.y = next_y;
                self.reseed = true;
                self.broke = Some(kind);
            }
            None => {
                if !self.eof {
                    self.line_width += self.metrics.advance + self.letter_spacing;
                }
            }
        }
        true
    }

    /// Replace the pending character with the end-of-text sentinel.
    ///
    /// The sentinel keeps the dropped character's index, so cursor mapping
    /// still lands just past the last emitted glyph.
    fn truncate(&mut self) -> bool {
        self.ch = '\0';
        self.metrics = GlyphMetrics::EMPTY;
        self.eof = true;
        true
    }

    /// Measure from the current character to the next space, newline, or end
    /// of stream, caching the result as the active word boundary.
    ///
    /// Scans a clone of the source cursor, so the main pass never loses
    /// characters to the look-ahead.
    fn scan_word(&mut self) {
        let mut width = self.metrics.advance + self.letter_spacing;
        let mut end = self.index + self.ch.len_utf8();
        for (index, ch) in self.chars.clone() {
            if ch == ' ' || ch == '\n' {
                end = index;
                break;
            }
            width += self.resolver.resolve(ch).scaled(self.scale).advance + self.letter_spacing;
            end = index + ch.len_utf8();
        }
        self.word_end = end;
        self.word_width = width;
    }

    fn view(&self) -> BreakerView {
        BreakerView {
            line_width: self.line_width,
            index: self.index,
        }
    }
}
