//! Lay out a short paragraph and print the resulting geometry.
//!
//! ```bash
//! cargo run --package vexel-text --example layout_demo
//! ```

use vexel_text::{FallbackChain, LayoutParams, TextLayout, TextWrap, UniformSource, Vec2};

fn main() {
    vexel_core::logging::init();

    let font = UniformSource::default();
    let mut chain = FallbackChain::new(&font);

    let params = LayoutParams::new(16.0)
        .wrap(TextWrap::Word)
        .max_size(Vec2::new(160.0, f32::INFINITY));
    let layout = TextLayout::build(
        "The quick brown fox jumps over the lazy dog.",
        &mut chain,
        &params,
    );

    println!(
        "layout: {} lines, {} glyphs, {:.1}x{:.1} px",
        layout.lines.len(),
        layout.glyphs.len(),
        layout.size.x,
        layout.size.y
    );
    for (i, line) in layout.lines.iter().enumerate() {
        let (start, end) = line.glyph_range;
        let text: String = layout.glyphs[start..end].iter().map(|g| g.ch).collect();
        println!(
            "  line {i}: {:>5.1} px wide at y={:<5.1} {:?}",
            line.size.x, line.offset.y, text
        );
    }

    let hit = layout.hit_test(Vec2::new(40.0, 20.0));
    println!(
        "hit test at (40, 20): line {}, char index {}, inside text: {}",
        hit.line, hit.index, hit.valid
    );
}
