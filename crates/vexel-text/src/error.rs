/// Errors that can occur at the layout crate's fallible surfaces.
///
/// Layout construction itself never fails: missing glyphs, degenerate size
/// limits, and exhausted input are all normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A glyph sub-range did not fit the layout's glyph buffer.
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::InvalidRange { start, end, len } => write!(
                f,
                "Invalid glyph range: {}..{} (glyph count: {})",
                start, end, len
            ),
        }
    }
}

impl std::error::Error for TextError {}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
