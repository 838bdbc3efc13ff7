use crate::foundation::error::ReelResult;

/// Tight pixel extent of rendered text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    /// Width of the inked area in pixels.
    pub width: u32,
    /// Height of the inked area in pixels.
    pub height: u32,
}

/// Measures strings against one loaded font.
///
/// Implementations must return the tight glyph bounding box (the inked area, not the nominal line
/// box) and must be stable across repeated calls with the same input.
pub trait GlyphMetrics {
    /// Measure a single line of text.
    fn measure(&mut self, text: &str) -> ReelResult<TextExtent>;
}

/// Tight bounding box of pixels with non-zero alpha in an RGBA8 buffer.
///
/// Returns `None` when nothing is inked.
pub(crate) fn ink_bounds(rgba8: &[u8], width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    let w = width as usize;
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut any = false;

    for (row_i, row) in rgba8.chunks_exact(w * 4).take(height as usize).enumerate() {
        for (col_i, px) in row.chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            any = true;
            let (x, y) = (col_i as u32, row_i as u32);
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    any.then_some((min_x, min_y, max_x, max_y))
}
