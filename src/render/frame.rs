use crate::foundation::math::unpremultiply;

/// A rendered frame as RGBA8 pixels.
///
/// The `premultiplied` flag makes the alpha convention explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha in place (no-op for straight frames).
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            for px in self.data.chunks_exact_mut(4) {
                let a = px[3];
                if a == 255 {
                    continue;
                }
                px[0] = unpremultiply(px[0], a);
                px[1] = unpremultiply(px[1], a);
                px[2] = unpremultiply(px[2], a);
            }
            self.premultiplied = false;
        }
        self
    }

    /// RGBA8 value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
