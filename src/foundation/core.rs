use crate::foundation::error::{ReelError, ReelResult};

/// Absolute 0-based frame index in output video space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert seconds to a frame position, rounding to the nearest frame.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as an array, in RGBA order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fixed-size slide canvas shared read-only by every slide render of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill color behind the text.
    pub background: Rgba8,
    /// Text fill color.
    pub text_color: Rgba8,
    /// Left margin; the bounds check applies it on both sides.
    pub padding_x: u32,
    /// Top margin; the bounds check applies it on both sides.
    pub padding_y: u32,
    /// Vertical advance between consecutive text lines.
    pub row_pitch: u32,
}

impl Canvas {
    /// Row pitch used for a given font size: `round(font_size * 1.04)`.
    pub fn row_pitch_for(font_size: u32) -> u32 {
        (f64::from(font_size) * 1.04).round() as u32
    }

    /// Top-left origin of text line `index`.
    pub fn line_origin(&self, index: usize) -> (f64, f64) {
        let y = u64::from(self.padding_y) + (index as u64) * u64::from(self.row_pitch);
        (f64::from(self.padding_x), y as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
