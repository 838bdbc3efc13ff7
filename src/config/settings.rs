use std::path::PathBuf;

use crate::assets::color::parse_color;
use crate::assets::font::FontSpec;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ReelError, ReelResult};

/// Canvas, font, and timing options. Every field has a default.
///
/// Read from the optional `canvas` mapping of a project file using kebab-case keys
/// (`font-path`, `image-width`, ...). Unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RenderSettings {
    /// Font file; a system face is used when it cannot be read.
    pub font_path: PathBuf,
    /// Font size in pixels.
    pub font_size: u32,
    /// Slide width in pixels.
    pub image_width: u32,
    /// Slide height in pixels.
    pub image_height: u32,
    /// Left margin in pixels.
    pub padding_x: u32,
    /// Top margin in pixels.
    pub padding_y: u32,
    /// Text color (`white`, `#RRGGBB`, `rgb(..)`, ...).
    pub text_color: String,
    /// Background color.
    pub background_color: String,
    /// Inclusive per-line character limit.
    pub max_line_chars: usize,
    /// Inclusive line-count limit; also the centering budget.
    pub max_lines: usize,
    /// Output video frame rate.
    pub video_fps: u32,
    /// Pad every block with leading blank lines so it sits mid-canvas.
    pub center_vertically: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("font/Gupter/Gupter-Regular.ttf"),
            font_size: 55,
            image_width: 1024,
            image_height: 720,
            padding_x: 10,
            padding_y: 10,
            text_color: "white".to_owned(),
            background_color: "rgb(0, 0, 162)".to_owned(),
            max_line_chars: 42,
            max_lines: 12,
            video_fps: 2,
            center_vertically: false,
        }
    }
}

impl RenderSettings {
    /// Font requested by these settings.
    pub fn font_spec(&self) -> FontSpec {
        FontSpec {
            path: self.font_path.clone(),
            size: self.font_size,
        }
    }

    /// Derive the immutable canvas shared by every slide of a run.
    pub fn canvas(&self) -> ReelResult<Canvas> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ReelError::validation(format!(
                "image size must be non-zero, got {}x{}",
                self.image_width, self.image_height
            )));
        }
        if self.font_size == 0 {
            return Err(ReelError::validation("font-size must be > 0"));
        }
        if self.max_line_chars == 0 || self.max_lines == 0 {
            return Err(ReelError::validation(
                "max-line-chars and max-lines must be > 0",
            ));
        }
        Ok(Canvas {
            width: self.image_width,
            height: self.image_height,
            background: parse_color(&self.background_color)?,
            text_color: parse_color(&self.text_color)?,
            padding_x: self.padding_x,
            padding_y: self.padding_y,
            row_pitch: Canvas::row_pitch_for(self.font_size),
        })
    }

    /// Output frame rate.
    pub fn fps(&self) -> ReelResult<Fps> {
        Fps::new(self.video_fps, 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
