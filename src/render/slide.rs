use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::font::ResolvedFont;
use crate::assets::text_layout::{TextBrushRgba8, TextLayoutEngine};
use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::FrameRGBA;
use crate::render::measure::{GlyphMetrics, TextExtent, ink_bounds};
use crate::text::block::TextBlock;
use crate::text::fitment::{FitmentReport, validate};

/// A slide image written to disk together with its advisory findings.
#[derive(Clone, Debug)]
pub struct RenderedSlide {
    /// Where the PNG was written.
    pub path: PathBuf,
    /// Fitment findings gathered while rendering.
    pub report: FitmentReport,
}

/// CPU rasterizer for text slides, powered by `parley` shaping and `vello_cpu`.
///
/// One instance holds shaping contexts for a single font and is not shared across threads;
/// parallel renders build one rasterizer per worker.
pub struct SlideRasterizer {
    canvas: Canvas,
    width: u16,
    height: u16,
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
    font_size: f32,
}

impl SlideRasterizer {
    /// Create a rasterizer drawing with `font` onto `canvas`.
    pub fn new(canvas: Canvas, font: &ResolvedFont) -> ReelResult<Self> {
        let (width, height) = canvas_size_u16(&canvas)?;
        if font.size == 0 {
            return Err(ReelError::validation("font size must be > 0"));
        }
        let engine = TextLayoutEngine::new(font)?;
        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.clone()),
            font.index,
        );
        Ok(Self {
            canvas,
            width,
            height,
            engine,
            font: data,
            font_size: font.size as f32,
        })
    }

    /// Family name of the font in use.
    pub fn family_name(&self) -> &str {
        self.engine.family_name()
    }

    /// Render `block` into memory and return the frame with its fitment findings.
    ///
    /// Trailing whitespace of the block is removed first. Findings never prevent drawing: lines
    /// that do not fit are still drawn and clipped by the canvas edge.
    pub fn render_frame(&mut self, block: &TextBlock) -> ReelResult<(FrameRGBA, FitmentReport)> {
        let block = block.with_raw(block.raw.trim_end());
        let canvas = self.canvas;
        let report = validate(&canvas, &mut *self, &block)?;
        let frame = self.draw(&block)?;
        Ok((frame, report))
    }

    /// Render `block` and write it to `out` as PNG.
    pub fn render_to_file(&mut self, block: &TextBlock, out: &Path) -> ReelResult<RenderedSlide> {
        let (frame, report) = self.render_frame(block)?;
        report.log(&out.display().to_string());
        write_png(&frame.into_straight(), out)?;
        tracing::debug!(path = %out.display(), "slide image written");
        Ok(RenderedSlide {
            path: out.to_path_buf(),
            report,
        })
    }

    fn draw(&mut self, block: &TextBlock) -> ReelResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);

        let bg = self.canvas.background;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        let fg = self.canvas.text_color;
        let brush = TextBrushRgba8 {
            r: fg.r,
            g: fg.g,
            b: fg.b,
            a: fg.a,
        };
        for (i, line) in block.lines().iter().enumerate() {
            // Blank lines still take their row.
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let layout = self.engine.layout_line(line, self.font_size, brush)?;
            let (x, y) = self.canvas.line_origin(i);
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
            fill_layout(&mut ctx, &layout, &self.font);
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl GlyphMetrics for SlideRasterizer {
    /// Rasterize `text` onto a transparent scratch surface and return the inked bounding box.
    fn measure(&mut self, text: &str) -> ReelResult<TextExtent> {
        if text.trim().is_empty() {
            return Ok(TextExtent::default());
        }
        let white = TextBrushRgba8 {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        };
        let layout = self.engine.layout_line(text, self.font_size, white)?;
        let nominal = TextExtent {
            width: layout.width().ceil().max(0.0) as u32,
            height: layout.height().ceil().max(0.0) as u32,
        };

        // Overhanging glyphs can ink outside the nominal box.
        let margin = self.font_size.ceil() as u32;
        let scratch_w = u16::try_from(nominal.width.saturating_add(margin * 2));
        let scratch_h = u16::try_from(nominal.height.saturating_add(margin * 2));
        let (Ok(w), Ok(h)) = (scratch_w, scratch_h) else {
            // Far wider than any canvas; the nominal box is enough to flag it.
            return Ok(nominal);
        };

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(margin),
            f64::from(margin),
        )));
        fill_layout(&mut ctx, &layout, &self.font);
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let extent = match ink_bounds(pixmap.data_as_u8_slice(), u32::from(w), u32::from(h)) {
            Some((x0, y0, x1, y1)) => TextExtent {
                width: x1 - x0 + 1,
                height: y1 - y0 + 1,
            },
            None => TextExtent::default(),
        };
        Ok(extent)
    }
}

fn fill_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<TextBrushRgba8>,
    font: &vello_cpu::peniko::FontData,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));

            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn canvas_size_u16(canvas: &Canvas) -> ReelResult<(u16, u16)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(ReelError::validation("canvas width/height must be non-zero"));
    }
    let w = u16::try_from(canvas.width)
        .map_err(|_| ReelError::validation("canvas width exceeds 65535"))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| ReelError::validation("canvas height exceeds 65535"))?;
    Ok((w, h))
}

fn write_png(frame: &FrameRGBA, out: &Path) -> ReelResult<()> {
    ensure_parent_dir(out)?;
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/slide.rs"]
mod tests;
