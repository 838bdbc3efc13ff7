use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::assets::font::{FontSource, ResolvedFont, resolve_font};
use crate::assets::media::probe_audio_duration;
use crate::config::project::Project;
use crate::config::settings::RenderSettings;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::foundation::core::Canvas;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::measure::GlyphMetrics;
use crate::render::slide::{RenderedSlide, SlideRasterizer};
use crate::schedule::reconcile::{ReconciledSchedule, TimedImage};
use crate::text::block::TextBlock;
use crate::text::centering::center_vertically;
use crate::video::assemble::assemble;

/// Render every configured slide to its output image, in configuration order.
///
/// With `parallel` set, slides are rendered on the rayon pool with one rasterizer per worker;
/// the returned list keeps configuration order either way. Fitment findings are logged and never
/// stop the batch.
#[tracing::instrument(skip(project), fields(slides = project.slides.len()))]
pub fn generate_images(project: &Project, parallel: bool) -> ReelResult<Vec<RenderedSlide>> {
    let settings = &project.settings;
    let canvas = settings.canvas()?;
    let font = load_font(settings)?;

    let jobs: Vec<(TextBlock, &Path)> = project
        .slides
        .iter()
        .map(|slide| {
            let text = if settings.center_vertically {
                center_vertically(&slide.text, settings.max_lines)
            } else {
                slide.text.clone()
            };
            (
                TextBlock::new(text, settings.max_line_chars, settings.max_lines),
                slide.output.as_path(),
            )
        })
        .collect();

    let rendered = if parallel {
        render_parallel(canvas, &font, &jobs)?
    } else {
        let mut raster = SlideRasterizer::new(canvas, &font)?;
        jobs.iter()
            .map(|(block, out)| raster.render_to_file(block, out))
            .collect::<ReelResult<Vec<_>>>()?
    };

    let flagged = rendered.iter().filter(|r| !r.report.is_clean()).count();
    tracing::info!(
        images = rendered.len(),
        with_findings = flagged,
        "slide images generated"
    );
    Ok(rendered)
}

fn render_parallel(
    canvas: Canvas,
    font: &ResolvedFont,
    jobs: &[(TextBlock, &Path)],
) -> ReelResult<Vec<RenderedSlide>> {
    // Surface construction errors once instead of per worker.
    drop(SlideRasterizer::new(canvas, font)?);

    jobs.par_iter()
        .map_init(
            || SlideRasterizer::new(canvas, font),
            |worker, (block, out)| match worker {
                Ok(raster) => raster.render_to_file(block, out),
                Err(e) => Err(ReelError::evaluation(format!(
                    "failed to create worker rasterizer: {e}"
                ))),
            },
        )
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Reconcile the slide durations against the audio track and encode the video.
///
/// Requires `ffprobe` and `ffmpeg` on `PATH`. Returns the written video path.
#[tracing::instrument(skip(project), fields(video = %project.video_path.display()))]
pub fn generate_video(project: &Project) -> ReelResult<PathBuf> {
    let settings = &project.settings;
    let canvas = settings.canvas()?;
    let fps = settings.fps()?;

    let audio_secs = probe_audio_duration(&project.audio_path)?;
    tracing::info!(audio_secs, "audio duration");

    let timed: Vec<TimedImage> = project
        .slides
        .iter()
        .map(|s| TimedImage {
            image: s.output.clone(),
            requested: s.duration,
        })
        .collect();
    let schedule = ReconciledSchedule::build(&timed, audio_secs)?;

    let mut opts = FfmpegSinkOpts::new(&project.video_path);
    opts.bg_rgba = canvas.background.to_array();
    let mut sink = FfmpegSink::new(opts);
    assemble(&schedule, &project.audio_path, &mut sink, fps)?;

    tracing::info!(path = %project.video_path.display(), "video written");
    Ok(project.video_path.clone())
}

/// Render the built-in sample slide to `out`.
///
/// The sample fills every line with `"<n>-"` followed by `"0123456789;"` ten times, which
/// deliberately overflows the default character limit so the warnings can be inspected.
#[tracing::instrument(skip(settings))]
pub fn render_test_slide(settings: &RenderSettings, out: &Path) -> ReelResult<RenderedSlide> {
    let canvas = settings.canvas()?;
    let font = load_font(settings)?;
    let mut raster = SlideRasterizer::new(canvas, &font)?;

    let sample = "Hello World";
    let extent = raster.measure(sample)?;
    tracing::debug!(
        sample,
        family = raster.family_name(),
        width = extent.width,
        height = extent.height,
        max_line_chars = settings.max_line_chars,
        max_lines = settings.max_lines,
        "sample extent"
    );

    let block = TextBlock::new(
        sample_text(settings.max_lines),
        settings.max_line_chars,
        settings.max_lines,
    );
    raster.render_to_file(&block, out)
}

fn sample_text(lines: usize) -> String {
    let row = "0123456789;".repeat(10);
    (1..=lines)
        .map(|n| format!("{n}-{row}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn load_font(settings: &RenderSettings) -> ReelResult<ResolvedFont> {
    let font = resolve_font(&settings.font_spec())?;
    match &font.source {
        FontSource::Path(path) => tracing::debug!(font = %path.display(), "font loaded"),
        FontSource::Fallback { family } => tracing::info!(
            requested = %settings.font_path.display(),
            fallback = %family,
            "rendering with fallback font"
        ),
    }
    Ok(font)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
