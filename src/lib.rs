//! lyric-reel renders text slides to images and assembles them against a narration track into
//! an MP4 lyric video.
//!
//! The pipeline runs in order:
//!
//! - Load and validate a [`Project`] from YAML with [`load_project`]
//! - Render each slide with a [`SlideRasterizer`], collecting advisory [`FitmentReport`]s
//! - [`reconcile`] the requested durations against the audio length
//! - Stream the timed clips into a [`FrameSink`] with [`assemble`]
//!
//! Text findings never abort a run. Config violations, infeasible schedules and missing assets
//! surface as [`ReelError`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod config;
mod encode;
mod foundation;
mod pipeline;
mod render;
mod schedule;
mod text;
mod video;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Rgba8};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::assets::color::parse_color;
pub use crate::assets::font::{FontSource, FontSpec, ResolvedFont, resolve_font};
pub use crate::assets::media::{SlideImage, load_slide_image, probe_audio_duration};
pub use crate::config::project::{
    ConfigError, ConfigIssue, Project, SlideEntry, format_project, load_project, validate_document,
};
pub use crate::config::settings::RenderSettings;
pub use crate::encode::ffmpeg::{
    FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path, is_ffprobe_on_path,
};
pub use crate::encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};
pub use crate::pipeline::{generate_images, generate_video, render_test_slide};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::measure::{GlyphMetrics, TextExtent};
pub use crate::render::slide::{RenderedSlide, SlideRasterizer};
pub use crate::schedule::reconcile::{ReconciledSchedule, ScheduledClip, TimedImage, reconcile};
pub use crate::text::block::TextBlock;
pub use crate::text::centering::center_vertically;
pub use crate::text::fitment::{FitmentFinding, FitmentReport, validate};
pub use crate::video::assemble::{AssemblyStats, assemble};
