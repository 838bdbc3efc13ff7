use std::path::Path;

use crate::assets::media::load_slide_image;
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::FrameRGBA;
use crate::schedule::reconcile::ReconciledSchedule;

/// Counters reported by [`assemble`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Clips decoded, including zero-length ones.
    pub clips: usize,
    /// Frames pushed to the sink.
    pub frames: u64,
}

/// Concatenate the scheduled clips in order and hand them to `sink` with `audio` attached.
///
/// Each image is checked and decoded right before its frames are pushed, so a file that vanished
/// after rendering fails the run with [`ReelError::MissingAsset`]. Every image must share the
/// first image's dimensions.
#[tracing::instrument(skip(schedule, sink), fields(clips = schedule.clips().len()))]
pub fn assemble(
    schedule: &ReconciledSchedule,
    audio: &Path,
    sink: &mut dyn FrameSink,
    fps: Fps,
) -> ReelResult<AssemblyStats> {
    if schedule.clips().is_empty() {
        return Err(ReelError::validation("cannot assemble an empty schedule"));
    }
    if !audio.is_file() {
        return Err(ReelError::missing_asset(audio));
    }

    let counts = schedule.frame_counts(fps);
    if counts.iter().all(|&n| n == 0) {
        return Err(ReelError::validation(format!(
            "schedule of {:.3}s yields no frames at {} fps",
            schedule.total_secs(),
            fps.as_f64()
        )));
    }

    let mut stats = AssemblyStats::default();
    let mut size: Option<(u32, u32)> = None;
    let mut next = 0u64;

    for (clip, &count) in schedule.clips().iter().zip(&counts) {
        let image = load_slide_image(&clip.image)?;
        match size {
            None => {
                sink.begin(SinkConfig {
                    width: image.width,
                    height: image.height,
                    fps,
                    audio: Some(AudioInputConfig {
                        path: audio.to_path_buf(),
                    }),
                })?;
                size = Some((image.width, image.height));
            }
            Some((w, h)) if (w, h) != (image.width, image.height) => {
                return Err(ReelError::validation(format!(
                    "image '{}' is {}x{}, expected {w}x{h} like the first slide",
                    clip.image.display(),
                    image.width,
                    image.height
                )));
            }
            Some(_) => {}
        }

        tracing::debug!(
            image = %clip.image.display(),
            duration = clip.duration,
            frames = count,
            "clip"
        );

        let frame = FrameRGBA {
            width: image.width,
            height: image.height,
            data: image.rgba8,
            premultiplied: false,
        };
        for _ in 0..count {
            sink.push_frame(FrameIndex(next), &frame)?;
            next += 1;
        }
        stats.clips += 1;
    }

    sink.end()?;
    stats.frames = next;
    tracing::info!(clips = stats.clips, frames = stats.frames, "video assembled");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/video/assemble.rs"]
mod tests;
