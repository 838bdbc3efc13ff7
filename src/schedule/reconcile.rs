use std::path::PathBuf;

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// A rendered slide image with the display time the config asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedImage {
    /// Slide image path.
    pub image: PathBuf,
    /// Requested display time in seconds.
    pub requested: f64,
}

/// A slide image with its final display time.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledClip {
    /// Slide image path.
    pub image: PathBuf,
    /// Final display time in seconds.
    pub duration: f64,
}

/// Ordered clip schedule whose durations add up to the audio duration.
#[derive(Clone, Debug, PartialEq)]
pub struct ReconciledSchedule {
    clips: Vec<ScheduledClip>,
    total: f64,
}

/// Relative slack allowed when comparing the summed prefix against the limit.
const SUM_TOLERANCE: f64 = 1e-9;

/// Stretch or shrink the last duration so the sequence sums to `limit`.
///
/// Every duration except the last passes through unchanged; the last becomes
/// `limit - sum(all others)`. A single-element input therefore becomes `[limit]`.
///
/// Fails with [`ReelError::DurationLimitExceeded`] when the durations before the last already
/// exceed `limit`. Reaching `limit` exactly is allowed and leaves the last clip with zero time.
pub fn reconcile(durations: &[f64], limit: f64) -> ReelResult<Vec<f64>> {
    if !limit.is_finite() || limit <= 0.0 {
        return Err(ReelError::validation(format!(
            "duration limit must be finite and > 0, got {limit}"
        )));
    }
    let Some((_, head)) = durations.split_last() else {
        return Err(ReelError::validation("cannot reconcile an empty schedule"));
    };
    if let Some(bad) = durations.iter().find(|d| !d.is_finite() || **d <= 0.0) {
        return Err(ReelError::validation(format!(
            "durations must be finite and > 0, got {bad}"
        )));
    }

    let requested: f64 = head.iter().sum();
    // Summation error must not turn an exact fit into a failure.
    let tolerance = SUM_TOLERANCE * limit.max(1.0);
    if requested > limit + tolerance {
        return Err(ReelError::DurationLimitExceeded { requested, limit });
    }

    let mut out = durations.to_vec();
    if let Some(last) = out.last_mut() {
        *last = (limit - requested).max(0.0);
    }
    Ok(out)
}

impl ReconciledSchedule {
    /// Reconcile `images` against the audio duration `limit`, preserving order.
    pub fn build(images: &[TimedImage], limit: f64) -> ReelResult<Self> {
        let requested: Vec<f64> = images.iter().map(|t| t.requested).collect();
        let durations = reconcile(&requested, limit)?;
        tracing::debug!(?requested, final_durations = ?durations, limit, "reconciled schedule");

        let clips = images
            .iter()
            .zip(durations)
            .map(|(t, duration)| ScheduledClip {
                image: t.image.clone(),
                duration,
            })
            .collect();
        Ok(Self {
            clips,
            total: limit,
        })
    }

    /// Clips in display order.
    pub fn clips(&self) -> &[ScheduledClip] {
        &self.clips
    }

    /// Total duration in seconds (the audio duration).
    pub fn total_secs(&self) -> f64 {
        self.total
    }

    /// Frames each clip occupies at `fps`.
    ///
    /// Clip boundaries are rounded on the cumulative timeline, so per-clip rounding never drifts
    /// and the counts always add up to `round(total * fps)`.
    pub fn frame_counts(&self, fps: Fps) -> Vec<u64> {
        let mut counts = Vec::with_capacity(self.clips.len());
        let mut start_secs = 0.0f64;
        let mut start_frame = 0u64;
        let last = self.clips.len().saturating_sub(1);
        for (i, clip) in self.clips.iter().enumerate() {
            // The last boundary is pinned to the total to absorb float error in the running sum.
            let end_secs = if i == last {
                self.total
            } else {
                start_secs + clip.duration
            };
            let end_frame = fps.secs_to_frames_round(end_secs).max(start_frame);
            counts.push(end_frame - start_frame);
            start_secs = end_secs;
            start_frame = end_frame;
        }
        counts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/reconcile.rs"]
mod tests;
