use std::path::Path;

use crate::foundation::error::{ReelError, ReelResult};

/// Decoded slide image as straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct SlideImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub rgba8: Vec<u8>,
}

/// Decode a slide image from disk.
///
/// Existence is checked here, right before use, so a file removed after rendering surfaces as
/// [`ReelError::MissingAsset`] rather than a decode failure.
pub fn load_slide_image(path: &Path) -> ReelResult<SlideImage> {
    if !path.is_file() {
        return Err(ReelError::missing_asset(path));
    }
    let img = image::open(path).map_err(|e| {
        ReelError::evaluation(format!("failed to decode image '{}': {e}", path.display()))
    })?;
    let rgba = img.to_rgba8();
    Ok(SlideImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba8: rgba.into_raw(),
    })
}

/// Read the duration of an audio file in seconds through `ffprobe`.
pub fn probe_audio_duration(path: &Path) -> ReelResult<f64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: ProbeFormat,
    }

    if !path.is_file() {
        return Err(ReelError::missing_asset(path));
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_entries",
            "format=duration",
        ])
        .arg(path)
        .output()
        .map_err(|e| ReelError::evaluation(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ReelError::evaluation(format!(
            "ffprobe failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| ReelError::evaluation(format!("ffprobe json parse failed: {e}")))?;
    let raw = parsed.format.duration.ok_or_else(|| {
        ReelError::evaluation(format!(
            "ffprobe reported no duration for '{}'",
            path.display()
        ))
    })?;
    parse_probe_duration(&raw)
}

fn parse_probe_duration(raw: &str) -> ReelResult<f64> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ReelError::evaluation(format!("invalid ffprobe duration \"{raw}\"")))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ReelError::evaluation(format!(
            "audio duration must be positive, got {secs}"
        )));
    }
    Ok(secs)
}
