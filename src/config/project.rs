use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde_yaml::{Mapping, Value};

use crate::config::settings::RenderSettings;
use crate::foundation::error::ReelResult;

/// One rule a project document violates.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigIssue {
    /// The document is not valid YAML.
    #[error("yaml syntax: {0}")]
    Syntax(String),
    /// The top level is not a mapping.
    #[error("top level must be a mapping")]
    NotAMapping,
    /// A required top-level key is absent.
    #[error("missing `{0}` section")]
    MissingSection(&'static str),
    /// A top-level path key is not a string.
    #[error("`{key}` must be a path string")]
    InvalidPath {
        /// Offending key.
        key: &'static str,
    },
    /// `images` is not a list.
    #[error("`images` must be a list")]
    ImagesNotASequence,
    /// An `images` entry is not a mapping.
    #[error("images[{index}]: entry must be a mapping")]
    ImageNotAMapping {
        /// 0-based entry position.
        index: usize,
    },
    /// An `images` entry lacks a required field.
    #[error("images[{index}]: missing `{field}`")]
    MissingField {
        /// 0-based entry position.
        index: usize,
        /// Missing field name.
        field: &'static str,
    },
    /// `text` is not a string.
    #[error("images[{index}]: `text` must be a string")]
    InvalidText {
        /// 0-based entry position.
        index: usize,
    },
    /// `name` is not a string.
    #[error("images[{index}]: `name` must be a string")]
    InvalidName {
        /// 0-based entry position.
        index: usize,
    },
    /// `duration` is not a number.
    #[error("images[{index}]: `duration` must be a number")]
    NonNumericDuration {
        /// 0-based entry position.
        index: usize,
    },
    /// `duration` is zero, negative, or not finite.
    #[error("images[{index}]: `duration` must be > 0, got {value}")]
    NonPositiveDuration {
        /// 0-based entry position.
        index: usize,
        /// Parsed value.
        value: f64,
    },
    /// The `canvas` mapping could not be turned into render settings.
    #[error("canvas: {0}")]
    InvalidCanvas(String),
}

/// Every rule a project file violates, reported together before any rendering starts.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("invalid config '{}': {}", .path.display(), join_issues(.issues))]
pub struct ConfigError {
    /// Config file the issues were found in.
    pub path: PathBuf,
    /// Violations in document order.
    pub issues: Vec<ConfigIssue>,
}

impl ConfigError {
    /// Return `true` when `issue` is among the violations.
    pub fn has(&self, issue: &ConfigIssue) -> bool {
        self.issues.contains(issue)
    }
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One configured slide.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideEntry {
    /// Slide text, possibly multi-line.
    pub text: String,
    /// Requested display time in seconds.
    pub duration: f64,
    /// Where the slide image is written.
    pub output: PathBuf,
}

/// A validated project: inputs, outputs, slides in display order, and render settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    /// Config file the project was read from.
    pub config_path: PathBuf,
    /// Narration track.
    pub audio_path: PathBuf,
    /// Output video.
    pub video_path: PathBuf,
    /// Slides in configuration order.
    pub slides: Vec<SlideEntry>,
    /// Canvas, font, and timing options.
    pub settings: RenderSettings,
}

/// Read and validate a project file.
///
/// Relative paths inside the file resolve against the file's directory. A missing audio file is
/// only logged here; assembly fails on it later.
#[tracing::instrument]
pub fn load_project(path: &Path) -> ReelResult<Project> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    let doc: Value = serde_yaml::from_str(&raw).map_err(|e| ConfigError {
        path: path.to_path_buf(),
        issues: vec![ConfigIssue::Syntax(e.to_string())],
    })?;
    let project = validate_document(&doc, path)?;

    if project.audio_path.is_file() {
        tracing::debug!(audio = %project.audio_path.display(), "audio found");
    } else {
        tracing::warn!(audio = %project.audio_path.display(), "audio file not found");
    }
    tracing::info!(slides = project.slides.len(), "config loaded");
    Ok(project)
}

/// Validate a parsed project document, collecting every violation.
pub fn validate_document(doc: &Value, config_path: &Path) -> Result<Project, ConfigError> {
    let base = config_path.parent().unwrap_or(Path::new(""));
    let mut issues = Vec::new();

    let Some(map) = doc.as_mapping() else {
        return Err(ConfigError {
            path: config_path.to_path_buf(),
            issues: vec![ConfigIssue::NotAMapping],
        });
    };

    let audio_path = match map.get("audio") {
        None => {
            issues.push(ConfigIssue::MissingSection("audio"));
            None
        }
        Some(Value::String(s)) => Some(base.join(s)),
        Some(_) => {
            issues.push(ConfigIssue::InvalidPath { key: "audio" });
            None
        }
    };

    let video_path = match map.get("video") {
        None => {
            tracing::debug!("no `video` key, using movie.mp4");
            Some(base.join("movie.mp4"))
        }
        Some(Value::String(s)) => Some(base.join(s)),
        Some(_) => {
            issues.push(ConfigIssue::InvalidPath { key: "video" });
            None
        }
    };

    let slides = match map.get("images") {
        None => {
            issues.push(ConfigIssue::MissingSection("images"));
            Vec::new()
        }
        Some(Value::Sequence(entries)) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| slide_entry(index, entry, base, &mut issues))
            .collect(),
        Some(_) => {
            issues.push(ConfigIssue::ImagesNotASequence);
            Vec::new()
        }
    };

    let settings = match map.get("canvas") {
        None => Some(RenderSettings::default()),
        Some(v) => render_settings(v, base, &mut issues),
    };

    match (audio_path, video_path, settings) {
        (Some(audio_path), Some(video_path), Some(settings)) if issues.is_empty() => Ok(Project {
            config_path: config_path.to_path_buf(),
            audio_path,
            video_path,
            slides,
            settings,
        }),
        _ => Err(ConfigError {
            path: config_path.to_path_buf(),
            issues,
        }),
    }
}

fn slide_entry(
    index: usize,
    entry: &Value,
    base: &Path,
    issues: &mut Vec<ConfigIssue>,
) -> Option<SlideEntry> {
    let Some(entry) = entry.as_mapping() else {
        issues.push(ConfigIssue::ImageNotAMapping { index });
        return None;
    };
    let before = issues.len();

    let text = match entry.get("text") {
        None => {
            issues.push(ConfigIssue::MissingField {
                index,
                field: "text",
            });
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(ConfigIssue::InvalidText { index });
            None
        }
    };

    let duration = match entry.get("duration") {
        None => {
            issues.push(ConfigIssue::MissingField {
                index,
                field: "duration",
            });
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(value) if value.is_finite() && value > 0.0 => Some(value),
            Some(value) => {
                issues.push(ConfigIssue::NonPositiveDuration { index, value });
                None
            }
            None => {
                issues.push(ConfigIssue::NonNumericDuration { index });
                None
            }
        },
        Some(_) => {
            issues.push(ConfigIssue::NonNumericDuration { index });
            None
        }
    };

    let output = match entry.get("name") {
        None => Some(base.join(format!("text_image_{}.png", index + 1))),
        Some(Value::String(s)) => Some(base.join(s)),
        Some(_) => {
            issues.push(ConfigIssue::InvalidName { index });
            None
        }
    };

    if issues.len() != before {
        return None;
    }
    Some(SlideEntry {
        text: text?,
        duration: duration?,
        output: output?,
    })
}

fn render_settings(
    value: &Value,
    base: &Path,
    issues: &mut Vec<ConfigIssue>,
) -> Option<RenderSettings> {
    let mut settings = match serde_yaml::from_value::<RenderSettings>(value.clone()) {
        Ok(s) => s,
        Err(e) => {
            issues.push(ConfigIssue::InvalidCanvas(e.to_string()));
            return None;
        }
    };
    // A font path written in the project file is relative to that file.
    let explicit_font = value
        .as_mapping()
        .is_some_and(|m: &Mapping| m.contains_key("font-path"));
    if explicit_font && settings.font_path.is_relative() {
        settings.font_path = base.join(&settings.font_path);
    }
    if let Err(e) = settings.canvas().and_then(|_| settings.fps()) {
        issues.push(ConfigIssue::InvalidCanvas(e.to_string()));
        return None;
    }
    Some(settings)
}

/// Human-readable summary of a project, as printed by `lyric-reel show`.
pub fn format_project(project: &Project) -> String {
    let rule = "-".repeat(48);
    let s = &project.settings;
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "config: {}", project.config_path.display());
    let _ = writeln!(out, "audio:  {}", project.audio_path.display());
    let _ = writeln!(out, "video:  {}", project.video_path.display());
    let _ = writeln!(
        out,
        "canvas: {}x{} px, font {} @ {}px, {} fps",
        s.image_width,
        s.image_height,
        s.font_path.display(),
        s.font_size,
        s.video_fps
    );
    let total: f64 = project.slides.iter().map(|e| e.duration).sum();
    let _ = writeln!(
        out,
        "slides: {} (requested {total:.2}s)",
        project.slides.len()
    );
    for (i, slide) in project.slides.iter().enumerate() {
        let first = slide.text.lines().next().unwrap_or("");
        let _ = writeln!(
            out,
            "  {:>3}. {:>6.2}s  {}  \"{}\"",
            i + 1,
            slide.duration,
            slide.output.display(),
            first
        );
    }
    let _ = write!(out, "{rule}");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/config/project.rs"]
mod tests;
