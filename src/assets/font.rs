use std::path::{Path, PathBuf};

use crate::foundation::error::{ReelError, ReelResult};

/// Font requested by the render settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSpec {
    /// Font file path (TTF/OTF/TTC).
    pub path: PathBuf,
    /// Font size in pixels.
    pub size: u32,
}

/// Where the bytes of a [`ResolvedFont`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// Loaded from the configured path.
    Path(PathBuf),
    /// The configured path was unusable; a system face was used instead.
    Fallback {
        /// Family name of the system face.
        family: String,
    },
}

/// Font bytes ready for shaping and rasterization.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    /// Raw font file bytes.
    pub bytes: Vec<u8>,
    /// Face index inside `bytes` (non-zero only for collections).
    pub index: u32,
    /// Font size in pixels.
    pub size: u32,
    /// Which resolution step produced the font.
    pub source: FontSource,
}

impl ResolvedFont {
    /// Return `true` when the configured font could not be used.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, FontSource::Fallback { .. })
    }
}

/// Resolve `spec` to font bytes.
///
/// The configured path is tried first. When it does not point to a readable file, the system font
/// database is queried for a sans-serif face, then a serif face, then any face at all. Only the
/// absence of every candidate is an error.
pub fn resolve_font(spec: &FontSpec) -> ReelResult<ResolvedFont> {
    if spec.size == 0 {
        return Err(ReelError::validation("font size must be > 0"));
    }

    match read_font_file(&spec.path) {
        Ok(bytes) => {
            tracing::debug!(path = %spec.path.display(), "loaded font");
            return Ok(ResolvedFont {
                bytes,
                index: 0,
                size: spec.size,
                source: FontSource::Path(spec.path.clone()),
            });
        }
        Err(reason) => {
            tracing::warn!(
                path = %spec.path.display(),
                %reason,
                "font not usable, falling back to a system font"
            );
        }
    }

    let (bytes, index, family) = load_system_fallback()?;
    Ok(ResolvedFont {
        bytes,
        index,
        size: spec.size,
        source: FontSource::Fallback { family },
    })
}

fn read_font_file(path: &Path) -> Result<Vec<u8>, String> {
    if !path.is_file() {
        return Err("not a file".to_owned());
    }
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    if bytes.is_empty() {
        return Err("file is empty".to_owned());
    }
    Ok(bytes)
}

fn load_system_fallback() -> ReelResult<(Vec<u8>, u32, String)> {
    use usvg::fontdb::{Database, Family, Query};

    let mut db = Database::new();
    db.load_system_fonts();

    let query_family = |family: Family<'_>| {
        db.query(&Query {
            families: &[family],
            ..Query::default()
        })
    };
    let id = query_family(Family::SansSerif)
        .or_else(|| query_family(Family::Serif))
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or_else(|| {
            ReelError::font("configured font is missing and no system fonts are installed")
        })?;

    let family = db
        .face(id)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "unknown".to_owned());
    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| ReelError::font(format!("failed to read system font '{family}'")))?;

    tracing::debug!(%family, "using system fallback font");
    Ok((bytes, index, family))
}
