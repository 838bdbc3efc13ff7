use crate::foundation::core::Canvas;
use crate::foundation::error::ReelResult;
use crate::render::measure::GlyphMetrics;
use crate::text::block::{TextBlock, line_char_count};

/// One advisory fitment problem. Findings never stop a render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FitmentFinding {
    /// The block has more lines than the line budget.
    TooManyLines {
        /// Counted lines.
        lines: usize,
        /// Configured budget.
        max: usize,
    },
    /// A line has more characters than allowed.
    LineTooLong {
        /// 0-based line index.
        line: usize,
        /// Characters over the limit.
        overflow: usize,
    },
    /// A line's inked width plus horizontal padding on both sides exceeds the canvas.
    ExceedsCanvasWidth {
        /// 0-based line index.
        line: usize,
        /// Measured width plus padding.
        width: u32,
        /// Canvas width.
        limit: u32,
    },
    /// A line's inked height plus vertical padding on both sides exceeds the canvas.
    ExceedsCanvasHeight {
        /// 0-based line index.
        line: usize,
        /// Measured height plus padding.
        height: u32,
        /// Canvas height.
        limit: u32,
    },
}

impl std::fmt::Display for FitmentFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyLines { lines, max } => {
                write!(f, "too many lines: {lines} (limit {max})")
            }
            Self::LineTooLong { line, overflow } => {
                write!(f, "line {line} too long: reduce by {overflow} characters")
            }
            Self::ExceedsCanvasWidth { line, width, limit } => {
                write!(f, "line {line} exceeds canvas width: {width}px > {limit}px")
            }
            Self::ExceedsCanvasHeight {
                line,
                height,
                limit,
            } => write!(f, "line {line} exceeds canvas height: {height}px > {limit}px"),
        }
    }
}

/// Advisory findings for one text block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FitmentReport {
    /// Findings in check order: line count, then per line character and pixel checks.
    pub findings: Vec<FitmentFinding>,
}

impl FitmentReport {
    /// Return `true` when the block fits every limit.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Emit one warning per finding.
    pub fn log(&self, context: &str) {
        for finding in &self.findings {
            tracing::warn!(slide = context, "{finding}");
        }
    }
}

/// Check `block` against its character limits and against the canvas pixel bounds.
///
/// Limits are inclusive. Padding counts twice in the pixel checks, matching the margin the
/// rasterizer leaves on the far side. Only measurement failures are errors.
pub fn validate(
    canvas: &Canvas,
    metrics: &mut dyn GlyphMetrics,
    block: &TextBlock,
) -> ReelResult<FitmentReport> {
    let lines = block.lines();
    let mut report = FitmentReport::default();

    if lines.len() > block.max_lines {
        report.findings.push(FitmentFinding::TooManyLines {
            lines: lines.len(),
            max: block.max_lines,
        });
    }

    let width_pad = canvas.padding_x.saturating_mul(2);
    let height_pad = canvas.padding_y.saturating_mul(2);

    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim_end();

        let chars = line_char_count(line);
        if chars > block.max_line_chars {
            report.findings.push(FitmentFinding::LineTooLong {
                line: i,
                overflow: chars - block.max_line_chars,
            });
        }

        let extent = metrics.measure(line)?;
        let width = extent.width.saturating_add(width_pad);
        if width > canvas.width {
            report.findings.push(FitmentFinding::ExceedsCanvasWidth {
                line: i,
                width,
                limit: canvas.width,
            });
        }
        let height = extent.height.saturating_add(height_pad);
        if height > canvas.height {
            report.findings.push(FitmentFinding::ExceedsCanvasHeight {
                line: i,
                height,
                limit: canvas.height,
            });
        }
    }

    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/text/fitment.rs"]
mod tests;
