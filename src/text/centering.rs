/// Pad `text` with leading blank lines so it sits vertically centered within `max_lines` rows.
///
/// Lines are counted on the trimmed text and `ceil((max_lines - lines) / 2)` empty lines are
/// prepended to the text as given. Text already at or over the budget is returned unchanged.
/// The transform is not idempotent: callers apply it at most once per raw block.
pub fn center_vertically(text: &str, max_lines: usize) -> String {
    let count = text.trim().lines().count();
    if count >= max_lines {
        return text.to_owned();
    }
    let pad = (max_lines - count).div_ceil(2);
    let mut out = String::with_capacity(pad + text.len());
    for _ in 0..pad {
        out.push('\n');
    }
    out.push_str(text);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/centering.rs"]
mod tests;
