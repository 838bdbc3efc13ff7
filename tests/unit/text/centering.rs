use super::*;

fn line_count(s: &str) -> usize {
    s.lines().count()
}

#[test]
fn pads_with_ceil_half_of_the_gap() {
    let out = center_vertically("a\nb\nc", 10);
    // gap 7 -> 4 blank lines
    assert_eq!(out, "\n\n\n\na\nb\nc");

    let out = center_vertically("a\nb", 10);
    assert_eq!(line_count(&out), 2 + 4);
}

#[test]
fn counts_lines_on_trimmed_text() {
    let out = center_vertically("hello\nworld\n\n", 5);
    // two counted lines, gap 3 -> 2 blank lines prepended to the text as given
    assert_eq!(out, "\n\nhello\nworld\n\n");
}

#[test]
fn full_or_overflowing_text_is_unchanged() {
    let full = "1\n2\n3";
    assert_eq!(center_vertically(full, 3), full);
    let over = "1\n2\n3\n4\n5";
    assert_eq!(center_vertically(over, 3), over);
    assert_eq!(center_vertically("", 0), "");
}

#[test]
fn line_count_grows_by_exactly_the_padding() {
    for max in 0..8 {
        for n in 0..8 {
            let text = (0..n).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
            let out = center_vertically(&text, max);
            let expected = if max > n { n + (max - n).div_ceil(2) } else { n };
            assert_eq!(line_count(&out), expected, "n={n} max={max}");
        }
    }
}

#[test]
fn applying_twice_double_pads() {
    let once = center_vertically("x", 5);
    assert_eq!(once, "\n\nx");
    let twice = center_vertically(&once, 5);
    assert_eq!(twice, "\n\n\n\nx");
}
