// crates/modgen-core/src/template/lines.rs
//
// Line-level helpers for the template normalizer.
//
// Rules:
// - Line breaks are "\n" and "\r\n". A lone "\r" is ordinary text.
// - "Whitespace" is the fixed set in `is_indent_char`: ASCII tab, LF, VT, FF,
//   CR, space, plus the Unicode space separators, LS/PS and the BOM (U+FEFF).
//   NEL (U+0085) is not whitespace.
// - A line is blank when it holds only whitespace (or nothing).
// - Indentation width counts leading whitespace chars. Tabs and spaces are
//   one unit each; mixed indentation can dedent unevenly and that is kept.

/// Split `raw` on "\n", dropping one "\r" right before each break.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[inline]
pub fn is_indent_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

#[inline]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_indent_char)
}

pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|&c| is_indent_char(c)).count()
}

/// Inclusive `(first, last)` indices of the lines holding content, or `None`
/// when every line is blank.
pub fn content_bounds(lines: &[&str]) -> Option<(usize, usize)> {
    let first = lines.iter().position(|l| !is_blank(l))?;
    let last = lines.iter().rposition(|l| !is_blank(l))?;
    Some((first, last))
}

/// Smallest indentation over the non-blank lines; 0 if there are none.
pub fn min_indent(lines: &[&str]) -> usize {
    lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0)
}

/// Drop up to `n` leading chars. Shorter lines come back empty.
pub fn strip_indent(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((at, _)) => &line[at..],
        None => "",
    }
}
