//! Body-template normalization.

/// Normalize a free-form body template into emission-ready lines.
///
/// Strips leading and trailing blank lines, removes the common leading
/// whitespace shared by the remaining non-blank lines, and preserves
/// relative indentation. Interior blank lines survive as empty strings.
///
/// Authors typically write bodies as indented multi-line literals; the
/// indentation of the literal belongs to the authoring site, not to the
/// rendered output, so it is stripped here and the enclosing fragment
/// re-applies the final indent.
///
/// # Example
///
/// ```
/// use codemosaic_render::normalize_block;
///
/// let lines = normalize_block("\n    x = 1\n        y = 2\n    ");
/// assert_eq!(lines, vec!["x = 1".to_string(), "    y = 2".to_string()]);
/// ```
pub fn normalize_block(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();

    let is_blank = |line: &&str| line.trim().is_empty();
    let first = lines.iter().position(|l| !is_blank(l));
    let Some(first) = first else {
        return Vec::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    let lines = &lines[first..=last];

    let margin = lines
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                strip_margin(line, margin).trim_end().to_string()
            }
        })
        .collect()
}

/// Drop up to `margin` leading whitespace characters.
fn strip_margin(line: &str, margin: usize) -> &str {
    let mut rest = line;
    for _ in 0..margin {
        match rest.chars().next() {
            Some(c) if c.is_whitespace() => rest = &rest[c.len_utf8()..],
            _ => break,
        }
    }
    rest
}
