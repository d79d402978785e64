/// A contiguous 1-based range of document lines centered on the first line
/// containing a keyword, clamped to the document's bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchWindow {
    /// 1-based number of the first line containing the keyword.
    pub matched_line: usize,
    /// First line of the window, never less than 1.
    pub start: usize,
    /// Last line of the window, never greater than the document's line count.
    pub end: usize,
    /// The window's lines paired with their 1-based numbers, ascending.
    pub lines: Vec<(usize, String)>,
}

/// Finds the first line containing `keyword` and returns the surrounding
/// window of `context_radius` lines on either side, clamped to the
/// document's bounds.
///
/// The search is a literal, case-sensitive substring scan that stops at the
/// first matching line. Returns `None` when no line matches; absence is a
/// normal outcome, not an error.
pub fn locate(lines: &[String], keyword: &str, context_radius: usize) -> Option<MatchWindow> {
    let matched_line = lines.iter().position(|line| line.contains(keyword))? + 1;

    let start = matched_line.saturating_sub(context_radius).max(1);
    let end = (matched_line + context_radius).min(lines.len());

    let window_lines = (start..=end)
        .map(|number| (number, lines[number - 1].clone()))
        .collect();

    Some(MatchWindow {
        matched_line,
        start,
        end,
        lines: window_lines,
    })
}
