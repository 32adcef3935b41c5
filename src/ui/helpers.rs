//! UI helper functions

use ratatui::text::{Line, Span};

/// A chip is a short run of styled spans that must stay on one line
pub type Chip = Vec<Span<'static>>;

/// Display width of a chip in terminal columns
pub fn chip_width(chip: &[Span<'_>]) -> usize {
    chip.iter().map(|span| span.width()).sum()
}

/// Lay chips out left to right, starting a new line when the next chip
/// (plus `gap` columns) would overflow `max_width`.
///
/// A chip wider than `max_width` gets a line of its own.
pub fn flow_chips(chips: Vec<Chip>, max_width: usize, gap: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for chip in chips {
        let width = chip_width(&chip);
        if current.is_empty() {
            current_width = width;
            current.extend(chip);
        } else if max_width == 0 || current_width + gap + width <= max_width {
            current.push(Span::raw(" ".repeat(gap)));
            current_width += gap + width;
            current.extend(chip);
        } else {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = width;
            current.extend(chip);
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// Truncate `text` to `max_width` characters, ending in "..." when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    // Safely truncate using character boundaries
    let take_chars = max_width.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip(text: &str) -> Chip {
        vec![Span::raw(text.to_string())]
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_flow_chips_empty() {
        assert!(flow_chips(Vec::new(), 10, 1).is_empty());
    }

    #[test]
    fn test_flow_chips_zero_width_keeps_one_line() {
        let lines = flow_chips(vec![chip("aaa"), chip("bbb")], 0, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "aaa bbb");
    }

    #[test]
    fn test_flow_chips_fits_on_one_line() {
        let lines = flow_chips(vec![chip("aaa"), chip("bbb")], 7, 1);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_flow_chips_multiple_lines() {
        let lines = flow_chips(vec![chip("aaa"), chip("bbb"), chip("cc")], 6, 1);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["aaa", "bbb cc"]);
    }

    #[test]
    fn test_flow_chips_oversized_chip_alone() {
        let lines = flow_chips(vec![chip("a"), chip("much-too-wide"), chip("b")], 5, 1);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_chip_width_counts_columns() {
        assert_eq!(chip_width(&[Span::raw("UL — "), Span::raw("Unlocker")]), 13);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Critical Thinking Prompts", 10), "Critica...");
    }
}
