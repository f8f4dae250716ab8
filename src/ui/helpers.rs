//! Shared rendering utilities.
//!
//! Text is measured in `char`s, not bytes, so titles and descriptions with
//! non-ASCII characters are clipped and padded correctly.

/// Card titles longer than this are cut and followed by `...`.
pub const TITLE_LIMIT: usize = 35;

/// Positions the cursor at a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens a title to its first [`TITLE_LIMIT`] characters plus `...`.
///
/// Titles at or under the limit are returned unchanged.
///
/// ```rust
/// use shelfscout::ui::helpers::truncate_title;
///
/// assert_eq!(truncate_title("Dune"), "Dune");
/// assert_eq!(truncate_title(&"x".repeat(40)), format!("{}...", "x".repeat(35)));
/// ```
#[must_use]
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_LIMIT) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

/// Clips `text` to `width` characters and pads it with spaces to exactly `width`.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Left padding that centers `len` characters in `width` columns.
#[must_use]
pub const fn center_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Greedy word wrap into lines of at most `width` characters.
///
/// Newlines in the input are kept as line breaks, so a blank line between
/// paragraphs survives as an empty line. Words longer than `width` are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in source_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_exact_limit() {
        let exact = "a".repeat(TITLE_LIMIT);
        assert_eq!(truncate_title(&exact), exact);
    }

    #[test]
    fn truncate_counts_characters() {
        let title = "é".repeat(36);
        assert_eq!(truncate_title(&title), format!("{}...", "é".repeat(35)));
    }

    #[test]
    fn fit_width_pads_and_clips() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 3), "abc");
        assert_eq!(fit_width("", 0), "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_keeps_paragraph_breaks() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }
}
