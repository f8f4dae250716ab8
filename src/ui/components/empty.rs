//! Prompt heading for the results area.

use crate::ui::helpers::{center_offset, fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Draws the centered heading at `row` and its subtitle right below it.
pub fn render_prompt(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let centered = |text: &str| {
        let len = text.chars().count().min(cols);
        fit_width(&format!("{}{text}", " ".repeat(center_offset(len, cols))), cols)
    };

    position_cursor(row, 1);
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.empty_state_fg),
        centered(&empty.message),
        Theme::reset()
    );

    position_cursor(row + 1, 1);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        centered(&empty.subtitle),
        Theme::reset()
    );
}
