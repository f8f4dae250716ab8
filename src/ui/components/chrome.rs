//! Header, separator lines, and footer.

use crate::ui::helpers::{center_offset, fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, HeaderInfo};

/// Draws the centered, bold title bar and returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count().min(cols);
    let line = format!("{}{}", " ".repeat(center_offset(title_len, cols)), header.title);

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}", fit_width(&line, cols), Theme::reset());
    row + 1
}

/// Draws a full-width horizontal rule.
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Draws the keybinding hints, centered and clipped to the pane width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hint_len = footer.keybindings.chars().count().min(cols);
    let line = format!(
        "{}{}",
        " ".repeat(center_offset(hint_len, cols)),
        footer.keybindings
    );

    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        fit_width(&line, cols),
        Theme::reset()
    );
    row + 1
}
