//! Query field and search control.

use crate::ui::helpers::{fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on both sides of the bar.
const SEARCH_BOX_MARGIN: usize = 4;

const BUTTON_LABEL: &str = " Search ";

/// Draws the bordered query field with the `[ Search ]` control to its right.
///
/// Takes three rows. The focused control is drawn in the focus color, and the
/// field shows a cursor while it has focus.
///
/// ```text
/// ┌──────────────────────────────────┐ ┌────────┐
/// │ Subject: science▏                │ │ Search │
/// └──────────────────────────────────┘ └────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let button_width = BUTTON_LABEL.chars().count() + 2;
    let field_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + button_width + 1);
    let inner_width = field_width.saturating_sub(2);

    let field_color = if search.input_focused {
        &theme.colors.focus_fg
    } else {
        &theme.colors.search_bar_border
    };
    let button_color = if search.button_focused {
        &theme.colors.focus_fg
    } else {
        &theme.colors.search_bar_border
    };

    let cursor = if search.input_focused { "▏" } else { "" };
    let text = fit_width(&format!(" Subject: {}{cursor}", search.query), inner_width);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let button_rule = "─".repeat(BUTTON_LABEL.chars().count());

    position_cursor(row, 1);
    print!("{margin}{}┌{}┐ ", Theme::fg(field_color), "─".repeat(inner_width));
    print!("{}┌{button_rule}┐{}", Theme::fg(button_color), Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{}│{}", Theme::fg(field_color), Theme::fg(&theme.colors.text_normal));
    print!("{text}{}│ ", Theme::fg(field_color));
    print!("{}│", Theme::fg(button_color));
    if search.button_focused {
        print!(
            "{}{}{BUTTON_LABEL}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        );
        print!("{}{}", Theme::reset(), Theme::fg(button_color));
    } else {
        print!("{}{BUTTON_LABEL}{}", Theme::fg(&theme.colors.text_normal), Theme::fg(button_color));
    }
    print!("│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{}└{}┘ ", Theme::fg(field_color), "─".repeat(inner_width));
    print!("{}└{button_rule}┘{}", Theme::fg(button_color), Theme::reset());

    row + 3
}
