//! Result cards.
//!
//! A card is a rounded box with the title, the author, the cover source, and
//! a `[ Description ]` control. The selected card gets the selection colors on
//! its text rows and a focus colored border.

use super::CARD_HEIGHT;
use crate::ui::helpers::{fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

const CARD_MARGIN: usize = 4;

const DESCRIPTION_CONTROL: &str = "[ Description ] ";

/// Draws `cards` top to bottom starting at `row` and returns the next free row.
pub fn render_cards(row: usize, cards: &[CardView], theme: &Theme, cols: usize) -> usize {
    cards
        .iter()
        .fold(row, |current_row, card| render_card(current_row, card, theme, cols))
}

fn render_card(row: usize, card: &CardView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(CARD_MARGIN * 2).max(4);
    let inner_width = width - 2;
    let margin = " ".repeat(CARD_MARGIN);

    let border = if card.is_selected {
        &theme.colors.focus_fg
    } else {
        &theme.colors.card_border
    };
    let (text_style, title_style, author_style) = if card.is_selected {
        let selected = format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        );
        (selected.clone(), format!("{}{selected}", Theme::bold()), selected)
    } else {
        (
            Theme::fg(&theme.colors.text_dim),
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg)),
            Theme::fg(&theme.colors.author_fg),
        )
    };

    let control_width = DESCRIPTION_CONTROL.chars().count().min(inner_width);
    let cover = fit_width(&format!(" cover: {}", card.cover), inner_width - control_width);
    let lines = [
        (title_style, format!(" {}", card.title)),
        (author_style, format!(" by {}", card.author)),
        (text_style, format!("{cover}{DESCRIPTION_CONTROL}")),
    ];

    position_cursor(row, 1);
    print!("{margin}{}╭{}╮{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    for (offset, (style, text)) in lines.iter().enumerate() {
        position_cursor(row + 1 + offset, 1);
        print!("{margin}{}│{}", Theme::fg(border), Theme::reset());
        print!("{style}{}{}", fit_width(text, inner_width), Theme::reset());
        print!("{}│{}", Theme::fg(border), Theme::reset());
    }

    position_cursor(row + 4, 1);
    print!("{margin}{}╰{}╯{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + CARD_HEIGHT
}
