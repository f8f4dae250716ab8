//! Composable UI component renderers.
//!
//! Each component draws one region of the page at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`chrome`]: Header, separators, and keybinding footer
//! - [`search`]: Query field and `[ Search ]` control
//! - [`status`]: Spinner, banner, and title tooltip lines
//! - [`cards`]: Result cards
//! - [`empty`]: Prompt heading shown before a search
//! - [`overlay`]: Description modal and blocking alert
//!
//! # Layout
//!
//! ```text
//! row 1          [blank]
//! row 2          [Header]
//! row 3          [Border]
//! rows 4-6       [Query field][Search]
//! row 7          [Spinner | Banner]
//! row 8          [Tooltip]
//! row 9          [blank]
//! rows 10..      [Cards | Prompt]
//! row rows-1     [Border]
//! row rows       [Footer]
//! ```

mod cards;
mod chrome;
mod empty;
mod overlay;
mod search;
mod status;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// Rows taken by one card, including the gap below it.
pub const CARD_HEIGHT: usize = 6;

/// Rows of the page that are not available to cards.
pub const CHROME_ROWS: usize = 11;

const FIRST_CARD_ROW: usize = 10;

/// Draws the page: everything except the overlays.
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = chrome::render_header(current_row, &vm.header, theme, cols);
    current_row = chrome::render_border(current_row, &theme.colors.border, cols);
    current_row = search::render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = status::render_status(current_row, vm.spinner.as_ref(), vm.banner.as_ref(), theme, cols);
    status::render_tooltip(current_row, vm.tooltip.as_deref(), theme, cols);

    match &vm.body {
        BodyView::Prompt(empty) => empty::render_prompt(FIRST_CARD_ROW + 1, empty, theme, cols),
        BodyView::Cards(views) => {
            cards::render_cards(FIRST_CARD_ROW, views, theme, cols);
        }
    }

    let footer_row = rows.max(CHROME_ROWS);
    chrome::render_border(footer_row - 1, &theme.colors.border, cols);
    chrome::render_footer(footer_row, &vm.footer, theme, cols);
}

/// Draws the modal and then the alert, so the alert ends up on top.
pub fn render_overlays(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    if let Some(modal) = &vm.modal {
        overlay::render_modal(modal, theme, cols, rows);
    }
    if let Some(alert) = &vm.alert {
        overlay::render_alert(alert, theme, cols, rows);
    }
}
