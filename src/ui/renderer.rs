//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the state, then hand
//! it to the components. While the modal or the alert is up, the page is drawn
//! with a darkened copy of the theme and the overlays are drawn on top with
//! the regular one.
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::AppState;
//! use shelfscout::domain::Catalog;
//! use shelfscout::ui::{render, Theme};
//!
//! let state = AppState::new(Catalog::default(), false, Theme::default());
//! render(&state, 24, 80);
//! ```

use std::borrow::Cow;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let page_theme = if vm.dimmed {
        Cow::Owned(theme.dimmed())
    } else {
        Cow::Borrowed(theme)
    };

    components::render_page(vm, &page_theme, cols, rows);
    components::render_overlays(vm, theme, cols, rows);
}
