//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready text only: truncation, windowing and
//! overlay selection have already happened.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,

    /// Loading indicator, shown while a search is in flight.
    pub spinner: Option<SpinnerInfo>,

    /// Error or no-results message below the search bar.
    pub banner: Option<BannerInfo>,

    /// Full title of the selected card when its title is truncated.
    pub tooltip: Option<String>,

    pub body: BodyView,

    /// Description overlay. Present at most once.
    pub modal: Option<ModalView>,

    /// Blocking alert, drawn above everything else.
    pub alert: Option<AlertInfo>,

    pub footer: FooterInfo,

    /// Whether the page behind an overlay is drawn darkened.
    pub dimmed: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current focus and overlay.
    pub keybindings: String,
}

/// Query field and search control.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub input_focused: bool,
    pub button_focused: bool,
}

#[derive(Debug, Clone)]
pub struct SpinnerInfo {
    pub frame: char,
    pub label: String,
}

/// Message banner with a leading icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    pub icon: String,
    pub message: String,
}

/// Contents of the results area.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Default heading shown before any search or after clearing the query.
    Prompt(EmptyState),
    /// The visible window of result cards. May be empty.
    Cards(Vec<CardView>),
}

/// Centered heading for the results area.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Title, truncated to 35 characters plus `...` when longer.
    pub title: String,
    pub author: String,
    /// Cover image source (remote URL or the bundled default path).
    pub cover: String,
    pub is_selected: bool,
}

/// Description overlay content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub author: String,
    pub paragraph: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertInfo {
    pub message: String,
}
