//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the page shows. The visual
//! part lives in [`UiState`] (spinner, banner, results area, overlays) and is
//! only changed through its methods; the renderer never mutates anything and
//! instead draws a [`UIViewModel`](crate::ui::viewmodel::UIViewModel)
//! computed from a state snapshot.
//!
//! # State Components
//!
//! - **Query**: the raw text of the query field
//! - **Focus**: which control receives keys
//! - **UI state**: spinner, banner, cards, selection, modal, alert
//! - **Request slots**: the search and detail requests whose answers still matter
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::AppState;
//! use shelfscout::domain::Catalog;
//! use shelfscout::ui::Theme;
//!
//! let state = AppState::new(Catalog::default(), false, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.banner.is_none());
//! ```

use super::modes::Focus;
use super::requests::{RequestSlot, RequestToken, TokenCounter};
use crate::domain::{Catalog, CoverImage, WorkDetail, WorkSummary};
use crate::ui::components::{CARD_HEIGHT, CHROME_ROWS};
use crate::ui::helpers::truncate_title;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlertInfo, BannerInfo, BodyView, CardView, EmptyState, FooterInfo, HeaderInfo, ModalView,
    SearchBarInfo, SpinnerInfo, UIViewModel,
};

/// Message shown for any failed search, and in the detail alert.
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Message shown for an empty query or a search without works.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Please try again.";

/// Message shown when the user refuses web access.
pub const PERMISSION_DENIED_MESSAGE: &str = "Web access was denied. Grant it and reopen the plugin.";

/// Heading of the results area before a search.
pub const PROMPT_HEADING: &str = "Find your next book";

const PROMPT_SUBTITLE: &str = "Type a subject such as \"science\" and press Enter";

const ERROR_ICON: &str = "\u{2716}";

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Banner variants below the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Error,
    NoResults,
    PermissionDenied,
}

impl Banner {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Error => ERROR_MESSAGE,
            Self::NoResults => NO_RESULTS_MESSAGE,
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE,
        }
    }
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub work: WorkSummary,
    pub cover: CoverImage,
}

/// What the results area holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsArea {
    /// The default heading.
    Prompt,
    /// Cards of the latest search, in catalog order. Empty after a failure.
    Cards(Vec<Card>),
}

/// Description overlay. The paragraph is resolved once, when it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub author: String,
    pub paragraph: String,
}

impl From<WorkDetail> for Modal {
    fn from(detail: WorkDetail) -> Self {
        Self {
            paragraph: detail.description.resolve(),
            title: detail.title,
            author: detail.author_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spinner {
    pub visible: bool,
    pub frame: usize,
    /// A timer is armed and will deliver a tick.
    pub ticking: bool,
}

/// Everything that is visible on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub spinner: Spinner,
    pub banner: Option<Banner>,
    pub results: ResultsArea,
    /// Index of the selected card.
    pub selected: usize,
    pub modal: Option<Modal>,
    pub alert: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            spinner: Spinner::default(),
            banner: None,
            results: ResultsArea::Prompt,
            selected: 0,
            modal: None,
            alert: None,
        }
    }
}

impl UiState {
    pub fn show_spinner(&mut self) {
        self.spinner.visible = true;
    }

    pub fn hide_spinner(&mut self) {
        self.spinner.visible = false;
        self.spinner.frame = 0;
    }

    pub fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    pub fn hide_banner(&mut self) {
        self.banner = None;
    }

    /// Removes every card and leaves an empty results area.
    pub fn clear_results(&mut self) {
        self.results = ResultsArea::Cards(Vec::new());
        self.selected = 0;
    }

    /// Back to the initial heading with no banner.
    pub fn reset_to_prompt(&mut self) {
        self.banner = None;
        self.results = ResultsArea::Prompt;
        self.selected = 0;
    }

    /// Appends one card after the existing ones.
    pub fn append_card(&mut self, card: Card) {
        match &mut self.results {
            ResultsArea::Cards(cards) => cards.push(card),
            ResultsArea::Prompt => self.results = ResultsArea::Cards(vec![card]),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.results {
            ResultsArea::Cards(cards) => cards,
            ResultsArea::Prompt => &[],
        }
    }

    fn cards_mut(&mut self) -> &mut [Card] {
        match &mut self.results {
            ResultsArea::Cards(cards) => cards,
            ResultsArea::Prompt => &mut [],
        }
    }

    /// Swaps the cover of card `index` for the default asset.
    ///
    /// Returns `true` when the card existed and had a remote cover.
    pub fn fall_back_cover(&mut self, index: usize, fallback: CoverImage) -> bool {
        match self.cards_mut().get_mut(index) {
            Some(card) if !card.cover.is_fallback() => {
                card.cover = fallback;
                true
            }
            _ => false,
        }
    }

    /// Opens the description overlay, replacing any open one.
    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Whether the page behind is darkened and scroll-locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.modal.is_some() || self.alert.is_some()
    }
}

/// Card title and author kept while its detail request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDetail {
    pub token: RequestToken,
    pub title: String,
    pub author: String,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,

    /// Whether remote covers are probed and replaced on failure.
    pub verify_covers: bool,

    pub theme: Theme,

    /// Raw text of the query field.
    pub query: String,

    pub focus: Focus,

    pub ui: UiState,

    pub search_slot: RequestSlot,
    pub detail_slot: RequestSlot,
    pub pending_detail: Option<PendingDetail>,

    tokens: TokenCounter,
}

impl AppState {
    /// Creates the initial page: empty query, prompt heading, focus on the field.
    #[must_use]
    pub fn new(catalog: Catalog, verify_covers: bool, theme: Theme) -> Self {
        Self {
            catalog,
            verify_covers,
            theme,
            query: String::new(),
            focus: Focus::Input,
            ui: UiState::default(),
            search_slot: RequestSlot::default(),
            detail_slot: RequestSlot::default(),
            pending_detail: None,
            tokens: TokenCounter::default(),
        }
    }

    /// Takes a fresh request token.
    pub fn next_token(&mut self) -> RequestToken {
        self.tokens.next()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.ui.cards().is_empty()
    }

    /// Moves the selection down, wrapping to the first card.
    pub fn move_selection_down(&mut self) {
        let len = self.ui.cards().len();
        if len == 0 {
            return;
        }
        self.ui.selected = (self.ui.selected + 1) % len;
    }

    /// Moves the selection up, wrapping to the last card.
    pub fn move_selection_up(&mut self) {
        let len = self.ui.cards().len();
        if len == 0 {
            return;
        }
        self.ui.selected = if self.ui.selected == 0 {
            len - 1
        } else {
            self.ui.selected - 1
        };
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.ui.cards().get(self.ui.selected)
    }

    /// Advances the spinner animation. Returns `false` once the spinner is
    /// hidden, which also disarms the timer.
    pub fn tick_spinner(&mut self) -> bool {
        if self.ui.spinner.visible {
            self.ui.spinner.frame = (self.ui.spinner.frame + 1) % SPINNER_FRAMES.len();
            true
        } else {
            self.ui.spinner.ticking = false;
            false
        }
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// Cards are windowed around the selection: as many as fit below the
    /// chrome, with the selected card kept near the middle.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = rows).entered();

        let (body, tooltip) = match &self.ui.results {
            ResultsArea::Prompt => (
                BodyView::Prompt(EmptyState {
                    message: PROMPT_HEADING.to_string(),
                    subtitle: PROMPT_SUBTITLE.to_string(),
                }),
                None,
            ),
            ResultsArea::Cards(cards) => self.compute_cards(cards, rows),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                input_focused: self.focus == Focus::Input,
                button_focused: self.focus == Focus::SearchButton,
            },
            spinner: self.ui.spinner.visible.then(|| SpinnerInfo {
                frame: SPINNER_FRAMES[self.ui.spinner.frame % SPINNER_FRAMES.len()],
                label: "Searching the catalog...".to_string(),
            }),
            banner: self.ui.banner.map(|banner| BannerInfo {
                icon: ERROR_ICON.to_string(),
                message: banner.message().to_string(),
            }),
            tooltip,
            body,
            modal: self.ui.modal.as_ref().map(|modal| ModalView {
                title: modal.title.clone(),
                author: modal.author.clone(),
                paragraph: modal.paragraph.clone(),
            }),
            alert: self.ui.alert.as_ref().map(|message| AlertInfo {
                message: message.clone(),
            }),
            footer: self.compute_footer(),
            dimmed: self.ui.is_locked(),
        }
    }

    fn compute_cards(&self, cards: &[Card], rows: usize) -> (BodyView, Option<String>) {
        if cards.is_empty() {
            return (BodyView::Cards(vec![]), None);
        }

        let per_page = (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);
        let selected = self.ui.selected.min(cards.len() - 1);

        let mut visible_start = selected.saturating_sub(per_page / 2);
        let visible_end = (visible_start + per_page).min(cards.len());
        if visible_end - visible_start < per_page && cards.len() >= per_page {
            visible_start = visible_end.saturating_sub(per_page);
        }

        let results_focused = self.focus == Focus::Results;
        let views = cards[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, card)| CardView {
                title: truncate_title(&card.work.title),
                author: card.work.author_name.clone(),
                cover: card.cover.source().to_string(),
                is_selected: results_focused && visible_start + relative_idx == selected,
            })
            .collect();

        let tooltip = cards
            .get(selected)
            .filter(|card| results_focused && truncate_title(&card.work.title) != card.work.title)
            .map(|card| card.work.title.clone());

        (BodyView::Cards(views), tooltip)
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.ui.cards().len();
        let title = if count == 0 {
            " Book Search ".to_string()
        } else {
            format!(" Book Search ({count}) ")
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.ui.alert.is_some() {
            "Enter/Esc: dismiss"
        } else if self.ui.modal.is_some() {
            "Enter/Esc/q: close"
        } else {
            match self.focus {
                Focus::Input => "Enter: search  Tab: next  Backspace: delete  Esc: quit",
                Focus::SearchButton => "Enter: search  Tab: next  Esc: quit",
                Focus::Results => "j/k or Up/Down: select  Enter: description  Tab: next  Esc: quit",
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
