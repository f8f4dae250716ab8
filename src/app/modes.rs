//! Focus state for keyboard input.
//!
//! The page has three focusable regions. Overlays (the description modal and
//! the blocking alert) are not focus targets; while one is present it takes
//! every key and focus stays where it was.
//!
//! ```rust
//! use shelfscout::app::Focus;
//!
//! assert_eq!(Focus::Input.next(true), Focus::SearchButton);
//! assert_eq!(Focus::SearchButton.next(false), Focus::Input);
//! ```

/// Which control receives `Enter` and typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The subject query field. Characters edit the query, `Enter` searches.
    Input,

    /// The `[ Search ]` control. `Enter` searches.
    SearchButton,

    /// The result cards. Arrows move the selection, `Enter` opens the
    /// selected card's description.
    Results,
}

impl Focus {
    /// Next focus target; `Results` is skipped when there are no cards.
    #[must_use]
    pub const fn next(self, has_cards: bool) -> Self {
        match self {
            Self::Input => Self::SearchButton,
            Self::SearchButton if has_cards => Self::Results,
            Self::SearchButton | Self::Results => Self::Input,
        }
    }

    /// Previous focus target; `Results` is skipped when there are no cards.
    #[must_use]
    pub const fn previous(self, has_cards: bool) -> Self {
        match self {
            Self::Input if has_cards => Self::Results,
            Self::Input | Self::Results => Self::SearchButton,
            Self::SearchButton => Self::Input,
        }
    }
}
