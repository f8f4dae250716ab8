//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the Zellij host itself. It returns a
//! `Vec<Action>` and the shim in `main.rs` turns each one into a host call,
//! in order.
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::{Action, RequestTag, RequestToken};
//!
//! let action = Action::Fetch {
//!     url: "https://openlibrary.org/subjects/science.json?limit=20".to_string(),
//!     tag: RequestTag::Search { token: RequestToken::new(1) },
//! };
//! assert!(matches!(action, Action::Fetch { .. }));
//! ```

use super::requests::RequestTag;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP `GET`; the answer arrives as a `WebRequestResult`
    /// carrying `tag` in its context.
    Fetch {
        /// Absolute request URL.
        url: String,
        /// Correlation tag echoed back with the result.
        tag: RequestTag,
    },

    /// Arms a timer that delivers the next spinner tick.
    ScheduleTick,
}
