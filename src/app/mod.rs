//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the domain and
//! client layers. It owns the page state and decides what every key press and
//! settled request does to it.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer  → Event → handle_event → State Mutations → Actions → Host calls
//!                            ↑                                         ↓
//!                            └─────────── WebRequestResult ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Keyboard focus
//! - [`requests`]: Request tags and the latest-request-wins slots
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::{handle_event, AppState, Event};
//! use shelfscout::domain::Catalog;
//! use shelfscout::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::default(), true, Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(should_render);
//! # Ok::<(), shelfscout::ShelfError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod requests;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use requests::{RequestSlot, RequestTag, RequestToken};
pub use state::AppState;
