//! Terminal user interface.
//!
//! The UI layer turns application state into ANSI-styled output. It never
//! mutates state; everything it draws comes from a view model.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Page regions and overlays
//! - [`helpers`]: Cursor positioning, truncation, and text wrapping
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{BodyView, CardView, ModalView, UIViewModel};
