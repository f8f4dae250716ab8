//! shelfscout: a Zellij plugin for browsing the Open Library catalog by subject.
//!
//! Type a subject, press `Enter`, and the plugin lists up to twenty works with
//! their author and cover. Selecting a card and pressing `Enter` fetches the
//! work's description and shows it in a modal.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key/timer/web events → Event                     │
//! │  - Action → web_request / set_timeout / hide_self   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and request correlation           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Client Layer (client/)│
//! │ - Cards, modal, alert │   │ - Search replies      │
//! │ - Theming             │   │ - Detail replies      │
//! └───────────────────────┘   └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Queries, catalog URLs, work records (domain/)    │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP/JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shelfscout.wasm" {
//!         theme "catppuccin-mocha"
//!         verify_covers "true"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use shelfscout::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "science".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Activate)?;
//! assert!(matches!(&actions[0], Action::Fetch { url, .. } if url.ends_with("science.json?limit=20")));
//! # Ok::<(), shelfscout::ShelfError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Focus};
pub use domain::{Catalog, Result, ShelfError};
pub use ui::Theme;

use std::collections::BTreeMap;

use domain::catalog::{DEFAULT_CATALOG_HOST, DEFAULT_COVER_HOST, DEFAULT_COVER_PATH};
use infrastructure::expand_tilde;

/// Plugin configuration parsed from the KDL plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/shelfscout.wasm" {
///     catalog_host "https://openlibrary.org"
///     cover_host "https://covers.openlibrary.org"
///     default_cover "Img/default-image.jpg"
///     verify_covers "false"
///     theme "catppuccin-latte"
///     theme_file "~/.config/shelfscout/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the subject and work endpoints.
    pub catalog_host: String,

    /// Base URL of the cover image service.
    pub cover_host: String,

    /// Cover shown for works without a cover id or whose cover failed to load.
    pub default_cover: String,

    /// Probe each remote cover and fall back to `default_cover` on failure.
    pub verify_covers: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme, with `~` already expanded.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_host: DEFAULT_CATALOG_HOST.to_string(),
            cover_host: DEFAULT_COVER_HOST.to_string(),
            default_cover: DEFAULT_COVER_PATH.to_string(),
            verify_covers: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Missing or blank values fall back to the defaults. An unparseable
    /// `verify_covers` is logged and treated as `true`.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shelfscout::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("verify_covers".to_string(), "off".to_string());
    /// map.insert("theme_file".to_string(), "~/dusk.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(!config.verify_covers);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/dusk.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let verify_covers = value("verify_covers").map_or(Ok(true), |raw| parse_flag(&raw));
        let verify_covers = verify_covers.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring verify_covers, probing covers");
            true
        });

        Self {
            catalog_host: value("catalog_host").unwrap_or_else(|| DEFAULT_CATALOG_HOST.to_string()),
            cover_host: value("cover_host").unwrap_or_else(|| DEFAULT_COVER_HOST.to_string()),
            default_cover: value("default_cover").unwrap_or_else(|| DEFAULT_COVER_PATH.to_string()),
            verify_covers,
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| expand_tilde(&path)),
            trace_level: value("trace_level"),
        }
    }

    /// Endpoints described by this configuration.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.catalog_host, &self.cover_host, &self.default_cover)
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// Load failures are logged and fall through to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(ShelfError::Config(format!(
            "verify_covers expects true or false, got {other:?}"
        ))),
    }
}

/// Builds the initial application state from `config`.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog_host = %config.catalog_host, verify_covers = config.verify_covers, "initializing shelfscout plugin");
    AppState::new(config.catalog(), config.verify_covers, config.theme())
}
