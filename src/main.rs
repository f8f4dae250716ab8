//! Zellij plugin entry point.
//!
//! Thin shim between the Zellij host and the library: host events become
//! [`shelfscout::Event`]s, and the [`Action`]s returned by the handler become
//! host calls (`web_request`, `set_timeout`, `hide_self`).

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use shelfscout::app::RequestTag;
use shelfscout::client::HttpReply;
use shelfscout::{handle_event, Action, Config, Event, Focus};

/// Spinner frame interval in seconds.
const SPINNER_INTERVAL: f64 = 0.1;

register_plugin!(State);

struct State {
    app: shelfscout::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: shelfscout::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        shelfscout::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");
        self.app = shelfscout::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

        let Some(our_event) = self.map_event(event) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render = should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        shelfscout::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_event(&self, event: zellij_tile::prelude::Event) -> Option<Event> {
        match event {
            zellij_tile::prelude::Event::Key(key) => self.map_key_event(&key),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                let Some(tag) = RequestTag::from_context(&context) else {
                    tracing::debug!(status = status, "ignoring untagged web request result");
                    return None;
                };
                Some(Event::RequestSettled {
                    tag,
                    reply: HttpReply::new(status, body),
                })
            }
            zellij_tile::prelude::Event::Timer(_) => Some(Event::Tick),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Some(Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            }),
            _ => None,
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        let on_results = self.app.focus == Focus::Results;
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrevious,
            BareKey::Tab => Event::FocusNext,
            BareKey::Enter => Event::Activate,
            BareKey::Esc => Event::Dismiss,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if on_results => Event::KeyDown,
            BareKey::Char('k') if on_results => Event::KeyUp,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn execute_action(action: &Action) {
        tracing::debug!(action = ?action, "executing action");
        match action {
            Action::CloseFocus => hide_self(),
            Action::Fetch { url, tag } => web_request(
                url,
                HttpVerb::Get,
                BTreeMap::new(),
                Vec::new(),
                tag.to_context(),
            ),
            Action::ScheduleTick => set_timeout(SPINNER_INTERVAL),
        }
    }
}
