//! Event handling and state transition logic.
//!
//! [`handle_event`] is the UI controller. It receives events that the plugin
//! shim translated from Zellij (keys, settled web requests, timer ticks),
//! mutates [`AppState`], and returns whether to re-render plus the actions the
//! shim must execute.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `Activate`, `Dismiss`, `FocusNext`,
//!   `FocusPrevious`, `KeyDown`, `KeyUp`
//! - **Network**: `RequestSettled` with the request's tag and reply
//! - **System**: `Tick`, `PermissionsResult`
//!
//! While the modal or the alert is present, input other than closing it is
//! ignored. Network and system events are always processed.
//!
//! # Example
//!
//! ```rust
//! use shelfscout::app::{handle_event, Action, AppState, Event};
//! use shelfscout::domain::Catalog;
//! use shelfscout::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::default(), false, Theme::default());
//! for c in "science".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Activate)?;
//! assert!(matches!(actions[0], Action::Fetch { .. }));
//! # Ok::<(), shelfscout::ShelfError>(())
//! ```

use super::modes::Focus;
use super::requests::{RequestTag, RequestToken};
use super::state::{Banner, Card, PendingDetail, ERROR_MESSAGE};
use crate::app::{Action, AppState};
use crate::client::{detail, search, HttpReply, SearchOutcome};
use crate::domain::error::Result;
use crate::domain::{Catalog, SearchQuery};

/// Events triggered by user input, settled requests, or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Types a character into the query field.
    Char(char),
    /// Deletes the last character of the query.
    Backspace,
    /// `Enter`: searches, opens a description, or closes an overlay,
    /// depending on focus and overlays.
    Activate,
    /// `Esc`: closes an overlay, or the plugin when none is open.
    Dismiss,
    FocusNext,
    FocusPrevious,
    /// Selects the next card.
    KeyDown,
    /// Selects the previous card.
    KeyUp,

    /// A `web_request` issued by this plugin settled.
    RequestSettled {
        tag: RequestTag,
        reply: HttpReply,
    },

    /// Spinner timer fired.
    Tick,

    /// The user answered the permission prompt.
    PermissionsResult {
        granted: bool,
    },
}

impl Event {
    const fn is_input(&self) -> bool {
        !matches!(
            self,
            Self::RequestSettled { .. } | Self::Tick | Self::PermissionsResult { .. }
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`; actions must be executed in order.
///
/// # Errors
///
/// Reserved for failures that cannot be shown on the page; every catalog
/// failure is routed to the banner or the alert instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if event.is_input() {
        if state.ui.alert.is_some() {
            return Ok(handle_alert_input(state, event));
        }
        if state.ui.modal.is_some() {
            return Ok(handle_modal_input(state, event));
        }
    }

    match event {
        Event::Char(c) => {
            state.focus = Focus::Input;
            state.query.push(*c);
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != Focus::Input {
                return Ok((false, vec![]));
            }
            state.query.pop();
            if state.query.is_empty() {
                tracing::debug!("query cleared, resetting results");
                state.ui.reset_to_prompt();
            }
            Ok((true, vec![]))
        }
        Event::Activate => match state.focus {
            Focus::Input | Focus::SearchButton => Ok((true, begin_search(state))),
            Focus::Results => Ok((true, request_description(state))),
        },
        Event::Dismiss => Ok((false, vec![Action::CloseFocus])),
        Event::FocusNext => {
            state.focus = state.focus.next(state.has_cards());
            Ok((true, vec![]))
        }
        Event::FocusPrevious => {
            state.focus = state.focus.previous(state.has_cards());
            Ok((true, vec![]))
        }
        Event::KeyDown | Event::KeyUp => {
            if !state.has_cards() {
                return Ok((false, vec![]));
            }
            state.focus = Focus::Results;
            if *event == Event::KeyDown {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::RequestSettled { tag, reply } => Ok(handle_settled(state, tag, reply)),
        Event::Tick => {
            if state.tick_spinner() {
                Ok((true, vec![Action::ScheduleTick]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::PermissionsResult { granted } => {
            if *granted {
                Ok((false, vec![]))
            } else {
                tracing::warn!("web access denied");
                state.ui.show_banner(Banner::PermissionDenied);
                Ok((true, vec![]))
            }
        }
    }
}

fn handle_alert_input(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    if matches!(event, Event::Activate | Event::Dismiss) {
        state.ui.alert = None;
        (true, vec![])
    } else {
        (false, vec![])
    }
}

fn handle_modal_input(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    if matches!(event, Event::Activate | Event::Dismiss | Event::Char('q')) {
        tracing::debug!("closing description modal");
        state.ui.close_modal();
        (true, vec![])
    } else {
        (false, vec![])
    }
}

/// Clears the page and starts a search for the current query.
///
/// Any description still in flight belongs to the old cards and is dropped.
fn begin_search(state: &mut AppState) -> Vec<Action> {
    state.ui.clear_results();
    state.ui.hide_banner();
    state.detail_slot.invalidate();
    state.pending_detail = None;

    let Some(query) = SearchQuery::parse(&state.query) else {
        tracing::debug!("empty query, not searching");
        state.search_slot.invalidate();
        state.ui.hide_spinner();
        state.ui.show_banner(Banner::NoResults);
        return vec![];
    };

    let token = state.next_token();
    state.search_slot.issue(token);
    let url = state.catalog.search_url(&query);
    tracing::debug!(query = %query, token = token.value(), url = %url, "starting search");

    state.ui.show_spinner();
    let mut actions = vec![Action::Fetch {
        url,
        tag: RequestTag::Search { token },
    }];
    if !state.ui.spinner.ticking {
        state.ui.spinner.ticking = true;
        actions.push(Action::ScheduleTick);
    }
    actions
}

/// Requests the detail record of the selected card.
fn request_description(state: &mut AppState) -> Vec<Action> {
    let Some(card) = state.selected_card() else {
        return vec![];
    };
    let title = card.work.title.clone();
    let author = card.work.author_name.clone();
    let key = card.work.detail_key.clone();

    if key.is_empty() {
        tracing::debug!(title = %title, "work has no detail key");
        state.ui.alert = Some(ERROR_MESSAGE.to_string());
        return vec![];
    }

    let token = state.next_token();
    state.detail_slot.issue(token);
    state.pending_detail = Some(PendingDetail {
        token,
        title,
        author,
    });

    let url = state.catalog.detail_url(&key);
    tracing::debug!(url = %url, token = token.value(), "requesting description");
    vec![Action::Fetch {
        url,
        tag: RequestTag::Detail { token },
    }]
}

fn handle_settled(state: &mut AppState, tag: &RequestTag, reply: &HttpReply) -> (bool, Vec<Action>) {
    match *tag {
        RequestTag::Search { token } => {
            if !state.search_slot.accept(token) {
                tracing::debug!(token = token.value(), "discarding stale search response");
                return (false, vec![]);
            }
            state.ui.hide_spinner();
            let outcome = search::interpret(reply);
            (true, apply_search_outcome(state, token, outcome))
        }
        RequestTag::Detail { token } => {
            if !state.detail_slot.accept(token) {
                tracing::debug!(token = token.value(), "discarding stale detail response");
                return (false, vec![]);
            }
            let Some(pending) = state.pending_detail.take().filter(|p| p.token == token) else {
                return (false, vec![]);
            };
            match detail::interpret(reply, &pending.title, &pending.author) {
                Ok(work) => {
                    tracing::debug!(title = %work.title, "opening description modal");
                    state.ui.open_modal(work.into());
                }
                Err(e) => {
                    tracing::debug!(error = %e, "detail request failed");
                    state.ui.alert = Some(ERROR_MESSAGE.to_string());
                }
            }
            (true, vec![])
        }
        RequestTag::Cover { token, index } => {
            if !state.search_slot.is_latest(token) || reply.is_success() {
                return (false, vec![]);
            }
            tracing::debug!(index = index, status = reply.status, "cover failed to load");
            let fallback = state.catalog.fallback_cover();
            (state.ui.fall_back_cover(index, fallback), vec![])
        }
    }
}

fn apply_search_outcome(
    state: &mut AppState,
    token: RequestToken,
    outcome: SearchOutcome,
) -> Vec<Action> {
    match outcome {
        SearchOutcome::Works { works, empty_entry } => {
            tracing::debug!(work_count = works.len(), empty_entry = empty_entry, "rendering search results");
            let mut actions = vec![];
            for (index, work) in works.into_iter().enumerate() {
                let cover = state.catalog.cover(work.cover_id);
                if state.verify_covers {
                    if let Some(url) = Catalog::probe_url(&cover) {
                        actions.push(Action::Fetch {
                            url,
                            tag: RequestTag::Cover { token, index },
                        });
                    }
                }
                state.ui.append_card(Card { work, cover });
            }
            if empty_entry {
                state.ui.show_banner(Banner::NoResults);
            }
            actions
        }
        SearchOutcome::NoResults => {
            tracing::debug!("search returned no works");
            state.ui.clear_results();
            state.ui.show_banner(Banner::NoResults);
            vec![]
        }
        SearchOutcome::Failed(e) => {
            tracing::debug!(error = %e, "search failed");
            state.ui.clear_results();
            state.ui.show_banner(Banner::Error);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ResultsArea, NO_RESULTS_MESSAGE, PROMPT_HEADING};
    use crate::ui::viewmodel::BodyView;
    use crate::ui::Theme;

    const SCIENCE_PAYLOAD: &str = r#"{"works":[{"title":"A Brief History of Time","authors":[{"name":"Stephen Hawking"}],"cover_id":12345,"key":"/works/OL1W"}]}"#;

    fn new_state() -> AppState {
        AppState::new(Catalog::default(), false, Theme::default())
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn search(state: &mut AppState, text: &str) -> (RequestTag, String) {
        type_query(state, text);
        let (_, actions) = handle_event(state, &Event::Activate).unwrap();
        match actions.first() {
            Some(Action::Fetch { url, tag }) => (tag.clone(), url.clone()),
            other => panic!("expected a fetch, got {other:?}"),
        }
    }

    fn settle(state: &mut AppState, tag: &RequestTag, status: u16, body: &str) -> (bool, Vec<Action>) {
        let event = Event::RequestSettled {
            tag: tag.clone(),
            reply: HttpReply::new(status, body.as_bytes().to_vec()),
        };
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn science_query_renders_one_card() {
        let mut state = new_state();
        let (tag, url) = search(&mut state, "Science");
        assert_eq!(url, "https://openlibrary.org/subjects/science.json?limit=20");
        assert!(state.ui.spinner.visible);

        settle(&mut state, &tag, 200, SCIENCE_PAYLOAD);

        assert!(!state.ui.spinner.visible);
        let cards = state.ui.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].work.title, "A Brief History of Time");
        assert_eq!(cards[0].work.author_name, "Stephen Hawking");
        assert_eq!(cards[0].cover.source(), "https://covers.openlibrary.org/b/id/12345-M.jpg");
        assert_eq!(state.ui.banner, None);
    }

    #[test]
    fn empty_query_issues_no_request() {
        let mut state = new_state();
        type_query(&mut state, "   ");
        let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.ui.banner, Some(Banner::NoResults));
        assert!(state.ui.cards().is_empty());
        assert!(!state.ui.spinner.visible);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.banner.map(|b| b.message), Some(NO_RESULTS_MESSAGE.to_string()));
        assert!(matches!(vm.body, BodyView::Cards(ref c) if c.is_empty()));
    }

    #[test]
    fn search_button_triggers_search() {
        let mut state = new_state();
        type_query(&mut state, "history");
        handle_event(&mut state, &Event::FocusNext).unwrap();
        assert_eq!(state.focus, Focus::SearchButton);

        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(matches!(actions.first(), Some(Action::Fetch { tag: RequestTag::Search { .. }, .. })));
        assert_eq!(actions.last(), Some(&Action::ScheduleTick));
    }

    #[test]
    fn cards_follow_api_order() {
        let mut state = new_state();
        let (tag, _) = search(&mut state, "fantasy");
        let works: Vec<String> = (0..5)
            .map(|i| format!(r#"{{"title":"T{i}","authors":[{{"name":"A{i}"}}],"key":"/works/OL{i}W"}}"#))
            .collect();
        settle(&mut state, &tag, 200, &format!(r#"{{"works":[{}]}}"#, works.join(",")));

        let titles: Vec<_> = state.ui.cards().iter().map(|c| c.work.title.clone()).collect();
        assert_eq!(titles, ["T0", "T1", "T2", "T3", "T4"]);
    }

    #[test]
    fn empty_works_shows_no_results() {
        let mut state = new_state();
        let (tag, _) = search(&mut state, "zzzz");
        settle(&mut state, &tag, 200, r#"{"name":"zzzz","works":[]}"#);

        assert!(state.ui.cards().is_empty());
        assert_eq!(state.ui.banner, Some(Banner::NoResults));
        assert!(!state.ui.spinner.visible);
    }

    #[test]
    fn empty_sibling_entry_shows_no_results_with_cards() {
        let mut state = new_state();
        let (tag, _) = search(&mut state, "science");
        settle(
            &mut state,
            &tag,
            200,
            r#"{"subjects":[],"works":[{"title":"Lone","authors":[{"name":"A"}],"key":"/works/OL1W"}]}"#,
        );

        assert_eq!(state.ui.cards().len(), 1);
        assert_eq!(state.ui.banner, Some(Banner::NoResults));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.banner.map(|b| b.message), Some(NO_RESULTS_MESSAGE.to_string()));
        assert!(matches!(vm.body, BodyView::Cards(ref c) if c.len() == 1));
    }

    #[test]
    fn transport_failure_shows_error_banner() {
        let mut state = new_state();
        let (first, _) = search(&mut state, "science");
        settle(&mut state, &first, 200, SCIENCE_PAYLOAD);
        assert_eq!(state.ui.cards().len(), 1);

        handle_event(&mut state, &Event::Activate).unwrap();
        let RequestTag::Search { token } = first else { unreachable!() };
        let second = RequestTag::Search { token: RequestToken::new(token.value() + 1) };
        settle(&mut state, &second, 400, "connection refused");

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.banner.map(|b| b.message),
            Some("An error occurred. Please try again.".to_string())
        );
        assert!(state.ui.cards().is_empty());
        assert!(vm.spinner.is_none());
    }

    #[test]
    fn late_response_from_older_search_is_discarded() {
        let mut state = new_state();
        let (slow, _) = search(&mut state, "history");
        handle_event(&mut state, &Event::Backspace).unwrap();
        let (fast, _) = search(&mut state, "y");

        settle(&mut state, &fast, 200, SCIENCE_PAYLOAD);
        let (render, actions) = settle(
            &mut state,
            &slow,
            200,
            r#"{"works":[{"title":"Old","authors":[{"name":"X"}],"key":"/works/OL9W"}]}"#,
        );

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.ui.cards().len(), 1);
        assert_eq!(state.ui.cards()[0].work.title, "A Brief History of Time");
    }

    #[test]
    fn spinner_stays_until_latest_search_settles() {
        let mut state = new_state();
        let (first, _) = search(&mut state, "a");
        let (second, _) = search(&mut state, "b");

        settle(&mut state, &first, 200, SCIENCE_PAYLOAD);
        assert!(state.ui.spinner.visible);
        settle(&mut state, &second, 500, "");
        assert!(!state.ui.spinner.visible);
    }

    #[test]
    fn backspace_to_empty_resets_to_prompt() {
        let mut state = new_state();
        let (tag, _) = search(&mut state, "ab");
        settle(&mut state, &tag, 503, "");
        assert_eq!(state.ui.banner, Some(Banner::Error));

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.ui.banner, Some(Banner::Error), "query still has text");

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.ui.banner, None);
        assert_eq!(state.ui.results, ResultsArea::Prompt);
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, BodyView::Prompt(ref e) if e.message == PROMPT_HEADING));
    }

    fn open_detail(state: &mut AppState) -> RequestTag {
        let (tag, _) = search(state, "science");
        settle(state, &tag, 200, SCIENCE_PAYLOAD);
        handle_event(state, &Event::KeyDown).unwrap();
        assert_eq!(state.focus, Focus::Results);

        let (_, actions) = handle_event(state, &Event::Activate).unwrap();
        match actions.as_slice() {
            [Action::Fetch { url, tag }] => {
                assert_eq!(url, "https://openlibrary.org/works/OL1W.json");
                tag.clone()
            }
            other => panic!("expected one detail fetch, got {other:?}"),
        }
    }

    #[test]
    fn detail_text_description_opens_modal() {
        let mut state = new_state();
        let tag = open_detail(&mut state);
        settle(&mut state, &tag, 200, r#"{"description":"A great read"}"#);

        let vm = state.compute_viewmodel(24, 80);
        let modal = vm.modal.expect("modal open");
        assert_eq!(modal.title, "A Brief History of Time");
        assert_eq!(modal.author, "Stephen Hawking");
        assert_eq!(modal.paragraph, "A great read");
        assert!(vm.dimmed);
    }

    #[test]
    fn new_search_drops_description_in_flight() {
        let mut state = new_state();
        let (tag, _) = search(&mut state, "science");
        settle(
            &mut state,
            &tag,
            200,
            r#"{"works":[{"title":"Old Book","authors":[{"name":"A"}],"key":"/works/OL7W"}]}"#,
        );
        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        let Some(Action::Fetch { tag: detail, .. }) = actions.first().cloned() else {
            panic!("expected a detail fetch");
        };

        handle_event(&mut state, &Event::Char('x')).unwrap();
        handle_event(&mut state, &Event::Activate).unwrap();
        assert!(state.pending_detail.is_none());

        let (render, _) = settle(&mut state, &detail, 200, r#"{"description":"stale"}"#);
        assert!(!render);
        assert!(state.ui.modal.is_none());
        assert!(state.ui.alert.is_none());
    }

    #[test]
    fn new_results_start_at_first_card() {
        let mut state = new_state();
        let (first, _) = search(&mut state, "fantasy");
        let works: Vec<String> = (0..3)
            .map(|i| format!(r#"{{"title":"T{i}","authors":[{{"name":"A{i}"}}],"key":"/works/OL{i}W"}}"#))
            .collect();
        let body = format!(r#"{{"works":[{}]}}"#, works.join(","));
        settle(&mut state, &first, 200, &body);
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.ui.selected, 2);
        let BodyView::Cards(scrolled) = state.compute_viewmodel(24, 80).body else {
            panic!("expected cards");
        };
        assert_eq!(scrolled[0].title, "T1");

        handle_event(&mut state, &Event::Char('s')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        let Some(Action::Fetch { tag: second, .. }) = actions.first().cloned() else {
            panic!("expected a search fetch");
        };
        settle(&mut state, &second, 200, &body);

        let vm = state.compute_viewmodel(24, 80);
        let BodyView::Cards(cards) = vm.body else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].title, "T0");
        assert_eq!(state.ui.selected, 0);
    }

    #[test]
    fn detail_without_description_says_so() {
        let mut state = new_state();
        let tag = open_detail(&mut state);
        settle(&mut state, &tag, 200, r#"{"title":"A Brief History of Time"}"#);
        assert_eq!(
            state.ui.modal.as_ref().map(|m| m.paragraph.as_str()),
            Some("No description available")
        );
    }

    #[test]
    fn detail_failure_raises_alert_without_modal() {
        let mut state = new_state();
        let tag = open_detail(&mut state);
        let before = state.ui.cards().to_vec();
        settle(&mut state, &tag, 200, "not json");

        assert_eq!(state.ui.alert.as_deref(), Some(ERROR_MESSAGE));
        assert!(state.ui.modal.is_none());
        assert_eq!(state.ui.cards(), before.as_slice());

        // Only dismissal gets through while the alert is up.
        let (render, _) = handle_event(&mut state, &Event::KeyUp).unwrap();
        assert!(!render);
        handle_event(&mut state, &Event::Dismiss).unwrap();
        assert!(state.ui.alert.is_none());
    }

    #[test]
    fn modal_locks_navigation_and_closes() {
        let mut state = new_state();
        let tag = open_detail(&mut state);
        settle(&mut state, &tag, 200, r#"{"description":{"type":"/type/text","value":"Typed"}}"#);
        assert_eq!(state.ui.modal.as_ref().map(|m| m.paragraph.as_str()), Some("Typed"));

        let (render, actions) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::Dismiss).unwrap();
        assert!(actions.is_empty(), "Esc closes the modal, not the plugin");
        assert!(state.ui.modal.is_none());
        assert!(!state.compute_viewmodel(24, 80).dimmed);
    }

    #[test]
    fn failed_cover_falls_back_silently() {
        let mut state = AppState::new(Catalog::default(), true, Theme::default());
        let (tag, _) = search(&mut state, "science");
        let (_, actions) = settle(&mut state, &tag, 200, SCIENCE_PAYLOAD);

        let check = match actions.as_slice() {
            [Action::Fetch { url, tag }] => {
                assert!(url.ends_with("12345-M.jpg?default=false"));
                tag.clone()
            }
            other => panic!("expected one cover check, got {other:?}"),
        };

        let (render, _) = settle(&mut state, &check, 404, "");
        assert!(render);
        assert!(state.ui.cards()[0].cover.is_fallback());
        assert_eq!(state.ui.banner, None);
    }

    #[test]
    fn cover_check_of_older_search_is_ignored() {
        let mut state = AppState::new(Catalog::default(), true, Theme::default());
        let (tag, _) = search(&mut state, "science");
        let (_, actions) = settle(&mut state, &tag, 200, SCIENCE_PAYLOAD);
        let Some(Action::Fetch { tag: check, .. }) = actions.first().cloned() else {
            panic!("expected a cover check");
        };

        search(&mut state, "s");
        let (render, _) = settle(&mut state, &check, 404, "");
        assert!(!render);
    }

    #[test]
    fn denied_permission_shows_banner() {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert_eq!(state.ui.banner, Some(Banner::PermissionDenied));
    }

    #[test]
    fn dismiss_without_overlay_closes_plugin() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Dismiss).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
