//! Event handling and state transition logic.
//!
//! This module implements the reducer that processes input events, mutates
//! the browsing session, and returns the render commands the host must
//! execute. It is the only place session state changes.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The host translates raw UI input into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`BrowsingSession`] methods
//! 4. Render commands are collected and returned for execution
//!
//! Every transition runs synchronously to completion, so each event is atomic
//! with respect to the state it touches.
//!
//! # Example
//!
//! ```
//! use bookbrowse::app::{handle_event, BrowsingSession, Event, RenderCommand};
//! use bookbrowse::domain::Catalog;
//! use bookbrowse::ui::Theme;
//! use std::collections::BTreeMap;
//!
//! let catalog = Catalog::new(vec![], BTreeMap::new(), BTreeMap::new()).unwrap();
//! let mut session = BrowsingSession::new(catalog, 36, Theme::Day);
//! let commands = handle_event(&mut session, &Event::OpenSearch);
//! assert_eq!(commands[0], RenderCommand::OpenSearchOverlay);
//! ```

use super::commands::{ListMode, RenderCommand};
use super::events::Event;
use super::modes::Overlay;
use super::state::BrowsingSession;

/// Processes one input event, mutates the session, and returns render
/// commands to execute.
///
/// This is the single entry point for all state transitions. It never fails:
/// unknown selection ids and exhausted pagination are silent no-ops that
/// return an empty command list, and malformed criteria are normalized before
/// they get here.
///
/// # Parameters
///
/// * `session` - Mutable reference to the browsing session
/// * `event` - Event to process
///
/// # Returns
///
/// Render commands for the host to execute in order. Empty when the event
/// requires no display change.
pub fn handle_event(session: &mut BrowsingSession, event: &Event) -> Vec<RenderCommand> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::OpenSearch => {
            session.overlay = Overlay::Search;
            vec![
                RenderCommand::OpenSearchOverlay,
                RenderCommand::FocusSearchInput,
            ]
        }
        Event::SearchSubmit(criteria) => {
            session.apply_search(criteria.clone());
            session.overlay = Overlay::None;

            let is_empty = session.pagination.matches().is_empty();
            let previews = session.previews_for(session.pagination.first_window());
            let remaining = session.pagination.remaining();

            tracing::debug!(
                matches = session.pagination.matches().len(),
                remaining = remaining,
                "search applied"
            );

            vec![
                RenderCommand::ShowNoResultsMessage(is_empty),
                RenderCommand::RenderList {
                    previews,
                    mode: ListMode::Replace,
                },
                RenderCommand::SetRemainingCount(remaining),
                RenderCommand::SetShowMoreEnabled(remaining > 0),
                RenderCommand::ScrollToTop,
                RenderCommand::CloseSearchOverlay,
            ]
        }
        Event::SearchCancel => {
            session.overlay = Overlay::None;
            vec![RenderCommand::CloseSearchOverlay]
        }
        Event::ShowMore => {
            let window = session.pagination.advance().to_vec();
            if window.is_empty() {
                return vec![];
            }

            let previews = session.previews_for(&window);
            let remaining = session.pagination.remaining();

            vec![
                RenderCommand::RenderList {
                    previews,
                    mode: ListMode::Append,
                },
                RenderCommand::SetRemainingCount(remaining),
                RenderCommand::SetShowMoreEnabled(remaining > 0),
            ]
        }
        Event::SelectBook { id } => {
            let Some(book) = session.catalog.find_book(id).cloned() else {
                tracing::debug!(book_id = %id, "selection did not resolve, ignoring");
                return vec![];
            };

            tracing::debug!(book_id = %id, title = %book.title, "book selected");
            session.selected = Some(book.id.clone());
            vec![RenderCommand::ShowDetail(session.detail_for(&book))]
        }
        Event::CloseDetail => {
            session.selected = None;
            vec![RenderCommand::HideDetail]
        }
        Event::OpenSettings => {
            session.overlay = Overlay::Settings;
            vec![RenderCommand::OpenSettingsOverlay]
        }
        Event::ThemeSubmit(theme) => {
            tracing::debug!(theme = ?theme, "theme submitted");
            session.theme = *theme;
            session.overlay = Overlay::None;
            vec![
                RenderCommand::SetPalette(theme.palette()),
                RenderCommand::CloseSettingsOverlay,
            ]
        }
        Event::SettingsCancel => {
            session.overlay = Overlay::None;
            vec![RenderCommand::CloseSettingsOverlay]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, Catalog, FilterCriteria};
    use crate::ui::Theme;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            image: format!("img-{id}"),
            description: format!("About {title}."),
            published: NaiveDate::from_ymd_opt(1969, 1, 1).unwrap(),
            genres: genres.iter().map(ToString::to_string).collect(),
        }
    }

    fn five_book_catalog() -> Catalog {
        let books = vec![
            book("b-1", "Dune", "a-1", &["g-sf"]),
            book("b-2", "Dune Messiah", "a-1", &["g-sf"]),
            book("b-3", "A Wizard of Earthsea", "a-2", &["g-f"]),
            book("b-4", "Children of Dune", "a-1", &["g-sf"]),
            book("b-5", "The Tombs of Atuan", "a-2", &["g-f"]),
        ];
        let authors = BTreeMap::from([
            ("a-1".to_string(), "Frank Herbert".to_string()),
            ("a-2".to_string(), "Ursula K. Le Guin".to_string()),
        ]);
        let genres = BTreeMap::from([
            ("g-sf".to_string(), "Science Fiction".to_string()),
            ("g-f".to_string(), "Fantasy".to_string()),
        ]);
        Catalog::new(books, authors, genres).unwrap()
    }

    fn session(page_size: usize) -> BrowsingSession {
        BrowsingSession::new(five_book_catalog(), page_size, Theme::Day)
    }

    fn find_remaining(commands: &[RenderCommand]) -> usize {
        commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::SetRemainingCount(n) => Some(*n),
                _ => None,
            })
            .expect("SetRemainingCount emitted")
    }

    #[test]
    fn search_then_show_more_walks_three_matches_in_pages_of_two() {
        let mut session = session(2);

        let criteria = FilterCriteria::from_form("dune", "any", "any");
        let commands = handle_event(&mut session, &Event::SearchSubmit(criteria));

        let first = commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::RenderList { previews, mode } => Some((previews.clone(), *mode)),
                _ => None,
            })
            .unwrap();
        assert_eq!(first.1, ListMode::Replace);
        assert_eq!(first.0.len(), 2);
        assert_eq!(find_remaining(&commands), 1);
        assert!(commands.contains(&RenderCommand::ScrollToTop));
        assert!(commands.contains(&RenderCommand::CloseSearchOverlay));
        assert!(commands.contains(&RenderCommand::ShowNoResultsMessage(false)));

        let commands = handle_event(&mut session, &Event::ShowMore);
        let window = commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::RenderList { previews, mode } => Some((previews.clone(), *mode)),
                _ => None,
            })
            .unwrap();
        assert_eq!(window.1, ListMode::Append);
        assert_eq!(window.0.len(), 1);
        assert_eq!(window.0[0].title, "Children of Dune");
        assert_eq!(find_remaining(&commands), 0);
        assert!(commands.contains(&RenderCommand::SetShowMoreEnabled(false)));
    }

    #[test]
    fn show_more_past_the_end_is_a_silent_noop() {
        let mut session = session(36);
        assert!(handle_event(&mut session, &Event::ShowMore).is_empty());
        assert_eq!(session.pagination.current_page(), 1);
    }

    #[test]
    fn empty_match_set_surfaces_no_results_signal() {
        let mut session = session(2);
        let criteria = FilterCriteria::from_form("no such title", "any", "any");
        let commands = handle_event(&mut session, &Event::SearchSubmit(criteria));

        assert!(commands.contains(&RenderCommand::ShowNoResultsMessage(true)));
        assert!(commands.contains(&RenderCommand::SetShowMoreEnabled(false)));
        assert_eq!(find_remaining(&commands), 0);

        let list = commands.iter().find_map(|c| match c {
            RenderCommand::RenderList { previews, .. } => Some(previews.len()),
            _ => None,
        });
        assert_eq!(list, Some(0));
    }

    #[test]
    fn case_insensitive_search_matches_dune_messiah() {
        let mut session = session(36);
        let criteria = FilterCriteria::from_form("dune messiah", "any", "any");
        let commands = handle_event(&mut session, &Event::SearchSubmit(criteria));

        let previews = commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::RenderList { previews, .. } => Some(previews.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(previews.len(), 1);
        assert_eq!(previews[0].title, "Dune Messiah");
    }

    #[test]
    fn selecting_known_book_opens_detail() {
        let mut session = session(36);
        let commands = handle_event(
            &mut session,
            &Event::SelectBook {
                id: "b-3".to_string(),
            },
        );

        assert_eq!(session.selected.as_deref(), Some("b-3"));
        let detail = commands
            .iter()
            .find_map(|c| match c {
                RenderCommand::ShowDetail(d) => Some(d.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(detail.title, "A Wizard of Earthsea");
        assert_eq!(detail.subtitle, "Ursula K. Le Guin (1969)");
    }

    #[test]
    fn selecting_unknown_id_changes_nothing() {
        let mut session = session(36);
        let commands = handle_event(
            &mut session,
            &Event::SelectBook {
                id: "nonexistent-id".to_string(),
            },
        );

        assert!(commands.is_empty());
        assert!(session.selected.is_none());
    }

    #[test]
    fn closing_detail_discards_selection() {
        let mut session = session(36);
        handle_event(
            &mut session,
            &Event::SelectBook {
                id: "b-1".to_string(),
            },
        );

        let commands = handle_event(&mut session, &Event::CloseDetail);
        assert_eq!(commands, vec![RenderCommand::HideDetail]);
        assert!(session.selected.is_none());
    }

    #[test]
    fn theme_submit_swaps_palette_exactly_once() {
        let mut session = BrowsingSession::new(five_book_catalog(), 36, Theme::Night);

        let commands = handle_event(&mut session, &Event::ThemeSubmit(Theme::Day));
        assert_eq!(session.theme, Theme::Day);

        let palettes: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::SetPalette(_)))
            .collect();
        assert_eq!(palettes.len(), 1);
        assert_eq!(
            palettes[0],
            &RenderCommand::SetPalette(Theme::Day.palette())
        );
        assert!(commands.contains(&RenderCommand::CloseSettingsOverlay));
    }

    #[test]
    fn cancel_events_close_overlays_without_touching_state() {
        let mut session = session(36);
        let criteria_before = session.criteria.clone();
        let theme_before = session.theme;

        handle_event(&mut session, &Event::OpenSearch);
        assert_eq!(session.overlay, Overlay::Search);
        let commands = handle_event(&mut session, &Event::SearchCancel);
        assert_eq!(commands, vec![RenderCommand::CloseSearchOverlay]);

        handle_event(&mut session, &Event::OpenSettings);
        assert_eq!(session.overlay, Overlay::Settings);
        let commands = handle_event(&mut session, &Event::SettingsCancel);
        assert_eq!(commands, vec![RenderCommand::CloseSettingsOverlay]);

        assert_eq!(session.overlay, Overlay::None);
        assert_eq!(session.criteria, criteria_before);
        assert_eq!(session.theme, theme_before);
    }

    #[test]
    fn open_search_focuses_title_field() {
        let mut session = session(36);
        let commands = handle_event(&mut session, &Event::OpenSearch);
        assert_eq!(
            commands,
            vec![
                RenderCommand::OpenSearchOverlay,
                RenderCommand::FocusSearchInput,
            ]
        );
    }
}
