//! Browsing session state and view model computation.
//!
//! This module defines [`BrowsingSession`], the central state container for
//! one catalog browser, along with the methods that apply searches and build
//! display-ready view models. It serves as the single source of truth for
//! all transient UI state.
//!
//! # Architecture
//!
//! The session separates immutable data (the catalog) from derived state
//! (criteria, pagination, selection, theme, overlay). Every mutable piece of
//! the original page — current page, current match set, selected book — lives
//! here as an explicit value instead of ambient global state. View models are
//! computed on demand from state snapshots.
//!
//! # State Components
//!
//! - **Catalog**: Immutable book records and author/genre tables
//! - **Criteria**: The last submitted search form
//! - **Pagination**: Current match set and page cursor
//! - **Selection**: Optional book id backing the detail overlay
//! - **Theme**: Current day/night display mode
//! - **Overlay**: Which modal form overlay is open

use crate::domain::{filter, Book, Catalog, FilterCriteria};
use crate::ui::{BookDetail, BookPreview, FilterOption, Theme};

use super::modes::Overlay;
use super::pagination::Pagination;

/// Central state container for one browsing session.
///
/// Holds the catalog plus all transient UI state. Mutated only by the event
/// handler in response to input events; hosts read it through accessors and
/// the render commands the handler emits.
///
/// # Examples
///
/// ```
/// use bookbrowse::app::BrowsingSession;
/// use bookbrowse::domain::Catalog;
/// use bookbrowse::ui::Theme;
/// use std::collections::BTreeMap;
///
/// let catalog = Catalog::new(vec![], BTreeMap::new(), BTreeMap::new()).unwrap();
/// let session = BrowsingSession::new(catalog, 36, Theme::Day);
/// assert!(session.selected_book().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BrowsingSession {
    /// Immutable catalog shared by every handler invocation.
    pub catalog: Catalog,

    /// The last submitted search criteria.
    ///
    /// Replaced wholesale on each search submission; starts as match-all.
    pub criteria: FilterCriteria,

    /// Pagination over the current match set.
    ///
    /// Replaced together with `criteria`; advanced by show-more events.
    pub pagination: Pagination,

    /// Id of the book shown in the detail overlay, if open.
    ///
    /// Set by selection events that resolve, cleared on detail close. No
    /// history is retained.
    pub selected: Option<String>,

    /// Current display theme.
    ///
    /// Initialized from the environment preference, changed only by
    /// settings-form submission.
    pub theme: Theme,

    /// Which modal form overlay is currently open.
    pub overlay: Overlay,

    /// Fixed page size for this session.
    page_size: usize,
}

impl BrowsingSession {
    /// Creates a session over a catalog with the initial match set being the
    /// whole catalog.
    ///
    /// # Parameters
    ///
    /// * `catalog` - Validated, immutable catalog
    /// * `page_size` - Fixed window size for pagination
    /// * `theme` - Startup theme, already resolved from the environment
    ///   preference
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize, theme: Theme) -> Self {
        let pagination = Pagination::new(catalog.books().to_vec(), page_size);
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            pagination,
            selected: None,
            theme,
            overlay: Overlay::default(),
            page_size,
        }
    }

    /// Replaces the match set by running the filter with new criteria.
    ///
    /// The page cursor resets to 1; the caller renders the first window with
    /// a Replace command. Selection and theme are untouched.
    pub fn apply_search(&mut self, criteria: FilterCriteria) {
        let matches = filter(self.catalog.books(), &criteria);
        self.criteria = criteria;
        self.pagination = Pagination::new(matches, self.page_size);
    }

    /// Returns the book backing the detail overlay, if one is selected.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected
            .as_deref()
            .and_then(|id| self.catalog.find_book(id))
    }

    /// Builds preview view models for a window of books.
    ///
    /// Author ids are resolved to display names; a dangling id (impossible
    /// for validated catalogs) falls back to the raw id rather than failing.
    #[must_use]
    pub fn previews_for(&self, books: &[Book]) -> Vec<BookPreview> {
        books
            .iter()
            .map(|book| BookPreview {
                id: book.id.clone(),
                title: book.title.clone(),
                author_name: self
                    .catalog
                    .author_name(&book.author)
                    .unwrap_or(&book.author)
                    .to_string(),
                image: book.image.clone(),
            })
            .collect()
    }

    /// Builds the detail view model for a book.
    ///
    /// The subtitle is formatted as `"Author (Year)"`.
    #[must_use]
    pub fn detail_for(&self, book: &Book) -> BookDetail {
        let author_name = self
            .catalog
            .author_name(&book.author)
            .unwrap_or(&book.author);

        BookDetail {
            title: book.title.clone(),
            subtitle: format!("{author_name} ({})", book.published_year()),
            description: book.description.clone(),
            image: book.image.clone(),
        }
    }

    /// Builds the genre dropdown options, led by the "All Genres" entry.
    #[must_use]
    pub fn genre_options(&self) -> Vec<FilterOption> {
        Self::options_with_any("All Genres", self.catalog.genres())
    }

    /// Builds the author dropdown options, led by the "All Authors" entry.
    #[must_use]
    pub fn author_options(&self) -> Vec<FilterOption> {
        Self::options_with_any("All Authors", self.catalog.authors())
    }

    fn options_with_any<'a>(
        any_label: &str,
        entries: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> Vec<FilterOption> {
        std::iter::once(FilterOption::any(any_label))
            .chain(entries.map(|(id, name)| FilterOption {
                value: id.to_string(),
                label: name.to_string(),
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        let books = vec![
            Book {
                id: "b-1".to_string(),
                title: "Dune".to_string(),
                author: "a-1".to_string(),
                image: "img-1".to_string(),
                description: "Desert planet.".to_string(),
                published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
                genres: vec!["g-sf".to_string()],
            },
            Book {
                id: "b-2".to_string(),
                title: "A Wizard of Earthsea".to_string(),
                author: "a-2".to_string(),
                image: "img-2".to_string(),
                description: "Archipelago wizardry.".to_string(),
                published: NaiveDate::from_ymd_opt(1968, 11, 1).unwrap(),
                genres: vec!["g-f".to_string()],
            },
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

    #[test]
    fn new_session_paginates_full_catalog() {
        let session = BrowsingSession::new(catalog(), 36, Theme::Day);
        assert_eq!(session.pagination.matches().len(), 2);
        assert!(session.criteria.is_match_all());
    }

    #[test]
    fn apply_search_replaces_matches_and_resets_page() {
        let mut session = BrowsingSession::new(catalog(), 1, Theme::Day);
        session.pagination.advance();
        assert_eq!(session.pagination.current_page(), 2);

        session.apply_search(FilterCriteria::from_form("earthsea", "any", "any"));
        assert_eq!(session.pagination.current_page(), 1);
        assert_eq!(session.pagination.matches().len(), 1);
        assert_eq!(session.pagination.matches()[0].id, "b-2");
    }

    #[test]
    fn previews_resolve_author_names() {
        let session = BrowsingSession::new(catalog(), 36, Theme::Day);
        let previews = session.previews_for(session.pagination.first_window());
        assert_eq!(previews[0].author_name, "Frank Herbert");
        assert_eq!(previews[1].author_name, "Ursula K. Le Guin");
    }

    #[test]
    fn detail_subtitle_is_author_and_year() {
        let session = BrowsingSession::new(catalog(), 36, Theme::Day);
        let book = session.catalog.find_book("b-1").unwrap().clone();
        let detail = session.detail_for(&book);
        assert_eq!(detail.subtitle, "Frank Herbert (1965)");
        assert_eq!(detail.title, "Dune");
    }

    #[test]
    fn dropdown_options_lead_with_any_entry() {
        let session = BrowsingSession::new(catalog(), 36, Theme::Day);

        let genres = session.genre_options();
        assert_eq!(genres[0].value, "any");
        assert_eq!(genres[0].label, "All Genres");
        assert_eq!(genres.len(), 3);

        let authors = session.author_options();
        assert_eq!(authors[0].label, "All Authors");
        assert!(authors.iter().any(|o| o.label == "Frank Herbert"));
    }
}
