//! Pagination over the current match set.
//!
//! This module tracks which window of the match set has been revealed to the
//! user. A new search replaces the whole state (page resets to 1 and the
//! first window is drawn fresh); each show-more action reveals exactly one
//! more window and appends it, never redrawing what is already on screen.
//!
//! # Invariants
//!
//! - `current_page >= 1` at all times
//! - Items revealed so far = `min(current_page * page_size, matches.len())`
//! - [`Pagination::advance`] past the end is a silent no-op; the handler is
//!   responsible for disabling the show-more action when nothing remains

use crate::domain::Book;

/// Pagination state: the match set plus the current page cursor.
///
/// Owns the match set it paginates; replaced wholesale on each search
/// submission.
///
/// # Examples
///
/// ```
/// use bookbrowse::app::Pagination;
///
/// let mut pagination = Pagination::new(vec![], 36);
/// assert_eq!(pagination.current_page(), 1);
/// assert_eq!(pagination.remaining(), 0);
/// assert!(pagination.first_window().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    matches: Vec<Book>,
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    /// Creates pagination over a fresh match set, starting at page 1.
    ///
    /// A zero `page_size` is clamped to 1 to preserve the page invariants.
    #[must_use]
    pub fn new(matches: Vec<Book>, page_size: usize) -> Self {
        Self {
            matches,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// The match set being paginated, in catalog order.
    #[must_use]
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    /// Current page number, starting at 1.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The first window, `matches[0 : page_size]`.
    ///
    /// Used for Replace renders after a new search or at startup.
    #[must_use]
    pub fn first_window(&self) -> &[Book] {
        let end = self.page_size.min(self.matches.len());
        &self.matches[..end]
    }

    /// Everything revealed so far, `matches[0 : current_page * page_size]`.
    ///
    /// The full-render form; hosts that redraw from scratch use this instead
    /// of accumulating Append windows.
    #[must_use]
    pub fn rendered(&self) -> &[Book] {
        let end = (self.current_page * self.page_size).min(self.matches.len());
        &self.matches[..end]
    }

    /// Count of matches not yet revealed.
    ///
    /// `max(0, matches.len() - current_page * page_size)`.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.matches
            .len()
            .saturating_sub(self.current_page * self.page_size)
    }

    /// Whether a show-more action would reveal anything.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Reveals the next window and advances the page cursor.
    ///
    /// Returns the newly revealed slice,
    /// `matches[current_page * page_size : (current_page + 1) * page_size]`,
    /// clamped to the match set length, then increments `current_page`. When
    /// nothing remains this is a silent no-op: the returned window is empty
    /// and the cursor does not move.
    pub fn advance(&mut self) -> &[Book] {
        if self.remaining() == 0 {
            tracing::debug!(page = self.current_page, "advance with nothing remaining, ignoring");
            return &[];
        }

        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.matches.len());
        self.current_page += 1;

        tracing::debug!(
            page = self.current_page,
            window = end - start,
            remaining = self.remaining(),
            "page advanced"
        );

        &self.matches[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn books(n: usize) -> Vec<Book> {
        (0..n)
            .map(|i| Book {
                id: format!("b-{i}"),
                title: format!("Book {i}"),
                author: "a-1".to_string(),
                image: String::new(),
                description: String::new(),
                published: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                genres: vec![],
            })
            .collect()
    }

    #[test]
    fn three_matches_with_page_size_two() {
        let mut pagination = Pagination::new(books(3), 2);

        assert_eq!(pagination.first_window().len(), 2);
        assert_eq!(pagination.remaining(), 1);

        let window = pagination.advance().to_vec();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].id, "b-2");
        assert_eq!(pagination.remaining(), 0);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn remaining_reaches_zero_and_stays_there() {
        let len = 7;
        let page_size = 2;
        let mut pagination = Pagination::new(books(len), page_size);

        let full_pages = len.div_ceil(page_size);
        // First page is already revealed, so one fewer advance is needed.
        for _ in 1..full_pages {
            pagination.advance();
        }
        assert_eq!(pagination.remaining(), 0);

        let page_before = pagination.current_page();
        assert!(pagination.advance().is_empty());
        assert_eq!(pagination.remaining(), 0);
        assert_eq!(pagination.current_page(), page_before);
    }

    #[test]
    fn empty_match_set_yields_empty_windows() {
        let mut pagination = Pagination::new(vec![], 36);
        assert_eq!(pagination.remaining(), 0);
        assert!(pagination.first_window().is_empty());
        assert!(pagination.rendered().is_empty());
        assert!(pagination.advance().is_empty());
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn rendered_grows_with_each_advance() {
        let mut pagination = Pagination::new(books(5), 2);
        assert_eq!(pagination.rendered().len(), 2);

        pagination.advance();
        assert_eq!(pagination.rendered().len(), 4);

        pagination.advance();
        assert_eq!(pagination.rendered().len(), 5);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let pagination = Pagination::new(books(3), 0);
        assert_eq!(pagination.first_window().len(), 1);
        assert_eq!(pagination.remaining(), 2);
    }
}
