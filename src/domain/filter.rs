//! Filter criteria and the pure filter engine.
//!
//! This module implements the search side of the filter-paginate-render
//! pipeline: [`FilterCriteria`] describes one submitted search form, and
//! [`filter`] applies it to the catalog's book list.
//!
//! # Matching Rules
//!
//! A book is included iff all three predicates hold:
//!
//! 1. **Title**: case-insensitive substring test; an empty or whitespace-only
//!    criterion matches everything
//! 2. **Author**: exact id equality, or always-true for [`IdFilter::Any`]
//! 3. **Genre**: membership test over the book's genre list, or always-true
//!    for [`IdFilter::Any`]
//!
//! The filter is stable: results keep catalog order, nothing is re-sorted.

use serde::{Deserialize, Serialize};

use super::book::Book;

/// Form value carried by the dropdown sentinel meaning "no restriction".
const ANY_SENTINEL: &str = "any";

/// An id-valued filter field: either a concrete id or the "any" sentinel.
///
/// Search forms submit `"any"` (or nothing) when a dropdown is left on its
/// default entry; [`IdFilter::from_form_value`] normalizes those to
/// [`IdFilter::Any`] so malformed or unset fields never become errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdFilter {
    /// Matches every book.
    #[default]
    Any,
    /// Matches books carrying exactly this id.
    Id(String),
}

impl IdFilter {
    /// Normalizes a raw form value into a filter field.
    ///
    /// `"any"` (case-insensitive) and empty/whitespace-only strings become
    /// [`IdFilter::Any`]; everything else is taken as a concrete id.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookbrowse::domain::IdFilter;
    ///
    /// assert_eq!(IdFilter::from_form_value("any"), IdFilter::Any);
    /// assert_eq!(IdFilter::from_form_value("  "), IdFilter::Any);
    /// assert_eq!(
    ///     IdFilter::from_form_value("a-1"),
    ///     IdFilter::Id("a-1".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_form_value(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY_SENTINEL) {
            Self::Any
        } else {
            Self::Id(trimmed.to_string())
        }
    }

    /// Whether this field places no restriction.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    fn matches(&self, id: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => wanted == id,
        }
    }
}

/// One submitted search form: title substring plus author and genre fields.
///
/// The default value matches the whole catalog.
///
/// # Examples
///
/// ```
/// use bookbrowse::domain::{FilterCriteria, IdFilter};
///
/// let criteria = FilterCriteria::from_form("dune", "any", "g-sf");
/// assert_eq!(criteria.title, "dune");
/// assert!(criteria.author.is_any());
/// assert_eq!(criteria.genre, IdFilter::Id("g-sf".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Title substring, matched case-insensitively. Empty matches all.
    pub title: String,
    /// Author restriction.
    pub author: IdFilter,
    /// Genre restriction.
    pub genre: IdFilter,
}

impl FilterCriteria {
    /// Builds criteria from raw form field values, normalizing sentinels.
    #[must_use]
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: IdFilter::from_form_value(author),
            genre: IdFilter::from_form_value(genre),
        }
    }

    /// Whether these criteria restrict nothing (match-all).
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    fn matches(&self, book: &Book, title_needle: Option<&str>) -> bool {
        let title_ok = match title_needle {
            None => true,
            Some(needle) => book.title.to_lowercase().contains(needle),
        };

        title_ok && self.author.matches(&book.author) && genre_matches(&self.genre, book)
    }
}

fn genre_matches(genre: &IdFilter, book: &Book) -> bool {
    match genre {
        IdFilter::Any => true,
        IdFilter::Id(wanted) => book.has_genre(wanted),
    }
}

/// Applies filter criteria to a book list, producing the match set.
///
/// Pure function over its inputs: no side effects, and the result is an
/// order-preserving subsequence of `books`. Idempotent — filtering a match
/// set again with the same criteria returns it unchanged.
///
/// # Examples
///
/// ```
/// use bookbrowse::domain::{filter, FilterCriteria};
///
/// let matches = filter(&[], &FilterCriteria::default());
/// assert!(matches.is_empty());
/// ```
#[must_use]
pub fn filter(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "filter",
        total_books = books.len(),
        title_len = criteria.title.trim().len(),
        author_any = criteria.author.is_any(),
        genre_any = criteria.genre.is_any(),
    )
    .entered();

    let needle = {
        let trimmed = criteria.title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    };

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| criteria.matches(book, needle.as_deref()))
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "filter applied");

    matches
}
