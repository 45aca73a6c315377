//! Book domain model.
//!
//! This module defines the core `Book` type: one immutable catalog entry with
//! its author and genre references. Books are value objects — once the catalog
//! is loaded they are never mutated, only filtered, sliced, and displayed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Books reference their author and genres by id; the [`Catalog`](super::Catalog)
/// owns the id → display-name tables and validates the references at load time.
///
/// # Fields
///
/// - `id`: Unique identifier, carried back by selection events
/// - `title`: Display title, target of the substring filter
/// - `author`: Author id, resolved against the catalog's author table
/// - `image`: Cover image URI, passed through to view models untouched
/// - `description`: Long-form text shown in the detail overlay
/// - `published`: Publication date; only the year is displayed
/// - `genres`: Ordered genre ids, tested by membership during filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub description: String,
    pub published: NaiveDate,
    pub genres: Vec<String>,
}

impl Book {
    /// Returns the publication year for detail subtitles ("Author (Year)").
    ///
    /// # Examples
    ///
    /// ```
    /// use bookbrowse::domain::Book;
    /// use chrono::NaiveDate;
    ///
    /// let book = Book {
    ///     id: "b-1".to_string(),
    ///     title: "Dune".to_string(),
    ///     author: "a-1".to_string(),
    ///     image: "https://example.org/dune.jpg".to_string(),
    ///     description: "Desert planet.".to_string(),
    ///     published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
    ///     genres: vec!["g-sf".to_string()],
    /// };
    /// assert_eq!(book.published_year(), 1965);
    /// ```
    #[must_use]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    /// Tests whether this book carries the given genre id.
    ///
    /// Membership is order-independent and short-circuits on the first hit.
    #[must_use]
    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|g| g == genre_id)
    }
}
