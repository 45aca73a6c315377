//! Immutable catalog store and selection resolution.
//!
//! This module defines [`Catalog`], the read-only container for all book
//! records plus the author and genre lookup tables. The catalog is populated
//! once at startup and never mutated; every browsing session borrows from it
//! freely without synchronization.
//!
//! # Validation
//!
//! Construction validates referential integrity: every `Book.author` and every
//! entry of `Book.genres` must resolve in the lookup tables, and book ids must
//! be unique. A broken data source is rejected wholesale with a typed error
//! rather than surfacing as missing names at render time.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::book::Book;
use super::error::{BrowseError, Result};

/// Raw catalog document shape, as handed over by the host's data source.
///
/// Deserialized from JSON and promoted to a [`Catalog`] after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    books: Vec<Book>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
}

/// Immutable store of books and their author/genre display names.
///
/// Holds the full, catalog-ordered book list. Filtering preserves this order;
/// nothing in the crate ever re-sorts it.
///
/// # Examples
///
/// ```
/// use bookbrowse::domain::{Book, Catalog};
/// use chrono::NaiveDate;
/// use std::collections::BTreeMap;
///
/// let books = vec![Book {
///     id: "b-1".to_string(),
///     title: "Dune".to_string(),
///     author: "a-1".to_string(),
///     image: "https://example.org/dune.jpg".to_string(),
///     description: "Desert planet.".to_string(),
///     published: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
///     genres: vec!["g-sf".to_string()],
/// }];
/// let authors = BTreeMap::from([("a-1".to_string(), "Frank Herbert".to_string())]);
/// let genres = BTreeMap::from([("g-sf".to_string(), "Science Fiction".to_string())]);
///
/// let catalog = Catalog::new(books, authors, genres).unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.author_name("a-1"), Some("Frank Herbert"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
}

impl Catalog {
    /// Builds a validated catalog from books and lookup tables.
    ///
    /// # Errors
    ///
    /// - [`BrowseError::DuplicateBookId`] if two books share an id
    /// - [`BrowseError::UnknownAuthor`] if a book's author id does not resolve
    /// - [`BrowseError::UnknownGenre`] if any of a book's genre ids does not resolve
    pub fn new(
        books: Vec<Book>,
        authors: BTreeMap<String, String>,
        genres: BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut seen_ids = HashSet::new();

        for book in &books {
            if !seen_ids.insert(book.id.as_str()) {
                return Err(BrowseError::DuplicateBookId(book.id.clone()));
            }

            if !authors.contains_key(&book.author) {
                return Err(BrowseError::UnknownAuthor {
                    book_id: book.id.clone(),
                    author_id: book.author.clone(),
                });
            }

            for genre_id in &book.genres {
                if !genres.contains_key(genre_id) {
                    return Err(BrowseError::UnknownGenre {
                        book_id: book.id.clone(),
                        genre_id: genre_id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "catalog loaded"
        );

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    /// Parses and validates a catalog from a JSON document.
    ///
    /// The expected shape is `{ "books": [...], "authors": {id: name},
    /// "genres": {id: name} }`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowseError::Parse`] for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.books, doc.authors, doc.genres)
    }

    /// Returns all books in catalog order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Resolves a UI-originated book id back to its record.
    ///
    /// Linear scan by id equality; first match wins (ids are unique, so at
    /// most one match exists). Returns `None` for unknown ids — the caller
    /// must not open the detail view in that case.
    #[must_use]
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Looks up an author's display name by id.
    #[must_use]
    pub fn author_name(&self, author_id: &str) -> Option<&str> {
        self.authors.get(author_id).map(String::as_str)
    }

    /// Looks up a genre's display name by id.
    #[must_use]
    pub fn genre_name(&self, genre_id: &str) -> Option<&str> {
        self.genres.get(genre_id).map(String::as_str)
    }

    /// Iterates `(id, name)` author pairs in deterministic (id-sorted) order.
    pub fn authors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.authors.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Iterates `(id, name)` genre pairs in deterministic (id-sorted) order.
    pub fn genres(&self) -> impl Iterator<Item = (&str, &str)> {
        self.genres.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}
