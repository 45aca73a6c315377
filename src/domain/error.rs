//! Error types for the bookbrowse core.
//!
//! This module defines the centralized error type [`BrowseError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors can only arise while a catalog is being constructed or parsed; once a
//! session is running, every input event is handled infallibly (unknown selection
//! ids and empty match sets are valid states, not errors).

use thiserror::Error;

/// The main error type for bookbrowse operations.
///
/// This enum consolidates all error conditions that can occur while loading and
/// validating a catalog. Referential problems name the offending book so the
/// host can report which record in its data source is broken.
///
/// # Examples
///
/// ```
/// use bookbrowse::domain::BrowseError;
///
/// let err = BrowseError::UnknownAuthor {
///     book_id: "b-1".to_string(),
///     author_id: "a-404".to_string(),
/// };
/// assert!(err.to_string().contains("a-404"));
/// ```
#[derive(Debug, Error)]
pub enum BrowseError {
    /// A book references an author id absent from the author table.
    ///
    /// Raised during catalog validation. The catalog is rejected wholesale;
    /// there is no partial-load mode.
    #[error("book {book_id} references unknown author {author_id}")]
    UnknownAuthor {
        /// Id of the book carrying the dangling reference.
        book_id: String,
        /// The author id that failed to resolve.
        author_id: String,
    },

    /// A book references a genre id absent from the genre table.
    ///
    /// Raised during catalog validation, same policy as [`BrowseError::UnknownAuthor`].
    #[error("book {book_id} references unknown genre {genre_id}")]
    UnknownGenre {
        /// Id of the book carrying the dangling reference.
        book_id: String,
        /// The genre id that failed to resolve.
        genre_id: String,
    },

    /// Two books in the catalog share the same id.
    ///
    /// Selection resolution assumes ids are unique; duplicate ids would make
    /// "first match wins" ambiguous, so the catalog is rejected at load time.
    #[error("duplicate book id {0}")]
    DuplicateBookId(String),

    /// The catalog JSON document failed to deserialize.
    ///
    /// Wraps errors from `serde_json`. Automatically converts using the
    /// `#[from]` attribute.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A specialized `Result` type for bookbrowse operations.
///
/// This is a type alias for `std::result::Result<T, BrowseError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use bookbrowse::domain::Result;
///
/// fn load_catalog() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BrowseError>;
