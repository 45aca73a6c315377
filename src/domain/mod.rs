//! Domain layer for the bookbrowse core.
//!
//! This module contains the core domain types and business logic for the
//! browsing pipeline, independent of any host UI or rendering concerns. It
//! follows domain-driven design principles by keeping business rules isolated
//! from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book domain model
//! - [`catalog`]: Immutable catalog store and selection resolution
//! - [`filter`]: Filter criteria and the pure filter engine
//!
//! # Examples
//!
//! ```
//! use bookbrowse::domain::{filter, Catalog, FilterCriteria, Result};
//!
//! fn match_everything(catalog: &Catalog) -> Result<usize> {
//!     Ok(filter(catalog.books(), &FilterCriteria::default()).len())
//! }
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod filter;

pub use book::Book;
pub use catalog::Catalog;
pub use error::{BrowseError, Result};
pub use filter::{filter, FilterCriteria, IdFilter};
