//! Bookbrowse: an embeddable browsing core for a static book catalog.
//!
//! Bookbrowse is the logic layer of a client-side catalog browser. It owns
//! filtering, pagination, selection, and theming, and talks to the host's
//! display through an explicit render-command boundary:
//! - Paginated book list with show-more windows (replace vs. append renders)
//! - Filtering by title substring, author, and genre
//! - Detail overlay for a selected book
//! - Day/night theme toggle, submit-gated and seeded from an environment
//!   preference
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding Host (display layer, not in this crate)  │  ← Events in,
//! └─────────────────────────────────────────────────────┘    commands out
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling (reducer)                         │
//! │  - Pagination bookkeeping                           │
//! │  - Render command emission                          │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐      ┌───────────────────┐
//! │ Domain Layer      │      │ UI Layer          │
//! │ (domain/)         │      │ (ui/)             │
//! │ - Book model      │      │ - View models     │
//! │ - Catalog store   │      │ - Theme/palette   │
//! │ - Filter engine   │      │                   │
//! │ - Error types     │      │                   │
//! └───────────────────┘      └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability)                      │  ← Optional
//! │  - Tracing subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event/command model
//! - [`domain`]: Core domain types (Book, Catalog, filter, errors)
//! - [`ui`]: View models and day/night theming
//! - [`observability`]: Tracing subscriber setup (optional)
//!
//! # Data Flow
//!
//! The host translates raw input (form submits, clicks) into [`Event`]
//! values, feeds them to [`handle_event`], and executes the returned
//! [`RenderCommand`] batch in order. All state lives in the
//! [`BrowsingSession`]; the catalog itself is immutable after load.
//!
//! # Example
//!
//! ```
//! use bookbrowse::{handle_event, initialize, Config, Event, RenderCommand};
//! use bookbrowse::domain::{Catalog, FilterCriteria};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"{"books": [], "authors": {}, "genres": {}}"#,
//! )?;
//!
//! let (mut session, initial_commands) = initialize(catalog, &Config::default());
//! // Execute initial_commands against the display, then run the event loop:
//! let commands = handle_event(
//!     &mut session,
//!     &Event::SearchSubmit(FilterCriteria::from_form("dune", "any", "any")),
//! );
//! assert!(commands.contains(&RenderCommand::ScrollToTop));
//! # Ok::<(), bookbrowse::domain::BrowseError>(())
//! ```
//!
//! # Concurrency
//!
//! Single-threaded and event-driven by design: each event is handled
//! synchronously to completion before the next is dispatched, so no locking
//! or cancellation discipline is needed anywhere in the crate.

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, BrowsingSession, Event, ListMode, Overlay, Pagination, RenderCommand};
pub use domain::{filter, Book, BrowseError, Catalog, FilterCriteria, IdFilter, Result};
pub use ui::{BookDetail, BookPreview, FilterOption, Palette, Theme};

/// Default number of books revealed per page window.
pub const BOOKS_PER_PAGE: usize = 36;

/// Host-provided configuration consumed once at startup.
///
/// Carries the environment signals the core does not observe itself: the
/// page size, the dark-mode preference, and an optional trace level for the
/// bundled subscriber.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed page size for pagination. Default: [`BOOKS_PER_PAGE`].
    pub page_size: usize,

    /// Whether the environment prefers a dark color scheme.
    ///
    /// Consumed exactly once to pick the startup theme; later environment
    /// changes are not observed.
    pub prefers_dark: bool,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `None`
    /// (falls back to `RUST_LOG`, then `"info"`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: BOOKS_PER_PAGE,
            prefers_dark: false,
            trace_level: None,
        }
    }
}

/// Initializes a browsing session and the initial render command batch.
///
/// Mirrors first page load: the whole catalog is the initial match set, the
/// first window is rendered fresh, the filter dropdowns are populated, the
/// palette is chosen from the dark-mode preference, and the show-more
/// control reflects what remains.
///
/// # Parameters
///
/// * `catalog` - Validated catalog, immutable from here on
/// * `config` - Startup configuration
///
/// # Returns
///
/// The new session plus the commands that bring an empty display in sync
/// with it.
///
/// # Example
///
/// ```
/// use bookbrowse::{initialize, Config, RenderCommand, Theme};
/// use bookbrowse::domain::Catalog;
/// use std::collections::BTreeMap;
///
/// let catalog = Catalog::new(vec![], BTreeMap::new(), BTreeMap::new())?;
/// let config = Config { prefers_dark: true, ..Default::default() };
///
/// let (session, commands) = initialize(catalog, &config);
/// assert_eq!(session.theme, Theme::Night);
/// assert!(commands.contains(&RenderCommand::SetPalette(Theme::Night.palette())));
/// # Ok::<(), bookbrowse::domain::BrowseError>(())
/// ```
#[must_use]
pub fn initialize(catalog: Catalog, config: &Config) -> (BrowsingSession, Vec<RenderCommand>) {
    let theme = Theme::from_dark_preference(config.prefers_dark);
    let session = BrowsingSession::new(catalog, config.page_size, theme);

    tracing::debug!(
        books = session.catalog.len(),
        page_size = config.page_size,
        theme = ?theme,
        "session initialized"
    );

    let remaining = session.pagination.remaining();
    let commands = vec![
        RenderCommand::RenderList {
            previews: session.previews_for(session.pagination.first_window()),
            mode: ListMode::Replace,
        },
        RenderCommand::RenderGenreOptions(session.genre_options()),
        RenderCommand::RenderAuthorOptions(session.author_options()),
        RenderCommand::SetPalette(theme.palette()),
        RenderCommand::ShowNoResultsMessage(session.catalog.is_empty()),
        RenderCommand::SetRemainingCount(remaining),
        RenderCommand::SetShowMoreEnabled(remaining > 0),
    ];

    (session, commands)
}
