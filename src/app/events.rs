//! Input events consumed by the browsing session.
//!
//! This module defines the [`Event`] type: every discrete user input the host
//! can forward into the core. Each event carries its full payload — selection
//! clicks carry the book id directly, so the core never inspects the host's
//! element tree to recover what was clicked.

use crate::domain::FilterCriteria;
use crate::ui::Theme;

/// Events triggered by user input in the host UI.
///
/// Each event represents one discrete occurrence. The handler processes them
/// sequentially and to completion, so state transitions are deterministic and
/// atomic with respect to the state they touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the search overlay and focuses its title field.
    OpenSearch,

    /// Submits the search form, replacing the match set and resetting to page 1.
    SearchSubmit(FilterCriteria),

    /// Dismisses the search overlay without changing the filter.
    SearchCancel,

    /// Reveals the next page window and appends it to the list.
    ShowMore,

    /// Selects a book by id for detail display.
    ///
    /// Unknown ids are a silent no-op; the detail overlay is only opened for
    /// ids that resolve in the catalog.
    SelectBook {
        /// Id token carried by the clicked preview.
        id: String,
    },

    /// Closes the detail overlay and discards the selection.
    CloseDetail,

    /// Opens the settings overlay.
    OpenSettings,

    /// Submits the settings form, applying the chosen theme.
    ///
    /// Theme changes are submit-gated: picking a value in the form has no
    /// effect until this event arrives.
    ThemeSubmit(Theme),

    /// Dismisses the settings overlay without changing the theme.
    SettingsCancel,
}
