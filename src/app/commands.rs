//! Render commands representing display side effects for the host to execute.
//!
//! This module defines the [`RenderCommand`] type, the crate's half of the
//! render-adapter boundary. The event handler returns an ordered
//! `Vec<RenderCommand>` after processing each event; the host executes them
//! in sequence against whatever display technology it owns. Commands carry
//! display-ready view models, never raw domain records.

use crate::ui::{BookDetail, BookPreview, FilterOption, Palette};

/// How a [`RenderCommand::RenderList`] batch should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Clear the list and draw these previews from scratch (new search,
    /// startup).
    Replace,

    /// Append these previews after the existing entries (show-more).
    Append,
}

/// Commands representing display side effects to be executed by the host.
///
/// Produced by the event handler and by [`initialize`](crate::initialize).
/// They represent the boundary between pure state transitions and effectful
/// rendering; executing them in order always yields a display consistent
/// with the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Draws a batch of book previews into the list area.
    RenderList {
        /// Preview cards to draw, in match-set order.
        previews: Vec<BookPreview>,
        /// Whether to replace the list or append to it.
        mode: ListMode,
    },

    /// Populates the genre dropdown, leading with the "All Genres" entry.
    RenderGenreOptions(Vec<FilterOption>),

    /// Populates the author dropdown, leading with the "All Authors" entry.
    RenderAuthorOptions(Vec<FilterOption>),

    /// Updates the count shown on the show-more control.
    SetRemainingCount(usize),

    /// Enables or disables the show-more control.
    ///
    /// Always emitted alongside [`RenderCommand::SetRemainingCount`]; the
    /// control must be disabled whenever the count is 0, since the core
    /// treats show-more past the end as a silent no-op.
    SetShowMoreEnabled(bool),

    /// Shows or hides the "no results" message.
    ShowNoResultsMessage(bool),

    /// Opens the detail overlay with the given view model.
    ShowDetail(BookDetail),

    /// Closes the detail overlay.
    HideDetail,

    /// Swaps the two-color display palette.
    SetPalette(Palette),

    /// Opens the search overlay.
    OpenSearchOverlay,

    /// Moves input focus to the search title field.
    FocusSearchInput,

    /// Closes the search overlay.
    CloseSearchOverlay,

    /// Opens the settings overlay.
    OpenSettingsOverlay,

    /// Closes the settings overlay.
    CloseSettingsOverlay,

    /// Scrolls the list back to the top (after a new search).
    ScrollToTop,
}
