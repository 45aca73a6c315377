//! Overlay state for the browsing session.
//!
//! This module defines which modal overlay is currently open. The search and
//! settings overlays are mutually exclusive; the detail overlay is tracked
//! separately through the session's selected book, since it layers over the
//! list rather than replacing it.

/// Which modal overlay is currently open.
///
/// Opening one overlay implicitly closes the other; submit and cancel events
/// both return to [`Overlay::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    /// No overlay open; the list has focus.
    #[default]
    None,

    /// The search form overlay is open.
    ///
    /// Opened by `Event::OpenSearch`, closed by search submit or cancel.
    Search,

    /// The settings (theme) form overlay is open.
    ///
    /// Opened by `Event::OpenSettings`, closed by theme submit or cancel.
    Settings,
}
