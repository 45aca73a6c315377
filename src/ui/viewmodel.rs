//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from session state,
//! following the MVVM pattern. View models are display-ready: author and
//! genre ids are already resolved to names, and the detail subtitle is
//! pre-formatted. They contain no business logic.
//!
//! # Architecture
//!
//! View models are built by the session (`app::state`) and carried to the
//! host inside render commands; the host never sees raw domain records.

/// Display information for one entry in the book list.
///
/// Represents one preview card. The `id` rides along so the host can attach
/// it to the rendered element and return it in a selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPreview {
    /// Book id, echoed back by selection events.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Resolved author display name.
    pub author_name: String,

    /// Cover image URI.
    pub image: String,
}

/// Display information for the detail overlay.
///
/// The subtitle is pre-formatted as `"Author (Year)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    /// Display title.
    pub title: String,

    /// `"Author (Year)"` line shown under the title.
    pub subtitle: String,

    /// Long-form description text.
    pub description: String,

    /// Cover image URI (also used for the blurred backdrop).
    pub image: String,
}

/// One entry of a filter dropdown.
///
/// Option lists lead with the sentinel entry (`"any"` / "All Genres") so the
/// default selection round-trips back through criteria normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Form value submitted when this option is selected.
    pub value: String,

    /// Human-readable label.
    pub label: String,
}

impl FilterOption {
    /// Builds the leading match-all entry for a dropdown.
    #[must_use]
    pub fn any(label: &str) -> Self {
        Self {
            value: "any".to_string(),
            label: label.to_string(),
        }
    }
}
