//! Display theme state and palette resolution.
//!
//! This module defines the binary day/night theme and the two-color palette
//! each theme resolves to. The theme starts from the host's dark-mode
//! preference (consumed once at startup) and changes only on settings-form
//! submission — there is no live preview and no automatic follow-the-system
//! transition afterwards.

use serde::{Deserialize, Serialize};

/// Dark ink color used as foreground in day mode, `(10, 10, 20)`.
const INK: Rgb = Rgb(10, 10, 20);

/// Light paper color used as background in day mode, `(255, 255, 255)`.
const PAPER: Rgb = Rgb(255, 255, 255);

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Binary display mode.
///
/// Both states are valid at any time; there are no invalid transitions and
/// no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Day,
    /// Light text on a dark background.
    Night,
}

/// The two-color palette a theme resolves to.
///
/// Hosts swap these two colors wholesale when executing a `SetPalette`
/// render command; no other colors are themed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// The "dark" role color (foreground in day mode).
    pub dark: Rgb,
    /// The "light" role color (background in day mode).
    pub light: Rgb,
}

impl Theme {
    /// Picks the startup theme from the host's dark-mode preference.
    ///
    /// The preference is an external signal consumed exactly once; later
    /// changes to the environment do not retrigger this.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookbrowse::ui::Theme;
    ///
    /// assert_eq!(Theme::from_dark_preference(true), Theme::Night);
    /// assert_eq!(Theme::from_dark_preference(false), Theme::Day);
    /// ```
    #[must_use]
    pub fn from_dark_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Night
        } else {
            Self::Day
        }
    }

    /// Normalizes a settings-form value into a theme.
    ///
    /// `"night"` (case-insensitive) selects [`Theme::Night`]; anything else
    /// falls back to [`Theme::Day`].
    #[must_use]
    pub fn from_form_value(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("night") {
            Self::Night
        } else {
            Self::Day
        }
    }

    /// Resolves the two-color palette for this theme.
    ///
    /// Night mode inverts the day palette's role assignment.
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Day => Palette {
                dark: INK,
                light: PAPER,
            },
            Self::Night => Palette {
                dark: PAPER,
                light: INK,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_preference_selects_night() {
        assert_eq!(Theme::from_dark_preference(true), Theme::Night);
        assert_eq!(Theme::from_dark_preference(false), Theme::Day);
    }

    #[test]
    fn form_value_normalizes_to_theme() {
        assert_eq!(Theme::from_form_value("night"), Theme::Night);
        assert_eq!(Theme::from_form_value("NIGHT"), Theme::Night);
        assert_eq!(Theme::from_form_value("day"), Theme::Day);
        assert_eq!(Theme::from_form_value("anything-else"), Theme::Day);
    }

    #[test]
    fn night_palette_inverts_day_palette() {
        let day = Theme::Day.palette();
        let night = Theme::Night.palette();
        assert_eq!(day.dark, night.light);
        assert_eq!(day.light, night.dark);
        assert_eq!(day.dark, Rgb(10, 10, 20));
        assert_eq!(day.light, Rgb(255, 255, 255));
    }
}
