//! User interface layer: view models and theming.
//!
//! This module owns everything the host's display layer consumes directly:
//! pre-resolved view models and the day/night theme with its palette. The
//! rendering itself lives on the host side of the render-command boundary;
//! this crate only decides *what* to draw, never *how*.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`theme`]: Day/night theme state and palette resolution

pub mod theme;
pub mod viewmodel;

pub use theme::{Palette, Rgb, Theme};
pub use viewmodel::{BookDetail, BookPreview, FilterOption};
