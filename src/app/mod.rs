//! Application layer coordinating state, events, and render commands.
//!
//! This module defines the core application logic layer, sitting between the
//! embedding host and the domain/ui layers. It implements the event-driven
//! architecture that powers the interactive browser.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Render Commands → Host Display
//! ```
//!
//! # Modules
//!
//! - [`commands`]: Render commands emitted across the render-adapter boundary
//! - [`events`]: Input events consumed by the session
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Overlay state
//! - [`pagination`]: Page-window bookkeeping over the current match set
//! - [`state`]: Central session state container and view model computation

pub mod commands;
pub mod events;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;

pub use commands::{ListMode, RenderCommand};
pub use events::Event;
pub use handler::handle_event;
pub use modes::Overlay;
pub use pagination::Pagination;
pub use state::BrowsingSession;
