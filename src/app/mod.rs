//! Application-level modules for the thumbnail composer GUI.
//!
//! This module contains the main application coordinator, persistence
//! coordinators, and centralized state management.

mod app_state;
mod application_coordinator;
mod form_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use form_coordinator::FormCoordinator;
pub use theme_coordinator::ThemeCoordinator;
