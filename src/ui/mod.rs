//! UI panel rendering subsystem
//!
//! This module contains all panel rendering logic for the composer GUI:
//! - Header panel (application title, theme selector, error display)
//! - Form panel (text fields, filename controls, generated title)
//! - Preview panel (rendered composite, save trigger, loading screen)
//! - Status bar (canvas info, effective filename, font warning)
//! - Panel manager (panel orchestration and layout)

pub mod form_panel;
pub mod header;
pub mod panel_manager;
pub mod preview_panel;
pub mod status_bar;
