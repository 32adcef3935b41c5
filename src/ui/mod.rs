//! UI module for quest-mapper
//!
//! This module contains UI rendering functions for the TUI interface:
//! filter control panels, domain cards and the top-level frame layout.

mod controls;
mod grid;
mod helpers;
mod render;

pub use render::render_app;
