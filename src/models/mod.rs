//! Data models for the Quest Mapper
//!
//! This module contains the core data structures:
//! - Roles and stages, the two closed filter universes
//! - Domains, activities and quest patterns
//! - Enums for focus and output handling

pub mod domain;
pub mod enums;
pub mod role;
pub mod stage;

// Re-exports for convenient access
pub use domain::{Activity, Domain, Pattern};
pub use enums::{FocusPanel, SnapshotFormat};
pub use role::Role;
pub use stage::{STAGE_COUNT, Stage};
