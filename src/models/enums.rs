//! Enums used throughout the Quest Mapper
//!
//! This module contains the enum types used for focus handling and output
//! selection.

/// Panel that currently receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    #[default]
    Stages,   // Stage filter checkboxes
    Roles,    // Role filter chips
    Patterns, // Quest pattern buttons
    Grid,     // Domain grid (scrolling)
}

impl FocusPanel {
    pub fn next(&self) -> Self {
        match self {
            FocusPanel::Stages => FocusPanel::Roles,
            FocusPanel::Roles => FocusPanel::Patterns,
            FocusPanel::Patterns => FocusPanel::Grid,
            FocusPanel::Grid => FocusPanel::Stages,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FocusPanel::Stages => FocusPanel::Grid,
            FocusPanel::Roles => FocusPanel::Stages,
            FocusPanel::Patterns => FocusPanel::Roles,
            FocusPanel::Grid => FocusPanel::Patterns,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FocusPanel::Stages => "Stage Filter",
            FocusPanel::Roles => "Role Filter",
            FocusPanel::Patterns => "Highlight Quest Pattern",
            FocusPanel::Grid => "Grid",
        }
    }
}

/// Output format for non-interactive snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SnapshotFormat {
    Text,
    Json,
}
