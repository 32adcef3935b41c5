//! Theme module for quest-mapper
//!
//! This module provides a centralized color palette and styling constants:
//! one accent per domain, one chip color per role, and the muted tones used
//! to de-emphasize filtered stages and domains outside the selected pattern.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::models::Role;

/// Border style used by panels and domain cards
pub const ROUNDED_BORDERS: BorderType = BorderType::Rounded;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color, used for cards (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Focus highlight (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels, hints and disabled controls (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Domain and Role Colors
// ============================================================================

/// Accent color for a domain's color key
pub fn domain_accent(key: &str) -> Color {
    match key {
        "red" => Color::Rgb(248, 113, 113),
        "blue" => Color::Rgb(96, 165, 250),
        "green" => Color::Rgb(74, 222, 128),
        "yellow" => Color::Rgb(250, 204, 21),
        "purple" => Color::Rgb(192, 132, 252),
        "orange" => Color::Rgb(251, 146, 60),
        _ => TEXT_SECONDARY,
    }
}

/// Chip color for a role
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Unlocker => Color::Rgb(56, 189, 248),
        Role::Grind => Color::Rgb(52, 211, 153),
        Role::Support => Color::Rgb(251, 191, 36),
        Role::Reward => Color::Rgb(232, 121, 249),
        Role::Challenge => Color::Rgb(251, 113, 133),
        Role::CoolDown => Color::Rgb(148, 163, 184),
    }
}

/// Apply de-emphasis to `style` when `dimmed`
pub fn dim_if(style: Style, dimmed: bool) -> Style {
    if dimmed {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}
