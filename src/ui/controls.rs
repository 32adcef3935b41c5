//! Filter control panels: stages, roles and quest patterns

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{Chip, flow_chips};
use crate::app::App;
use crate::models::{FocusPanel, Role, Stage};
use crate::theme::{
    BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY, role_color,
};

/// Panel frame, highlighted when it has focus
fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .title_style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(BG_SECONDARY))
}

/// Cursor highlight for the focused panel's current entry
fn with_cursor(style: Style, under_cursor: bool) -> Style {
    if under_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn stage_lines(app: &App) -> Vec<Line<'static>> {
    let focused = app.focus == FocusPanel::Stages;
    Stage::ALL
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let enabled = app.filter.stage_enabled(*stage);
            let checkbox = if enabled { "[x] " } else { "[ ] " };
            let color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };
            let style = with_cursor(Style::default().fg(color), focused && i == app.stage_cursor);
            Line::from(Span::styled(format!("{}{}", checkbox, stage.label()), style))
        })
        .collect()
}

fn role_chips(app: &App) -> Vec<Chip> {
    let focused = app.focus == FocusPanel::Roles;
    Role::ALL
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let style = if app.filter.role_enabled(*role) {
                Style::default()
                    .fg(role_color(*role))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };
            let style = with_cursor(style, focused && i == app.role_cursor);
            vec![Span::styled(role.to_string(), style)]
        })
        .collect()
}

fn pattern_chips(app: &App) -> Vec<Chip> {
    let focused = app.focus == FocusPanel::Patterns;
    app.dataset
        .patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| {
            let active = pattern.id == app.filter.active_pattern_id;
            let mut style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            if focused && i == app.pattern_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(TEXT_MUTED)),
                Span::styled(format!(" {} ", pattern.display_label()), style),
            ]
        })
        .collect()
}

/// Stack chips one per line, or flow them when space is tight
fn chip_lines(chips: Vec<Chip>, compact: bool, width: usize) -> Vec<Line<'static>> {
    if compact {
        flow_chips(chips, width, 2)
    } else {
        chips.into_iter().map(Line::from).collect()
    }
}

/// Content of the three panels for a row of `area_width` columns
fn panel_contents(app: &App, area_width: u16) -> [Vec<Line<'static>>; 3] {
    // Each panel gets a third of the row, minus its borders
    let inner_width = (area_width / 3).saturating_sub(2) as usize;
    [
        stage_lines(app),
        chip_lines(role_chips(app), app.embedded, inner_width),
        chip_lines(pattern_chips(app), app.embedded, inner_width),
    ]
}

/// Height the control row needs at `area_width`
pub fn controls_height(app: &App, area_width: u16) -> u16 {
    let tallest = panel_contents(app, area_width)
        .iter()
        .map(|lines| lines.len())
        .max()
        .unwrap_or(0);
    tallest as u16 + 2
}

/// Render the stage, role and pattern panels side by side
pub fn render_controls(area: Rect, app: &App, frame: &mut Frame) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let focus_order = [FocusPanel::Stages, FocusPanel::Roles, FocusPanel::Patterns];
    for ((lines, focus), panel_area) in panel_contents(app, area.width)
        .into_iter()
        .zip(focus_order)
        .zip(panels.iter())
    {
        let block = panel_block(focus.label(), app.focus == focus);
        frame.render_widget(Paragraph::new(lines).block(block), *panel_area);
    }
}
