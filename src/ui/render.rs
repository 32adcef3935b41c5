//! Top-level frame layout

use ratatui::{prelude::*, widgets::Paragraph};

use super::controls::{controls_height, render_controls};
use super::grid::render_grid;
use crate::app::App;
use crate::theme::{BG_PRIMARY, CYAN_PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

const HEADING: &str = "Quest Mapper";

const KEY_HINTS: &str =
    " Tab: Focus | ←/→: Move | Space: Toggle | 1-3: Pattern | r: Reset | q: Quit ";

const EMBED_TIP: &str = "Tip: set QUERY_STRING=embed=1 or pass --embed for a compact layout.";

/// Draw the whole application into `frame`
pub fn render_app(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Paragraph::new("").style(Style::default().bg(BG_PRIMARY)), area);

    // Embedded hosts get no heading, no tip and no outer margin
    let (heading_height, tip_height, margin, card_gap) = if app.embedded {
        (0, 0, 0, 0)
    } else {
        (1, 1, 1, 1)
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(margin)
        .constraints([
            Constraint::Length(heading_height),
            Constraint::Length(controls_height(app, area.width.saturating_sub(margin * 2))),
            Constraint::Min(3),
            Constraint::Length(tip_height),
            Constraint::Length(1),
        ])
        .split(area);

    if !app.embedded {
        let heading = Paragraph::new(Line::from(Span::styled(
            HEADING,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, main_layout[0]);
    }

    render_controls(main_layout[1], app, frame);

    let view = app.view();
    let first = app.grid_scroll_offset.min(view.domains.len().saturating_sub(1));
    let drawn = render_grid(main_layout[2], &view.domains, first, card_gap, frame);

    if !app.embedded {
        let tip = Paragraph::new(Line::from(Span::styled(
            EMBED_TIP,
            Style::default().fg(TEXT_MUTED),
        )));
        frame.render_widget(tip, main_layout[3]);
    }

    // Bottom bar with keybinding hints and the visible domain range
    let range = if drawn == 0 {
        format!("0 of {}", view.domains.len())
    } else {
        format!("{}-{} of {}", first + 1, first + drawn, view.domains.len())
    };
    let bottom_bar = Paragraph::new(Line::from(vec![
        Span::raw(KEY_HINTS),
        Span::raw(format!("| Focus: {} | Domains {} ", app.focus.label(), range)),
    ]))
    .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(bottom_bar, main_layout[4]);
}
