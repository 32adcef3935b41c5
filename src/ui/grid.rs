//! Domain card rendering functions
//!
//! One card per domain, in derived order. The card title is the domain label
//! and the badge on the right is its step annotation. Inside, the three stage
//! columns sit side by side when there is room and stack otherwise. Filtering
//! never removes a card or a column: disabled stages and domains outside the
//! selected pattern are only dimmed.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{Chip, flow_chips, truncate};
use crate::models::Activity;
use crate::theme::{
    BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
    dim_if, domain_accent, role_color,
};
use crate::view::{DomainView, StageView};

/// Narrowest stage column before the card switches to stacked stages
pub const MIN_COLUMN_WIDTH: u16 = 22;

fn activity_chip(activity: &Activity) -> Chip {
    vec![
        Span::styled("[", Style::default().fg(TEXT_MUTED)),
        Span::styled(activity.name, Style::default().fg(TEXT_PRIMARY)),
        Span::raw(" "),
        Span::styled(
            activity.role.code(),
            Style::default()
                .fg(role_color(activity.role))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(TEXT_MUTED)),
    ]
}

/// Stage label followed by its chips, flowed to `width`
fn stage_lines(stage: &StageView, width: u16) -> Vec<Line<'static>> {
    let dimmed = !stage.enabled;
    let label_style = dim_if(
        Style::default()
            .fg(TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD),
        dimmed,
    );

    let mut lines = vec![Line::from(Span::styled(
        truncate(stage.stage.label(), width as usize),
        label_style,
    ))];

    let chips = stage.activities.iter().map(|a| activity_chip(a)).collect();
    for line in flow_chips(chips, width as usize, 1) {
        lines.push(if dimmed {
            line.patch_style(dim_if(Style::default(), true))
        } else {
            line
        });
    }
    lines
}

/// Whether stage columns fit side by side in a card `inner_width` wide
fn fits_columns(inner_width: u16) -> bool {
    inner_width >= MIN_COLUMN_WIDTH * 3
}

/// Width of one stage column inside a card `inner_width` wide
fn column_width(inner_width: u16) -> u16 {
    (inner_width / 3).saturating_sub(1)
}

/// Height of a domain card (borders included) at `card_width`
pub fn card_height(domain: &DomainView, card_width: u16) -> u16 {
    let inner_width = card_width.saturating_sub(2);
    let content = if fits_columns(inner_width) {
        let width = column_width(inner_width);
        domain
            .stages
            .iter()
            .map(|s| stage_lines(s, width).len())
            .max()
            .unwrap_or(0)
    } else {
        domain
            .stages
            .iter()
            .map(|s| stage_lines(s, inner_width).len())
            .sum()
    };
    content as u16 + 2
}

fn annotation_badge(domain: &DomainView) -> Line<'static> {
    let accent = domain_accent(domain.key);
    let style = if domain.in_pattern {
        Style::default()
            .fg(Color::Black)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY).bg(BORDER_SUBTLE)
    };
    Line::from(Span::styled(format!(" {} ", domain.annotation), style)).right_aligned()
}

/// Render a single domain card
pub fn render_domain_card(area: Rect, domain: &DomainView, frame: &mut Frame) {
    let dimmed = !domain.in_pattern;
    let accent = domain_accent(domain.key);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", domain.initials),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", domain.label),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
    ]);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(dim_if(Style::default().fg(accent), dimmed))
        .title(title)
        .title(annotation_badge(domain))
        .style(dim_if(Style::default().bg(BG_SECONDARY), dimmed));

    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    if fits_columns(inner_area.width) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner_area);
        let width = column_width(inner_area.width);
        for (stage, column) in domain.stages.iter().zip(columns.iter()) {
            let paragraph = Paragraph::new(stage_lines(stage, width));
            frame.render_widget(paragraph, *column);
        }
    } else {
        let lines: Vec<Line<'static>> = domain
            .stages
            .iter()
            .flat_map(|s| stage_lines(s, inner_area.width))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

/// Render domain cards from `first` downward until `area` is full.
/// Returns how many cards were drawn.
pub fn render_grid(
    area: Rect,
    domains: &[DomainView],
    first: usize,
    gap: u16,
    frame: &mut Frame,
) -> usize {
    let mut y = area.y;
    let bottom = area.y + area.height;
    let mut drawn = 0;

    for domain in domains.iter().skip(first) {
        if bottom.saturating_sub(y) < 3 {
            break;
        }
        let height = card_height(domain, area.width).min(bottom - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        render_domain_card(card_area, domain, frame);
        drawn += 1;
        y = y.saturating_add(height + gap);
        if y >= bottom {
            break;
        }
    }

    drawn
}
