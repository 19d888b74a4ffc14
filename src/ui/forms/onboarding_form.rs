//! Onboarding form rendering

use super::field_renderer::{draw_field, field_height};
use crate::state::{Form, OnboardingForm, SubmissionState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::ops::Range;

/// Height of the error banner when a submission failed
const BANNER_HEIGHT: u16 = 3;

/// Rows that fit in `available`, keeping `active` on screen.
///
/// Rows above the active one are preferred, so the window only scrolls once
/// focus moves past the bottom edge.
fn visible_rows(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let mut start = active.min(heights.len() - 1);
    let mut used = heights[start];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    let mut end = start.max(active) + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    start..end
}

/// Draw the form, its error banner and the submit control
pub fn draw(frame: &mut Frame, area: Rect, form: &OnboardingForm, state: &SubmissionState) {
    let banner = state.error_message();

    // One row per field, then the submit button
    let mut heights: Vec<u16> = form.fields().iter().map(field_height).collect();
    heights.push(BUTTON_HEIGHT);

    let inner_height = area.height.saturating_sub(2);
    let available = if banner.is_some() {
        inner_height.saturating_sub(BANNER_HEIGHT)
    } else {
        inner_height
    };
    let rows = visible_rows(&heights, form.active_field(), available);

    let mut outer = Block::default()
        .title(Span::styled(
            " Client Onboarding ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    if rows.start > 0 || rows.end < heights.len() {
        outer = outer.title_bottom(Line::from(" ↑↓ more fields ").right_aligned());
    }
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let mut constraints = Vec::with_capacity(rows.len() + 2);
    if banner.is_some() {
        constraints.push(Constraint::Length(BANNER_HEIGHT));
    }
    constraints.extend(heights[rows.clone()].iter().map(|h| Constraint::Length(*h)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut slot = 0;
    if let Some(message) = banner {
        draw_error_banner(frame, chunks[slot], message);
        slot += 1;
    }

    let busy = state.is_submitting();
    for idx in rows {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, chunks[slot], field, form.active_field() == idx);
        } else {
            let label = if busy {
                "Processing..."
            } else {
                "Submit Application"
            };
            render_button(
                frame,
                chunks[slot],
                label,
                form.is_submit_row_active(),
                !busy,
            );
        }
        slot += 1;
    }
}

fn draw_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}
