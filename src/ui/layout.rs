//! Layout components (content area, status bar)

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current submission state
pub fn state_hints(state: &SubmissionState) -> String {
    match state {
        SubmissionState::Idle | SubmissionState::Failure(_) => format!(
            "Tab/↑↓: move | Space: toggle | ←→: services | {SUBMIT_SHORTCUT}: submit | Esc: quit"
        ),
        SubmissionState::Submitting(_) => "Submitting, please wait...".to_string(),
        SubmissionState::Success(_) => "Enter/n: submit another response | q: quit".to_string(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &SubmissionState, endpoint: &str) {
    let indicator = match state {
        SubmissionState::Idle => Span::styled(" ○ ", Style::default().fg(Color::White)),
        SubmissionState::Submitting(_) => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionState::Success(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionState::Failure(_) => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };

    let spans = vec![
        indicator,
        Span::styled(state_hints(state), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(format!("→ {endpoint}"), Style::default().fg(Color::Blue)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
