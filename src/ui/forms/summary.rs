//! Confirmation summary shown after a successful submission

use crate::state::Accepted;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Group digits in thousands, e.g. 1000000 -> "1,000,000"
pub fn format_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

/// Lines of the summary, in display order
pub fn summary_lines(accepted: &Accepted) -> Vec<Line<'static>> {
    let data = &accepted.data;
    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Form submitted successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Name", data.full_name.clone()),
        row("Email", data.email.clone()),
        row("Company", data.company_name.clone()),
        row("Services", data.services_display()),
    ];
    if let Some(budget) = data.budget_usd {
        lines.push(row("Budget", format!("${}", format_thousands(budget))));
    }
    lines.push(row("Start Date", format_date(data.project_start_date)));

    if let Some(message) = &accepted.receipt.message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to submit another response"),
    ]));
    lines
}

pub fn draw(frame: &mut Frame, area: Rect, accepted: &Accepted) {
    let block = Block::default()
        .title(" Client Onboarding ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(Paragraph::new(summary_lines(accepted)).block(block), area);
}
