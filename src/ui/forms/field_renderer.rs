//! Field rendering utilities for forms

use crate::schema::Service;
use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to draw `field`, borders included
pub fn field_height(field: &FormField) -> u16 {
    match field.value {
        FieldValue::Choices(_) => Service::ALL.len() as u16 + 2,
        _ => 3,
    }
}

fn border_style(field: &FormField, is_active: bool) -> Style {
    if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered block titled with the label; an inline error sits on the bottom border
fn field_block(field: &FormField, is_active: bool) -> Block<'static> {
    let marker = if field.required { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let block = field_block(field, is_active);
    let content = match &field.value {
        FieldValue::Text(text) => text_line(field, text, is_active),
        FieldValue::Toggle(checked) => toggle_line(*checked, is_active),
        FieldValue::Choices(choices) => {
            let lines: Vec<Line> = Service::ALL
                .iter()
                .enumerate()
                .map(|(idx, service)| {
                    let mark = if choices.is_selected(*service) { "[x]" } else { "[ ]" };
                    let style = if is_active && idx == choices.cursor {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(format!("{mark} {}", service.label()), style))
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn text_line<'a>(field: &'a FormField, text: &'a str, is_active: bool) -> Line<'a> {
    let cursor = if is_active { "▌" } else { "" };
    let mut spans = Vec::with_capacity(2);

    if text.is_empty() {
        if let Some(placeholder) = &field.placeholder {
            spans.push(Span::styled(
                placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text, style));
    }
    spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    Line::from(spans)
}

fn toggle_line(checked: bool, is_active: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(Span::styled(
        format!("{mark} I accept the terms and conditions"),
        style,
    ))
}
