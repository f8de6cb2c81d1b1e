use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use dialfield_core::Indicator;

use crate::app::{App, Focus};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(size);

    let mut lines = vec![
        phone_line(app),
        helper_line(app),
        Line::from(""),
        field_line("Note", &app.note_value, app.focus == Focus::Note),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let block = Block::default().borders(Borders::ALL).title("Contact");
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Tab switch field  Ctrl+U clear  Ctrl+D toggle disabled  Esc quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hint, chunks[1]);
}

fn phone_line(app: &App) -> Line<'static> {
    let label = if app.field.disabled() {
        "Phone / SID (disabled)"
    } else {
        "Phone / SID"
    };
    let style = if app.focus == Focus::Phone {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.phone_value.clone(), style),
    ];
    if let Some(badge) = indicator_span(app.field.indicator(&app.phone_value)) {
        spans.push(Span::raw("  "));
        spans.push(badge);
    }
    Line::from(spans)
}

fn indicator_span(indicator: Indicator) -> Option<Span<'static>> {
    match indicator {
        Indicator::None => None,
        Indicator::Valid => Some(Span::styled(
            "✓",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Indicator::Invalid => Some(Span::styled(
            "✗",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    }
}

fn helper_line(app: &App) -> Line<'static> {
    let text = app
        .field
        .helper_text(app.helper_override.as_deref())
        .to_string();
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), style),
    ])
}
