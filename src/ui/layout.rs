//! Layout components (page frame, status bar)

use super::forms::FORM_HEIGHT;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Page title
const TITLE: &str = " Calculadora de Empréstimos ";

/// Split the screen into form area, schedule area and status bar
pub fn create_layout(frame: &mut Frame) -> (Rect, Rect, Rect) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT + 2), // Form with borders
            Constraint::Min(0),                  // Schedule
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

    let block = Block::default()
        .title(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let form_area = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    (form_area, chunks[1], chunks[2])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Request status
    let status = if app.controller.is_loading() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else if app.controller.state.submission_error().is_some() {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(status);

    spans.push(Span::styled(
        key_hints(),
        Style::default().fg(Color::Gray),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.api_base_url.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the form screen
fn key_hints() -> String {
    format!("Tab:next  Enter:next/submit  {SUBMIT_SHORTCUT}:submit  PgUp/PgDn:scroll  Esc:quit")
}
