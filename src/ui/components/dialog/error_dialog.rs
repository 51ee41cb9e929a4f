//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::SubmissionError;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submission failure dialog centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error: &SubmissionError) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Pressione "),
        Span::styled("Enter", key_style),
        Span::raw(" ou "),
        Span::styled("Esc", key_style),
        Span::raw(" para fechar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Erro",
            color: Color::Red,
            paragraphs: vec![error.to_string(), error.detail()],
            hint: Some(hint),
            max_width: 60,
        },
    );
}
