//! Loan simulation form rendering

use super::field_renderer::draw_field;
use crate::controller::FormController;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Width of the submit button
const BUTTON_WIDTH: u16 = 26;

/// Rows used by the form: two field rows, the error line and the button
pub const FORM_HEIGHT: u16 = 3 + 3 + 1 + BUTTON_HEIGHT;

/// Draw fields, the inline validation message and the submit button
pub fn draw_loan_form(frame: &mut Frame, area: Rect, controller: &FormController) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(area);

    let dates = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let amounts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    let slots = [dates[0], dates[1], amounts[0], amounts[1], amounts[2]];
    let draft = &controller.draft;
    for (index, slot) in slots.into_iter().enumerate() {
        if let Some(field) = draft.get_field(index) {
            draw_field(frame, slot, field, draft.active_field() == index);
        }
    }

    if let Some(err) = controller.state.validation_error() {
        let message = Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(message, rows[2]);
    }

    let button_area = Rect {
        x: rows[3].x,
        width: BUTTON_WIDTH.min(rows[3].width),
        ..rows[3]
    };
    render_button(
        frame,
        button_area,
        controller.state.button_label(),
        draft.is_submit_focused(),
        !controller.is_loading(),
    );
}
