//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod schedule;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, schedule_area, status_area) = layout::create_layout(frame);

    forms::draw_loan_form(frame, form_area, &app.controller);
    schedule::draw_schedule(
        frame,
        schedule_area,
        app.controller.schedule(),
        app.controller.scroll_offset(),
    );
    layout::draw_status_bar(frame, status_area, app);

    // Failure dialog on top of everything
    if let Some(err) = app.controller.state.submission_error() {
        components::render_error_dialog(frame, err);
    }
}
