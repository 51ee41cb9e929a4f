//! Application state and key handling

use crate::api::LoanApi;
use crate::controller::{FormController, PendingSimulation, PAGE_SIZE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Loan form and simulation state
    pub controller: FormController,
    /// API base URL shown in the status bar
    pub api_base_url: String,
    /// Simulation request in flight; first polled after the loading frame is drawn
    in_flight: Option<PendingSimulation>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Box<dyn LoanApi>, api_base_url: String) -> Self {
        Self {
            controller: FormController::new(api),
            api_base_url,
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn has_pending_submission(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Drive the in-flight request for at most `wait`.
    ///
    /// Returns true once the request has settled the form. Until then the
    /// form stays `Loading` and key presses are dropped by [`Self::handle_key`].
    pub async fn poll_submission(&mut self, wait: Duration) -> bool {
        let Some(request) = self.in_flight.as_mut() else {
            return false;
        };
        let outcome = tokio::time::timeout(wait, request).await;
        match outcome {
            Ok(result) => {
                self.in_flight = None;
                self.controller.finish_submission(result);
                true
            }
            Err(_) => false,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Failure dialog is modal
        if self.controller.state.submission_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.clear_error();
            }
            return;
        }

        if self.controller.is_loading() {
            return;
        }

        let submit_modifier = key.modifiers.contains(crate::platform::SUBMIT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if submit_modifier => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.controller.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.controller.prev_field(),
            KeyCode::Enter if self.controller.draft.is_submit_focused() => self.submit(),
            KeyCode::Enter => self.controller.next_field(),
            KeyCode::PageDown => self.controller.scroll_down(PAGE_SIZE),
            KeyCode::PageUp => self.controller.scroll_up(PAGE_SIZE),
            KeyCode::Home => self.controller.scroll_to_top(),
            KeyCode::End => self.controller.scroll_to_bottom(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.input_char(c)
            }
            KeyCode::Backspace => self.controller.backspace(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if let Some(request) = self.controller.begin_submission() {
            self.in_flight = Some(self.controller.dispatch(request));
        }
    }
}
