//! Loan form controller
//!
//! Owns the draft input, the submission lifecycle and the last simulated
//! schedule. A submission is split in two halves so the UI can paint the
//! loading state and keep reading input while the request is in flight:
//! [`FormController::begin_submission`] validates and moves to `Loading`,
//! [`FormController::dispatch`] builds the request future and
//! [`FormController::finish_submission`] settles with its result.
//! [`FormController::submit`] runs all three in one call.

use crate::api::{ApiError, LoanApi};
use crate::state::{
    is_strictly_ascending, prepare_request, FieldName, Form, InstallmentRow, LoanRequestInput,
    LoanSimulationRequest, SubmissionError, SubmissionState,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Rows moved by a page scroll in the schedule table
pub const PAGE_SIZE: usize = 10;

/// In-flight simulation request, independent of the controller's borrow
pub type PendingSimulation =
    Pin<Box<dyn Future<Output = Result<Vec<InstallmentRow>, ApiError>> + Send>>;

pub struct FormController {
    api: Arc<dyn LoanApi>,
    pub draft: LoanRequestInput,
    pub state: SubmissionState,
    /// Last successful schedule; replaced wholesale by the next success
    schedule: Vec<InstallmentRow>,
    /// First visible row of the schedule table
    scroll_offset: usize,
}

impl FormController {
    pub fn new(api: Box<dyn LoanApi>) -> Self {
        Self {
            api: Arc::from(api),
            draft: LoanRequestInput::new(),
            state: SubmissionState::Idle,
            schedule: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn schedule(&self) -> &[InstallmentRow] {
        &self.schedule
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Replace one field of the draft and clear any displayed error.
    /// The rendered schedule is kept.
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.draft.set(name, value);
        self.clear_error();
    }

    /// Append a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(name) = self.draft.active_field_name() else {
            return;
        };
        let mut field = self.draft.field(name).clone();
        if field.push_char(c) {
            self.update_field(name, field.as_text());
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(name) = self.draft.active_field_name() else {
            return;
        };
        let mut field = self.draft.field(name).clone();
        if field.pop_char() {
            self.update_field(name, field.as_text());
        }
    }

    pub fn next_field(&mut self) {
        self.draft.next_field();
    }

    pub fn focus_field(&mut self, name: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.draft.set_active_field(index);
        }
    }

    pub fn prev_field(&mut self) {
        self.draft.prev_field();
    }

    /// Return to idle if an error is displayed
    pub fn clear_error(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Invalid(_) | SubmissionState::Failed(_)
        ) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validate the draft and enter `Loading`.
    ///
    /// Returns the request to send, or None when a submission is already in
    /// flight or the draft failed validation (the error is kept in `state`).
    pub fn begin_submission(&mut self) -> Option<LoanSimulationRequest> {
        if self.is_loading() {
            tracing::debug!("Submission already in flight");
            return None;
        }

        match prepare_request(&self.draft) {
            Ok(request) => {
                tracing::info!(
                    start = %request.loan_start_date,
                    end = %request.loan_end_date,
                    "Submitting loan simulation"
                );
                self.state = SubmissionState::Loading;
                Some(request)
            }
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    field = err.field().map(|f| f.as_str()),
                    "Loan form rejected"
                );
                if let Some(name) = err.field() {
                    self.focus_field(name);
                }
                self.state = SubmissionState::Invalid(err);
                None
            }
        }
    }

    /// Settle a submission started with [`Self::begin_submission`].
    ///
    /// Success replaces the schedule; failure keeps the previous one.
    /// Always leaves the `Loading` state.
    pub fn finish_submission(&mut self, result: Result<Vec<InstallmentRow>, ApiError>) {
        match result {
            Ok(rows) => {
                if !is_strictly_ascending(&rows) {
                    tracing::warn!("Installment numbers are not strictly ascending");
                }
                self.schedule = rows;
                self.scroll_offset = 0;
                self.state = SubmissionState::Succeeded;
            }
            Err(err) => {
                tracing::error!(error = %err, "Loan simulation failed");
                self.state = SubmissionState::Failed(SubmissionError::from(err));
            }
        }
    }

    /// Build the API call for a request returned by [`Self::begin_submission`].
    ///
    /// The future owns its request and a handle to the client, so the caller
    /// can keep handling input while it runs.
    pub fn dispatch(&self, request: LoanSimulationRequest) -> PendingSimulation {
        let api = Arc::clone(&self.api);
        Box::pin(async move { api.simulate_loan(&request).await })
    }

    /// Validate, send and settle in one step.
    ///
    /// Programmatic entry point for callers that do not need to redraw while
    /// the request runs; the terminal app drives the steps itself.
    /// Returns Ok(false) when nothing was sent (validation error or a
    /// submission already in flight).
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> Result<bool, &SubmissionError> {
        let Some(request) = self.begin_submission() else {
            return Ok(false);
        };
        let result = self.dispatch(request).await;
        self.finish_submission(result);
        match &self.state {
            SubmissionState::Failed(err) => Err(err),
            _ => Ok(true),
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.schedule.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + rows).min(max);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.schedule.len().saturating_sub(1);
    }
}
