//! Submission lifecycle state

use super::validation::ValidationError;
use crate::api::ApiError;
use thiserror::Error;

/// Remote failure of a submission; displays the generic user-facing message
#[derive(Debug, Error)]
#[error("Erro ao calcular empréstimo")]
pub struct SubmissionError {
    #[source]
    pub source: ApiError,
}

impl SubmissionError {
    /// Diagnostic line describing the underlying failure
    pub fn detail(&self) -> String {
        self.source.to_string()
    }
}

impl From<ApiError> for SubmissionError {
    fn from(source: ApiError) -> Self {
        Self { source }
    }
}

/// Lifecycle of the loan form submission
#[derive(Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Pre-submission checks failed; nothing was sent
    Invalid(ValidationError),
    Succeeded,
    Failed(SubmissionError),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn submission_error(&self) -> Option<&SubmissionError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Label of the submit button
    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            "Calculando..."
        } else {
            "Calcular Empréstimo"
        }
    }
}
