//! Trait abstraction for the simulation API to enable mocking in tests

use super::ApiError;
use crate::state::{InstallmentRow, LoanSimulationRequest};
use async_trait::async_trait;

/// Remote loan simulation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanApi: Send + Sync {
    /// Simulate a loan and return its installment schedule in server order
    async fn simulate_loan(
        &self,
        request: &LoanSimulationRequest,
    ) -> Result<Vec<InstallmentRow>, ApiError>;
}
