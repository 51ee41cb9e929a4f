//! Simulation API client module

mod client;
mod error;
mod traits;

pub use client::{LoanApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use traits::LoanApi;

#[cfg(test)]
pub use traits::MockLoanApi;
