//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `loan_form`: Loan simulation form

mod field_renderer;
mod loan_form;

pub use loan_form::{draw_loan_form, FORM_HEIGHT};
