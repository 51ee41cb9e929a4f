//! Form domain layer
//!
//! Type-safe field values and the loan request draft.

mod field;
mod form_state;

pub use field::{FieldName, FormField};
pub use form_state::{Form, LoanRequestInput};
