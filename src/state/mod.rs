//! Application state module

mod forms;
mod loan;
mod submission;
mod validation;

pub use forms::*;
pub use loan::*;
pub use submission::*;
pub use validation::*;
