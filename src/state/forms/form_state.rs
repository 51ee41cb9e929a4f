//! Loan form state and field navigation

use super::field::{FieldName, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// User-entered draft of a loan simulation request
#[derive(Debug, Clone)]
pub struct LoanRequestInput {
    pub loan_start_date: FormField,
    pub loan_end_date: FormField,
    pub first_payment_date: FormField,
    pub principal_amount: FormField,
    pub interest_rate: FormField,
    /// Focused row; index 5 is the submit button
    pub active_field_index: usize,
}

/// Index of the submit button row
pub const SUBMIT_BUTTON_INDEX: usize = 5;

impl LoanRequestInput {
    pub fn new() -> Self {
        Self {
            loan_start_date: FormField::new(FieldName::LoanStartDate),
            loan_end_date: FormField::new(FieldName::LoanEndDate),
            first_payment_date: FormField::new(FieldName::FirstPaymentDate),
            principal_amount: FormField::new(FieldName::PrincipalAmount),
            interest_rate: FormField::new(FieldName::InterestRate),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::LoanStartDate => &self.loan_start_date,
            FieldName::LoanEndDate => &self.loan_end_date,
            FieldName::FirstPaymentDate => &self.first_payment_date,
            FieldName::PrincipalAmount => &self.principal_amount,
            FieldName::InterestRate => &self.interest_rate,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::LoanStartDate => &mut self.loan_start_date,
            FieldName::LoanEndDate => &mut self.loan_end_date,
            FieldName::FirstPaymentDate => &mut self.first_payment_date,
            FieldName::PrincipalAmount => &mut self.principal_amount,
            FieldName::InterestRate => &mut self.interest_rate,
        }
    }

    /// Text value of a field
    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    /// Replace the value of one field
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value.into());
    }

    /// Name of the focused field, or None when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }
}

impl Default for LoanRequestInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoanRequestInput {
    fn field_count(&self) -> usize {
        6 // five inputs plus the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = LoanRequestInput::new();
        assert!(FieldName::ALL.iter().all(|f| form.value(*f).is_empty()));
        assert_eq!(form.active_field_name(), Some(FieldName::LoanStartDate));
    }

    #[test]
    fn test_next_field_wraps_through_button() {
        let mut form = LoanRequestInput::new();
        for _ in 0..5 {
            form.next_field();
        }
        assert!(form.is_submit_focused());
        assert_eq!(form.active_field_name(), None);
        form.next_field();
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_prev_field_wraps_to_button() {
        let mut form = LoanRequestInput::new();
        form.prev_field();
        assert!(form.is_submit_focused());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = LoanRequestInput::new();
        form.set_active_field(42);
        assert_eq!(form.active_field(), SUBMIT_BUTTON_INDEX);
    }

    #[test]
    fn test_get_field_by_index() {
        let mut form = LoanRequestInput::new();
        form.set(FieldName::InterestRate, "12");
        assert_eq!(form.get_field(4).map(|f| f.as_text()), Some("12"));
        assert!(form.get_field(SUBMIT_BUTTON_INDEX).is_none());
    }
}
