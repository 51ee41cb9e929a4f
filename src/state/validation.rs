//! Loan form validation and request building

use super::forms::{FieldName, LoanRequestInput};
use super::loan::LoanSimulationRequest;
use chrono::NaiveDate;
use thiserror::Error;

/// Local, synchronous validation failure shown inline under the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A data final deve ser maior que a data inicial.")]
    EndNotAfterStart,
    #[error("A data do primeiro pagamento deve ser maior que a data inicial.")]
    FirstPaymentNotAfterStart,
    #[error("A data do primeiro pagamento deve ser menor que a data final.")]
    FirstPaymentNotBeforeEnd,
    #[error("Preencha o campo {}.", .0.label())]
    MissingField(FieldName),
    #[error("Data inválida em {} (use AAAA-MM-DD).", .0.label())]
    InvalidDate(FieldName),
    #[error("Valor inválido em {}.", .0.label())]
    InvalidAmount(FieldName),
}

impl ValidationError {
    /// Field the error points at, if it concerns a single field
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::MissingField(name) | Self::InvalidDate(name) | Self::InvalidAmount(name) => {
                Some(*name)
            }
            _ => None,
        }
    }
}

const DATE_FIELDS: [FieldName; 3] = [
    FieldName::LoanStartDate,
    FieldName::LoanEndDate,
    FieldName::FirstPaymentDate,
];

/// Check date ordering: `start < first payment < end`.
///
/// Returns Ok while any of the three dates is still empty so partial input
/// does not raise an error. ISO dates compare correctly as strings.
pub fn validate(draft: &LoanRequestInput) -> Result<(), ValidationError> {
    let start = draft.value(FieldName::LoanStartDate);
    let end = draft.value(FieldName::LoanEndDate);
    let first_payment = draft.value(FieldName::FirstPaymentDate);

    if start.is_empty() || end.is_empty() || first_payment.is_empty() {
        return Ok(());
    }

    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }
    if first_payment <= start {
        return Err(ValidationError::FirstPaymentNotAfterStart);
    }
    if first_payment >= end {
        return Err(ValidationError::FirstPaymentNotBeforeEnd);
    }
    Ok(())
}

/// Run every pre-submission check and build the wire request
pub fn prepare_request(draft: &LoanRequestInput) -> Result<LoanSimulationRequest, ValidationError> {
    if let Some(missing) = FieldName::ALL.iter().find(|f| draft.field(**f).is_empty()) {
        return Err(ValidationError::MissingField(*missing));
    }

    for name in DATE_FIELDS {
        if !is_iso_date(draft.value(name)) {
            return Err(ValidationError::InvalidDate(name));
        }
    }

    validate(draft)?;

    let principal_amount = parse_amount(draft, FieldName::PrincipalAmount)?;
    let rate_percent = parse_amount(draft, FieldName::InterestRate)?;

    Ok(LoanSimulationRequest {
        loan_start_date: draft.value(FieldName::LoanStartDate).to_string(),
        loan_end_date: draft.value(FieldName::LoanEndDate).to_string(),
        first_payment_date: draft.value(FieldName::FirstPaymentDate).to_string(),
        principal_amount,
        interest_rate: percent_to_rate(rate_percent),
    })
}

/// Convert a percentage to a fractional rate rounded to 6 decimal places.
///
/// Rounds the exact binary value of the rate, so a scaled product that lands
/// on a half step does not round up.
pub fn percent_to_rate(percent: f64) -> f64 {
    let rate = percent / 100.0;
    format!("{rate:.6}").parse().unwrap_or(rate)
}

/// Exact `YYYY-MM-DD` form naming a real calendar day
fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn parse_amount(draft: &LoanRequestInput, name: FieldName) -> Result<f64, ValidationError> {
    draft
        .value(name)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or(ValidationError::InvalidAmount(name))
}
