//! Loan simulation wire types

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/loans/simulate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSimulationRequest {
    pub loan_start_date: String,
    pub loan_end_date: String,
    pub first_payment_date: String,
    pub principal_amount: f64,
    /// Fractional rate, e.g. 0.05 for 5%
    pub interest_rate: f64,
}

/// One installment of the simulated schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentRow {
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub principal_amount: Option<f64>,
    #[serde(default)]
    pub outstanding_balance: Option<f64>,
    pub installment_number: u32,
    #[serde(default)]
    pub installment_value: Option<f64>,
    #[serde(default)]
    pub principal: Option<f64>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub provision: Option<f64>,
    #[serde(default)]
    pub accrued_interest: Option<f64>,
    #[serde(default)]
    pub interest_paid: Option<f64>,
}

/// Response body of the simulation endpoint.
///
/// The endpoint wraps rows in `data`; a bare array is accepted as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SimulationResponse {
    Rows(Vec<InstallmentRow>),
    Wrapped {
        #[serde(default)]
        data: Option<Vec<InstallmentRow>>,
    },
}

impl SimulationResponse {
    pub fn into_rows(self) -> Vec<InstallmentRow> {
        match self {
            Self::Rows(rows) => rows,
            Self::Wrapped { data } => data.unwrap_or_default(),
        }
    }
}

/// Whether installment numbers are positive and strictly ascending
pub fn is_strictly_ascending(rows: &[InstallmentRow]) -> bool {
    rows.first().is_none_or(|r| r.installment_number > 0)
        && rows
            .windows(2)
            .all(|w| w[0].installment_number < w[1].installment_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = LoanSimulationRequest {
            loan_start_date: "2024-01-01".to_string(),
            loan_end_date: "2024-12-01".to_string(),
            first_payment_date: "2024-02-01".to_string(),
            principal_amount: 10000.0,
            interest_rate: 0.12,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "loanStartDate": "2024-01-01",
                "loanEndDate": "2024-12-01",
                "firstPaymentDate": "2024-02-01",
                "principalAmount": 10000.0,
                "interestRate": 0.12
            })
        );
    }

    #[test]
    fn test_row_with_missing_amounts() {
        let row: InstallmentRow =
            serde_json::from_str(r#"{"dueDate": "2024-02-01", "installmentNumber": 1}"#).unwrap();
        assert_eq!(row.due_date, "2024-02-01");
        assert_eq!(row.installment_number, 1);
        assert!(row.provision.is_none());
    }

    #[test]
    fn test_wrapped_response() {
        let json = r#"{"data": [
            {"dueDate": "2024-02-01", "installmentNumber": 1, "installmentValue": 888.49},
            {"dueDate": "2024-03-01", "installmentNumber": 2, "installmentValue": 888.49}
        ]}"#;
        let rows = serde_json::from_str::<SimulationResponse>(json)
            .unwrap()
            .into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].installment_value, Some(888.49));
    }

    #[test]
    fn test_response_without_data_is_empty() {
        let rows = serde_json::from_str::<SimulationResponse>("{}")
            .unwrap()
            .into_rows();
        assert!(rows.is_empty());

        let rows = serde_json::from_str::<SimulationResponse>(r#"{"data": null}"#)
            .unwrap()
            .into_rows();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_bare_array_response() {
        let rows = serde_json::from_str::<SimulationResponse>(
            r#"[{"dueDate": "2024-02-01", "installmentNumber": 1}]"#,
        )
        .unwrap()
        .into_rows();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_ascending_check() {
        let row = |n| InstallmentRow {
            installment_number: n,
            ..Default::default()
        };
        assert!(is_strictly_ascending(&[]));
        assert!(is_strictly_ascending(&[row(1), row(2), row(3)]));
        assert!(!is_strictly_ascending(&[row(1), row(3), row(2)]));
        assert!(!is_strictly_ascending(&[row(1), row(1)]));
        assert!(!is_strictly_ascending(&[row(0), row(1)]));
    }
}
