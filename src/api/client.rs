//! HTTP client for the loan simulation API
//!
//! Sends the simulation request as JSON and decodes the installment
//! schedule. Failures are returned to the caller without retries.

use super::{ApiError, LoanApi};
use crate::state::{InstallmentRow, LoanSimulationRequest, SimulationResponse};
use async_trait::async_trait;
use reqwest::Client;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path of the simulation endpoint
const SIMULATE_PATH: &str = "/api/v1/loans/simulate";

/// Client for the loan simulation endpoint
pub struct LoanApiClient {
    client: Client,
    base_url: String,
}

impl LoanApiClient {
    /// Create a client bound to `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SIMULATE_PATH)
    }
}

#[async_trait]
impl LoanApi for LoanApiClient {
    async fn simulate_loan(
        &self,
        request: &LoanSimulationRequest,
    ) -> Result<Vec<InstallmentRow>, ApiError> {
        let url = self.endpoint();
        tracing::debug!(url = %url, "Sending simulation request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "Simulation API error");
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let rows = serde_json::from_str::<SimulationResponse>(&body)?.into_rows();
        tracing::info!(rows = rows.len(), "Simulation completed");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Router};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    /// Request captured by the mock server
    #[derive(Debug, Clone)]
    struct CapturedRequest {
        content_type: Option<String>,
        body: serde_json::Value,
    }

    #[derive(Clone)]
    struct MockState {
        status: StatusCode,
        response: String,
        requests: Arc<Mutex<Vec<CapturedRequest>>>,
    }

    async fn handle_simulate(
        State(state): State<MockState>,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, String) {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
        state
            .requests
            .lock()
            .await
            .push(CapturedRequest { content_type, body });
        (state.status, state.response.clone())
    }

    /// Start a mock simulation server answering every request with `status` and `response`
    async fn start_mock(
        status: StatusCode,
        response: &str,
    ) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            response: response.to_string(),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route(SIMULATE_PATH, post(handle_simulate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (format!("http://{addr}"), requests)
    }

    /// Client that bypasses any proxy configured in the environment
    fn local_client(base_url: String) -> LoanApiClient {
        LoanApiClient {
            client: Client::builder().no_proxy().build().unwrap(),
            base_url,
        }
    }

    fn sample_request() -> LoanSimulationRequest {
        LoanSimulationRequest {
            loan_start_date: "2024-01-01".to_string(),
            loan_end_date: "2024-12-01".to_string(),
            first_payment_date: "2024-02-01".to_string(),
            principal_amount: 10000.0,
            interest_rate: 0.12,
        }
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = LoanApiClient::new("http://example.test:8080/");
        assert_eq!(client.base_url(), "http://example.test:8080");
        assert_eq!(
            client.endpoint(),
            "http://example.test:8080/api/v1/loans/simulate"
        );
    }

    #[tokio::test]
    async fn test_posts_json_and_decodes_rows() {
        let (base_url, requests) = start_mock(
            StatusCode::OK,
            r#"{"data": [
                {"dueDate": "2024-02-01", "installmentNumber": 1, "installmentValue": 888.49},
                {"dueDate": "2024-03-01", "installmentNumber": 2, "installmentValue": 888.49}
            ]}"#,
        )
        .await;

        let client = local_client(base_url);
        let rows = client.simulate_loan(&sample_request()).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].due_date, "2024-02-01");
        assert_eq!(rows[1].installment_number, 2);

        let captured = requests.lock().await.clone();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(
            captured[0].body,
            serde_json::json!({
                "loanStartDate": "2024-01-01",
                "loanEndDate": "2024-12-01",
                "firstPaymentDate": "2024-02-01",
                "principalAmount": 10000.0,
                "interestRate": 0.12
            })
        );
    }

    #[tokio::test]
    async fn test_missing_data_is_empty_schedule() {
        let (base_url, _) = start_mock(StatusCode::OK, "{}").await;
        let rows = local_client(base_url)
            .simulate_loan(&sample_request())
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_server_error() {
        let (base_url, _) =
            start_mock(StatusCode::INTERNAL_SERVER_ERROR, "simulation failed").await;
        let err = local_client(base_url)
            .simulate_loan(&sample_request())
            .await
            .unwrap_err();
        match err {
            ApiError::Server { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "simulation failed");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base_url, _) = start_mock(StatusCode::OK, "not json").await;
        let err = local_client(base_url)
            .simulate_loan(&sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Reserve a free port and release it so nothing is listening there
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let err = local_client(format!("http://127.0.0.1:{port}"))
            .simulate_loan(&sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
