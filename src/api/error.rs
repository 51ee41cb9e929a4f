//! Error types for the simulation API client

use thiserror::Error;

/// Failures of a simulation request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the server or read its response
    #[error("Falha de conexão: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Servidor respondeu {status}: {body}")]
    Server { status: u16, body: String },

    /// Response body was not a valid simulation result
    #[error("Resposta inválida: {0}")]
    Decode(#[from] serde_json::Error),
}
