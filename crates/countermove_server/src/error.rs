//! Request errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use countermove::Board;
use tracing::warn;

/// Error answering a move request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ServerError {
    /// The board code is missing or malformed.
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// The board is already won or drawn.
    #[display("No move available for board {}", _0)]
    NoMoveAvailable(Board),
}

impl std::error::Error for ServerError {}

impl ServerError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NoMoveAvailable(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(error = %self, status = %status, "Request rejected");
        (status, self.to_string()).into_response()
    }
}
