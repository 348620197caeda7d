use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler error type that wraps `anyhow::Error`.
///
/// Lets handlers use `?` on anything convertible into `anyhow::Error`; used
/// by the batch combine path, where a fetch or parse failure is terminal for
/// the request (the streaming path reports failures inline instead).
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
