use festivia_shared::models::ErrorResponse;
use reqwest::Response;
use thiserror::Error;

/// Fallback shown when a failure response carries no message body.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Failures surfaced by [`crate::api::FestiviaClient`] calls.
///
/// Every failure is handled at the page that issued the request; there
/// is no global interceptor, retry, or automatic session teardown.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. Carries the
    /// server-provided message when one was present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("Unable to connect to server")]
    Transport(#[from] reqwest::Error),
}

/// Pass 2xx responses through; turn anything else into [`ApiError::Api`]
/// using the `{ message }` envelope when the body parses as one.
pub(crate) async fn ok_or_api_error(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}
