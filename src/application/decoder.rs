use crate::domain::http::ApiResponse;
use crate::shared::error::ApiError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turn a backend response into its payload, or into an [`ApiError`] whose
/// message comes from the body's `message` field when there is one.
pub fn handle_response<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        return Err(ApiError::new(message));
    }

    serde_json::from_slice(&response.body).map_err(|e| ApiError::new(e.to_string()))
}
