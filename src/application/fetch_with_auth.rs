use crate::application::fetch::FetchClient;
use crate::domain::http::{ApiRequest, ApiResponse, Credentials};
use crate::domain::session::{ENTRY_PATH, Navigator};
use crate::shared::error::ApiError;

/// Issue a call that needs a live session, recovering once from an expired
/// access credential.
///
/// On `401` a single `POST` to `refresh_url` is made. If it succeeds the
/// original request is re-issued once and that response is returned as is;
/// if it fails the navigator is sent to the entry point and the original
/// `401` response is returned. Credentials are always included, whatever
/// the caller set.
pub async fn fetch_with_auth(
    client: &FetchClient,
    navigator: &dyn Navigator,
    refresh_url: &str,
    request: ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let request = request.credentials(Credentials::Include);

    let response = client.fetch(request.clone()).await?;
    if !response.is_unauthorized() {
        return Ok(response);
    }

    tracing::debug!(url = %request.url, "access expired, refreshing session");
    let refresh = client
        .fetch(ApiRequest::post(refresh_url).credentials(Credentials::Include))
        .await?;

    if !refresh.is_success() {
        tracing::warn!(status = %refresh.status, "session refresh failed, leaving to entry point");
        navigator.navigate(ENTRY_PATH);
        return Ok(response);
    }

    client.fetch(request).await
}
