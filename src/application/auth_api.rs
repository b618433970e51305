use crate::application::decoder::handle_response;
use crate::application::fetch::FetchClient;
use crate::application::fetch_with_auth::fetch_with_auth;
use crate::domain::auth::{
    AccountRequest, AuthResponse, LoginRequest, MessageResponse, OtpPurpose, OtpRequest, Profile,
};
use crate::domain::http::{ApiRequest, Credentials};
use crate::domain::session::Navigator;
use crate::shared::error::ApiError;

/// REST client for the authentication backend's `/api/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    base_url: String,
}

impl AuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn refresh_url(&self) -> String {
        self.endpoint("refresh")
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/api/auth/{}", self.base_url, name)
    }

    /// Ask the backend to email an OTP for signup or password recovery.
    #[tracing::instrument(skip_all, fields(purpose = %purpose))]
    pub async fn send_otp(
        &self,
        client: &FetchClient,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<MessageResponse, ApiError> {
        let request = ApiRequest::post(self.endpoint(purpose.as_str())).json(&OtpRequest {
            email: email.to_string(),
        })?;

        handle_response(client.fetch(request).await?)
    }

    #[tracing::instrument(skip(self, client, data), fields(email = %data.email))]
    pub async fn create(
        &self,
        client: &FetchClient,
        data: &AccountRequest,
    ) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(self.endpoint("create"))
            .json(data)?
            .credentials(Credentials::Include);

        handle_response(client.fetch(request).await?)
    }

    #[tracing::instrument(skip(self, client, data), fields(email = %data.email))]
    pub async fn login(
        &self,
        client: &FetchClient,
        data: &LoginRequest,
    ) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(self.endpoint("login"))
            .json(data)?
            .credentials(Credentials::Include);

        handle_response(client.fetch(request).await?)
    }

    #[tracing::instrument(skip_all)]
    pub async fn logout(
        &self,
        client: &FetchClient,
        navigator: &dyn Navigator,
    ) -> Result<MessageResponse, ApiError> {
        let request = ApiRequest::post(self.endpoint("logout"));
        let response = fetch_with_auth(client, navigator, &self.refresh_url(), request).await?;

        handle_response(response)
    }

    /// Set a new password, proven by the OTP. Needs no session.
    #[tracing::instrument(skip(self, client, data), fields(email = %data.email))]
    pub async fn forgot_password(
        &self,
        client: &FetchClient,
        data: &AccountRequest,
    ) -> Result<MessageResponse, ApiError> {
        let request = ApiRequest::post(self.endpoint("change-password")).json(data)?;

        handle_response(client.fetch(request).await?)
    }

    #[tracing::instrument(skip_all)]
    pub async fn profile(
        &self,
        client: &FetchClient,
        navigator: &dyn Navigator,
    ) -> Result<Profile, ApiError> {
        let request = ApiRequest::get(self.endpoint("me"));
        let response = fetch_with_auth(client, navigator, &self.refresh_url(), request).await?;

        handle_response(response)
    }
}
