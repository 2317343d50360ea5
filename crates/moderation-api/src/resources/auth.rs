//! `/auth` endpoints.

use tracing::info;

use crate::client::{ApiClient, ApiRequest};
use crate::error::Result;
use crate::types::{LoginRequest, RegisterRequest, TelegramConnect, TokenResponse, User};

/// Registration, login and the current account.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account.
    ///
    /// With `login_after_register` enabled the same credentials are used to
    /// log in straight away, so the token store holds a session on return.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let user: User = self
            .client
            .execute(ApiRequest::post("/auth/register").json(request)?)
            .await?;
        info!(user_id = %user.id, "Registered account");

        if self.client.config().login_after_register {
            self.login(&request.credentials()).await?;
        }

        Ok(user)
    }

    /// Log in and store the returned bearer token.
    ///
    /// Returns the access token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        let response: TokenResponse = self
            .client
            .execute(ApiRequest::post("/auth/login").json(request)?)
            .await?;

        self.client
            .tokens()
            .set_token(Some(response.access_token.clone()))?;
        info!("Logged in");

        Ok(response.access_token)
    }

    /// The account the current token belongs to.
    pub async fn me(&self) -> Result<User> {
        self.client.execute(ApiRequest::get("/auth/me")).await
    }

    /// Start (or check) linking the account to Telegram.
    pub async fn connect_telegram(&self) -> Result<TelegramConnect> {
        self.client
            .execute(ApiRequest::get("/auth/me/connect_telegram"))
            .await
    }

    /// Drop the stored token. No request is sent.
    pub fn logout(&self) -> Result<()> {
        self.client.tokens().clear_token()?;
        info!("Logged out");
        Ok(())
    }
}
