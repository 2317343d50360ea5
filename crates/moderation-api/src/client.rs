//! Moderation backend HTTP client.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::resources::{Auth, ChatPrompts, Chats, DeletedMessages, Prompts, UserStates};
use crate::token::{FileStore, TokenStore};
use crate::types::PageQuery;

/// A single request against the backend.
///
/// Built with [`ApiRequest::get`] and friends, then handed to
/// [`ApiClient::execute`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    headers: HeaderMap,
    query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Request with an arbitrary method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add an extra header. Replaces a header of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Append pagination or search parameters.
    pub fn query(mut self, query: &PageQuery) -> Self {
        self.query.extend(query.to_pairs());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Client for the moderation backend REST API.
///
/// Cheap to clone; clones share the HTTP connection pool and the token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<ClientConfig>,
    tokens: TokenStore,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// When `token_dir` is set the token is loaded from, and saved to, that
    /// directory; otherwise it lives only as long as the client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let tokens = match &config.token_dir {
            Some(dir) => TokenStore::open(Arc::new(FileStore::new(dir)))?,
            None => TokenStore::in_memory(),
        };
        Self::with_token_store(config, tokens)
    }

    /// Create a client that uses an existing token store.
    pub fn with_token_store(config: ClientConfig, tokens: TokenStore) -> Result<Self> {
        config.validate()?;

        let http = Client::builder().build().map_err(ApiError::Transport)?;

        debug!(base_url = %config.base_url, "Created moderation API client");

        Ok(Self {
            http,
            config: Arc::new(config),
            tokens,
        })
    }

    /// Authentication endpoints.
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    /// Chat settings endpoints.
    pub fn chats(&self) -> Chats<'_> {
        Chats::new(self)
    }

    /// Chat-to-prompt link endpoints.
    pub fn chat_prompts(&self) -> ChatPrompts<'_> {
        ChatPrompts::new(self)
    }

    /// System and custom prompt endpoints.
    pub fn prompts(&self) -> Prompts<'_> {
        Prompts::new(self)
    }

    /// Member trust endpoints.
    pub fn user_states(&self) -> UserStates<'_> {
        UserStates::new(self)
    }

    /// Deleted message log endpoints.
    pub fn deleted_messages(&self) -> DeletedMessages<'_> {
        DeletedMessages::new(self)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the token store.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Send a request and decode the response into `R`.
    ///
    /// A 204 response is never read; it decodes as JSON `null`, so callers
    /// expecting no content should ask for `()` or `Option<T>`.
    pub async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let ApiRequest {
            method,
            path,
            body,
            headers,
            query,
        } = request;
        let url = self.config.url(&path);

        debug!(method = %method, path = %path, "API request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .headers(headers);

        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(token) = self.tokens.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();

        debug!(method = %method, path = %path, status = status.as_u16(), "API response");

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("tokens", &self.tokens)
            .finish()
    }
}
