use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>');

/// Body fields read for an error's text, in order of preference.
pub(crate) const ERROR_FIELDS: &[&str] = &["error", "message"];

/// Thin wrapper over `reqwest::Client`: one call per method, no retries, no
/// caching. A token, when present, is sent as a bearer credential.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            token: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let url = join_url(&base_url, path);
        debug!("{} {}", method, url);
        let mut builder = self.client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
    }

    async fn execute(builder: RequestBuilder) -> Result<Response, ApiError> {
        Self::execute_reading(builder, ERROR_FIELDS).await
    }

    async fn execute_reading(
        builder: RequestBuilder,
        error_fields: &[&str],
    ) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response, error_fields).await)
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::execute(self.request(Method::GET, path).await).await?;
        Self::parse(response).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await.query(query);
        let response = Self::execute(builder).await?;
        Self::parse(response).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).await.json(body);
        let response = Self::execute(builder).await?;
        Self::parse(response).await
    }

    /// Like `send_json`, but the error text only comes from `error_fields`.
    pub(crate) async fn send_json_reading<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        error_fields: &[&str],
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).await.json(body);
        let response = Self::execute_reading(builder, error_fields).await?;
        Self::parse(response).await
    }

    /// Sends `body` and discards whatever the server answers with.
    pub(crate) async fn send_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path).await.json(body);
        Self::execute(builder).await.map(|_| ())
    }

    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        Self::execute(self.request(method, path).await)
            .await
            .map(|_| ())
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Percent-encodes a value for use as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

async fn error_from_response(response: Response, error_fields: &[&str]) -> ApiError {
    let status = response.status();
    let body: Option<Value> = response.json().await.ok();
    let message = body
        .as_ref()
        .and_then(|body| error_message(body, error_fields))
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    let mut error = ApiError::from_status(status.as_u16(), message);
    error.details = body.as_ref().and_then(|b| b.get("details")).cloned();
    error
}

/// Reads the human-readable message out of an error body.
pub(crate) fn error_message(body: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://localhost:5000/api/", "/tasks/all"),
            "http://localhost:5000/api/tasks/all"
        );
        assert_eq!(
            join_url("http://localhost:5000/api", "employees/"),
            "http://localhost:5000/api/employees/"
        );
    }

    #[test]
    fn segment_escapes_separators() {
        assert_eq!(segment("65f0a1"), "65f0a1");
        assert_eq!(segment("a/b?c"), "a%2Fb%3Fc");
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(&json!({"error": "Invalid password", "message": "x"}), ERROR_FIELDS)
                .as_deref(),
            Some("Invalid password")
        );
        assert_eq!(
            error_message(&json!({"message": "Not found"}), ERROR_FIELDS).as_deref(),
            Some("Not found")
        );
        assert_eq!(error_message(&json!({"message": "Not found"}), &["error"]), None);
        assert_eq!(error_message(&json!({"ok": false}), ERROR_FIELDS), None);
    }

    #[test]
    fn with_token_ignores_empty_tokens() {
        assert!(!ApiClient::new().with_token(Some(String::new())).has_token());
        assert!(ApiClient::new().with_token(Some("abc".into())).has_token());
    }
}
