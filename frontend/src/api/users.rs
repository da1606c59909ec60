use reqwest::Method;
use serde_json::Value;

use super::{
    client::{segment, ApiClient},
    types::{
        ApiError, Credentials, LoginRequest, LoginResponse, SignupRequest, UpdateProfileRequest,
    },
};
use crate::state::session::Session;

/// Login only shows the server's `error` text; anything else is "Login failed.".
const LOGIN_ERROR_FIELDS: &[&str] = &["error"];

impl ApiClient {
    /// `POST /users/login`. A 2xx answer without a token (or without a user)
    /// is treated as bad credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<Credentials, ApiError> {
        let response: LoginResponse = self
            .send_json_reading(Method::POST, "/users/login", request, LOGIN_ERROR_FIELDS)
            .await
            .map_err(login_failure)?;
        credentials_from(response)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/users/signup", request).await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, "/users/update-profile", request)
            .await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Session, ApiError> {
        self.get_json(&format!("/users/user/{}", segment(user_id)))
            .await
    }
}

/// Keeps the server's own message; generic transport or status text becomes
/// "Login failed.".
fn login_failure(err: ApiError) -> ApiError {
    if err.error.starts_with("Request failed") {
        ApiError {
            error: "Login failed.".into(),
            ..err
        }
    } else {
        err
    }
}

pub(crate) fn credentials_from(response: LoginResponse) -> Result<Credentials, ApiError> {
    match (response.token, response.user) {
        (Some(token), Some(user)) if !token.is_empty() => Ok(Credentials { token, user }),
        _ => Err(ApiError::invalid_credentials()),
    }
}
