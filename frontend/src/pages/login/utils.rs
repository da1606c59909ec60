use crate::api::{ApiError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub login_value: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            login_value: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        build_request(&self.login_value.get_untracked(), &self.password.get_untracked())
    }
}

pub fn build_request(login_value: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let login_value = login_value.trim();
    if login_value.is_empty() {
        return Err(ApiError::validation("Enter your email or username."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Enter your password."));
    }
    Ok(LoginRequest {
        login_value: login_value.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_requires_both_fields() {
        assert_eq!(
            build_request("  ", "secret").unwrap_err().error,
            "Enter your email or username."
        );
        assert_eq!(
            build_request("jane", "").unwrap_err().error,
            "Enter your password."
        );
    }

    #[test]
    fn build_request_trims_login_value_only() {
        let request = build_request(" jane@example.com ", " pw ").unwrap();
        assert_eq!(request.login_value, "jane@example.com");
        assert_eq!(request.password, " pw ");
    }
}
