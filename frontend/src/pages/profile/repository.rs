use super::utils::ProfileFormState;
use crate::api::{ApiClient, ApiError};

/// Validates locally, then sends the profile update.
pub async fn update_profile(
    client: ApiClient,
    user_id: String,
    form: ProfileFormState,
) -> Result<(), ApiError> {
    let request = form.to_request(&user_id)?;
    client.update_profile(&request).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn update_profile_calls_api() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/users/update-profile").json_body(json!({
                    "userId": "u1",
                    "username": "jane",
                    "email": "jane@example.com",
                    "phoneNumber": "",
                    "currentPassword": "",
                    "newPassword": ""
                }));
                then.status(200).json_body(json!({}));
            })
            .await;

        let form = ProfileFormState {
            username: "jane".into(),
            email: "jane@example.com".into(),
            ..ProfileFormState::default()
        };
        update_profile(ApiClient::new_with_base_url(server.url("/api")), "u1".into(), form)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn mismatched_confirmation_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let form = ProfileFormState {
            username: "jane".into(),
            email: "jane@example.com".into(),
            new_password: "a".into(),
            confirm_password: "b".into(),
            ..ProfileFormState::default()
        };
        let client = ApiClient::new_with_base_url(server.url("/api"));
        let err = update_profile(client, "u1".into(), form)
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        mock.assert_hits_async(0).await;
    }
}
