use crate::{
    api::{ApiClient, ApiError, Credentials, LoginRequest},
    config,
    state::session::{AuthPhase, Session, SessionStore},
    utils::storage::{BrowserStorage, KeyValueStore, MemoryStorage},
};
use leptos::*;
use log::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    /// Set while a restored session is being checked against the server.
    pub loading: bool,
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        AuthPhase::from(self.user.as_ref())
    }
}

/// Injectable handle over the session store. The store owns persistence;
/// `state` mirrors it for the reactive tree.
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore>,
    api: StoredValue<ApiClient>,
    pub state: RwSignal<AuthState>,
}

impl SessionContext {
    /// Builds the context and hydrates it from `storage`.
    pub fn new(storage: impl KeyValueStore + 'static, api: ApiClient) -> Self {
        let mut store = SessionStore::new(storage);
        let user = store.hydrate().cloned();
        if let Some(user) = &user {
            debug!("Restored session for {} ({})", user.username, user.role);
        }
        Self {
            store: store_value(store),
            api: store_value(api),
            state: create_rw_signal(AuthState {
                user,
                loading: false,
            }),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.state.with(AuthState::phase)
    }

    pub fn user(&self) -> Option<Session> {
        self.state.with(|state| state.user.clone())
    }

    pub fn user_untracked(&self) -> Option<Session> {
        self.state.with_untracked(|state| state.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.store.with_value(SessionStore::token)
    }

    /// API client carrying the current bearer token.
    pub fn api(&self) -> ApiClient {
        self.api.get_value().with_token(self.token())
    }

    pub fn sign_in(&self, credentials: Credentials) {
        let Credentials { token, user } = credentials;
        self.store.update_value(|store| {
            if let Err(err) = store.login(user.clone(), &token) {
                warn!("Session not persisted: {}", err);
            }
        });
        info!("Signed in as {} ({})", user.username, user.role);
        self.state.set(AuthState {
            user: Some(user),
            loading: false,
        });
    }

    pub fn sign_out(&self) {
        self.store.update_value(SessionStore::logout);
        self.state.set(AuthState::default());
    }

    fn set_loading(&self, loading: bool) {
        self.state.update(|state| state.loading = loading);
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let session = SessionContext::new(BrowserStorage, api);
    provide_context(session);

    if session.user_untracked().is_some() {
        session.set_loading(true);
        spawn_local(async move {
            if config::await_app_config().await.verify_session {
                verify_session(session).await;
            }
            session.set_loading(false);
        });
    }

    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(MemoryStorage::new(), ApiClient::new()))
}

pub async fn login_request(request: LoginRequest, session: SessionContext) -> Result<(), ApiError> {
    match session.api().login(&request).await {
        Ok(credentials) => {
            session.sign_in(credentials);
            Ok(())
        }
        Err(error) => {
            warn!("Login failed: {}", error);
            Err(error)
        }
    }
}

/// Checks a restored session with the server. Only an explicit rejection
/// ends the session; an unreachable server keeps it.
pub async fn verify_session(session: SessionContext) {
    let Some(user) = session.user_untracked() else {
        return;
    };
    if user.user_id.is_empty() {
        debug!("Stored session has no user id; skipping verification");
        return;
    }
    match session.api().get_user(&user.user_id).await {
        Ok(_) => debug!("Session for {} verified", user.username),
        Err(err) if err.is_rejection() => {
            warn!("Stored session rejected ({}); signing out", err.code);
            session.sign_out();
        }
        Err(err) => warn!("Session verification unavailable: {}", err),
    }
}

pub fn logout(session: SessionContext) {
    if let Some(user) = session.user_untracked() {
        info!("Signing out {}", user.username);
    }
    session.sign_out();
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let session = use_session();
    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        async move { login_request(payload, session).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{Role, LOGGED_IN_KEY, TOKEN_KEY};
    use crate::test_support::helpers::employee_user;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_session_returns_anonymous_without_context() {
        with_runtime(|| {
            let session = use_session();
            assert_eq!(session.phase(), AuthPhase::Anonymous);
            assert!(session.token().is_none());
            assert!(!session.api().has_token());
        });
    }

    #[test]
    fn sign_in_and_out_update_state_and_storage() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            let session = SessionContext::new(storage.clone(), ApiClient::new());
            session.sign_in(Credentials {
                token: "abc".into(),
                user: employee_user(),
            });
            assert_eq!(session.phase(), AuthPhase::Authenticated(Role::Employee));
            assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
            assert!(session.api().has_token());

            logout(session);
            assert_eq!(session.phase(), AuthPhase::Anonymous);
            assert!(storage.get(LOGGED_IN_KEY).unwrap().is_none());
        });
    }

    #[test]
    fn new_context_hydrates_from_existing_storage() {
        with_runtime(|| {
            let storage = MemoryStorage::new();
            SessionContext::new(storage.clone(), ApiClient::new()).sign_in(Credentials {
                token: "abc".into(),
                user: employee_user(),
            });
            let restored = SessionContext::new(storage, ApiClient::new());
            assert_eq!(restored.user(), Some(employee_user()));
            assert_eq!(restored.token().as_deref(), Some("abc"));
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::router::{
        gate::{self, GateDecision},
        routes::Screen,
    };
    use crate::state::session::Role;
    use crate::test_support::helpers::employee_user;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn login_response_authenticates_and_routes_to_employee_dashboard() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users/login");
                then.status(200).json_body(json!({
                    "token": "abc",
                    "user": {"role": "employee", "username": "jane"}
                }));
            })
            .await;

        let runtime = create_runtime();
        let storage = MemoryStorage::new();
        let session = SessionContext::new(
            storage.clone(),
            ApiClient::new_with_base_url(server.url("/api")),
        );
        assert_eq!(
            gate::evaluate(session.phase(), "/"),
            GateDecision::Redirect(gate::LOGIN_PATH)
        );

        login_request(
            LoginRequest {
                login_value: "jane".into(),
                password: "secret".into(),
            },
            session,
        )
        .await
        .unwrap();

        let user = session.user().unwrap();
        assert_eq!(user.role, Role::Employee);
        assert_eq!(user.username, "jane");
        match gate::evaluate(session.phase(), "/") {
            GateDecision::Render(route) => assert_eq!(route.screen, Screen::EmployeeDashboard),
            other => panic!("unexpected decision {:?}", other),
        }
        assert_eq!(
            gate::evaluate(session.phase(), "/login"),
            GateDecision::Redirect(gate::HOME_PATH)
        );
        assert_eq!(session.token().as_deref(), Some("abc"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_without_token_stays_anonymous() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/users/login");
                then.status(200)
                    .json_body(json!({"user": {"role": "employee", "username": "jane"}}));
            })
            .await;

        let runtime = create_runtime();
        let storage = MemoryStorage::new();
        let session = SessionContext::new(
            storage.clone(),
            ApiClient::new_with_base_url(server.url("/api")),
        );
        let err = login_request(
            LoginRequest {
                login_value: "jane".into(),
                password: "secret".into(),
            },
            session,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Invalid credentials or no token returned.");
        assert_eq!(session.phase(), AuthPhase::Anonymous);
        assert!(storage.is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn verify_session_signs_out_on_rejection() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/users/user/u-jane")
                    .header("Authorization", "Bearer abc");
                then.status(401).json_body(json!({"error": "Token expired"}));
            })
            .await;

        let runtime = create_runtime();
        let session = SessionContext::new(
            MemoryStorage::new(),
            ApiClient::new_with_base_url(server.url("/api")),
        );
        session.sign_in(Credentials {
            token: "abc".into(),
            user: employee_user(),
        });

        verify_session(session).await;
        mock.assert_async().await;
        assert_eq!(session.phase(), AuthPhase::Anonymous);
        runtime.dispose();
    }

    #[tokio::test]
    async fn verify_session_keeps_session_when_server_is_unreachable() {
        let runtime = create_runtime();
        let session = SessionContext::new(
            MemoryStorage::new(),
            ApiClient::new_with_base_url("http://127.0.0.1:9/api"),
        );
        session.sign_in(Credentials {
            token: "abc".into(),
            user: employee_user(),
        });

        verify_session(session).await;
        assert_eq!(session.phase(), AuthPhase::Authenticated(Role::Employee));
        runtime.dispose();
    }
}
