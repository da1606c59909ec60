#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Credentials};
    use crate::state::auth::SessionContext;
    use crate::state::session::{Role, Session};
    use crate::utils::storage::MemoryStorage;

    pub fn admin_user() -> Session {
        Session {
            user_id: "u-admin".into(),
            username: "admin".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            phone_number: None,
            employee: None,
        }
    }

    pub fn employee_user() -> Session {
        Session {
            user_id: "u-jane".into(),
            username: "jane".into(),
            email: "jane@example.com".into(),
            role: Role::Employee,
            phone_number: Some("555-0100".into()),
            employee: Some("e-jane".into()),
        }
    }

    /// Provides a signed-in session backed by in-memory storage.
    pub fn provide_session(user: Option<Session>) -> SessionContext {
        let session = SessionContext::new(MemoryStorage::new(), ApiClient::new());
        if let Some(user) = user {
            session.sign_in(Credentials {
                token: "test-token".into(),
                user,
            });
        }
        leptos::provide_context(session);
        session
    }
}
