//! Client-side session lifecycle.
//!
//! The persisted format is exactly three `localStorage` keys:
//! `isLoggedIn` (`"true"` or absent), `user` (the user JSON returned by the
//! login endpoint) and `authToken` (opaque bearer token).

use crate::utils::storage::{KeyValueStore, StorageError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{fmt, rc::Rc};

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "authToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "Admin", alias = "ADMIN")]
    Admin,
    #[serde(alias = "Employee", alias = "EMPLOYEE")]
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user. Serialized with the API's field names so the
/// stored `user` value is the same document the login endpoint returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id", alias = "userId", default)]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Employee record linked to this user, when the API returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
}

/// Two-state machine driving the auth gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticated(Role),
}

impl AuthPhase {
    pub fn role(&self) -> Option<Role> {
        match self {
            AuthPhase::Anonymous => None,
            AuthPhase::Authenticated(role) => Some(*role),
        }
    }
}

impl From<Option<&Session>> for AuthPhase {
    fn from(session: Option<&Session>) -> Self {
        session
            .map(|s| AuthPhase::Authenticated(s.role))
            .unwrap_or(AuthPhase::Anonymous)
    }
}

/// Single owner of "who is logged in". `login`, `logout` and `hydrate` each
/// replace the in-memory session wholesale.
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    current: Option<Session>,
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
            current: None,
        }
    }

    /// Restores the session from storage. Anything missing or unparseable
    /// leaves the store anonymous.
    pub fn hydrate(&mut self) -> Option<&Session> {
        self.current = self.read_persisted();
        self.current.as_ref()
    }

    fn read_persisted(&self) -> Option<Session> {
        let flag = match self.storage.get(LOGGED_IN_KEY) {
            Ok(flag) => flag,
            Err(err) => {
                warn!("Session hydrate skipped: {}", err);
                return None;
            }
        };
        if flag.as_deref() != Some("true") {
            return None;
        }
        let raw = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Session flag set without a stored user");
                return None;
            }
            Err(err) => {
                warn!("Session hydrate skipped: {}", err);
                return None;
            }
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!("Ignoring malformed stored session: {}", err);
                None
            }
        }
    }

    /// Replaces any current session with `user` and persists it. The
    /// in-memory session is set even if persisting fails.
    pub fn login(&mut self, user: Session, token: &str) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string(&user).map_err(|_| StorageError::Write(USER_KEY.into()))?;
        self.current = Some(user);
        self.storage.set(LOGGED_IN_KEY, "true")?;
        self.storage.set(USER_KEY, &serialized)?;
        self.storage.set(TOKEN_KEY, token)?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.current = None;
        for key in [LOGGED_IN_KEY, USER_KEY, TOKEN_KEY] {
            if let Err(err) = self.storage.remove(key) {
                warn!("Failed to clear session key: {}", err);
            }
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.current.as_ref()?;
        self.storage
            .get(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    pub fn phase(&self) -> AuthPhase {
        AuthPhase::from(self.current.as_ref())
    }
}
