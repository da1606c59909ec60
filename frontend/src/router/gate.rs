//! Pure auth gate: decides what the router renders for a phase and a path.

use serde::{Deserialize, Serialize};

use crate::router::routes::{self, RouteDescriptor};
use crate::state::session::AuthPhase;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    RenderLogin,
    Render(&'static RouteDescriptor),
    Redirect(&'static str),
    NoMatch,
}

/// What to do with a path the current role has no route for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenRoutePolicy {
    #[default]
    RedirectHome,
    FallThrough,
}

pub fn evaluate(phase: AuthPhase, path: &str) -> GateDecision {
    let path = routes::normalize_path(path);
    match phase {
        AuthPhase::Anonymous if path == LOGIN_PATH => GateDecision::RenderLogin,
        AuthPhase::Anonymous => GateDecision::Redirect(LOGIN_PATH),
        AuthPhase::Authenticated(_) if path == LOGIN_PATH => GateDecision::Redirect(HOME_PATH),
        AuthPhase::Authenticated(role) => routes::resolve(role, path)
            .map(GateDecision::Render)
            .unwrap_or(GateDecision::NoMatch),
    }
}

/// Turns `NoMatch` into a redirect home when the policy asks for it.
pub fn apply_policy(decision: GateDecision, policy: ForbiddenRoutePolicy) -> GateDecision {
    match (decision, policy) {
        (GateDecision::NoMatch, ForbiddenRoutePolicy::RedirectHome) => {
            GateDecision::Redirect(HOME_PATH)
        }
        (decision, _) => decision,
    }
}
