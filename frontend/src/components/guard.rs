use crate::{
    components::layout::{Layout, LoadingSpinner},
    config,
    pages::{login::LoginPage, render_screen},
    router::gate::{self, GateDecision},
    state::auth::use_session,
};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions};

/// Single routed view: evaluates the gate for the current path and renders
/// or redirects accordingly.
#[component]
pub fn RouteGate() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let policy = config::current().forbidden_route;
    let decision = create_memo(move |_| {
        let path = location.pathname.get();
        gate::apply_policy(gate::evaluate(session.phase(), &path), policy)
    });
    let verifying = Signal::derive(move || session.state.get().loading);

    let navigate = use_navigate();
    create_effect(move |_| {
        if let GateDecision::Redirect(target) = decision.get() {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <GateOutlet decision=decision.into() verifying=verifying /> }
}

#[component]
pub fn GateOutlet(decision: Signal<GateDecision>, verifying: Signal<bool>) -> impl IntoView {
    move || {
        if should_show_spinner(decision.get(), verifying.get()) {
            return view! { <LoadingSpinner /> }.into_view();
        }
        match decision.get() {
            GateDecision::RenderLogin => view! { <LoginPage /> }.into_view(),
            GateDecision::Render(route) => {
                view! { <Layout>{render_screen(route.screen)}</Layout> }.into_view()
            }
            GateDecision::Redirect(_) => view! { <LoadingSpinner /> }.into_view(),
            GateDecision::NoMatch => ().into_view(),
        }
    }
}

fn should_show_spinner(decision: GateDecision, verifying: bool) -> bool {
    verifying && matches!(decision, GateDecision::Render(_))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::router::routes::{self, Screen};
    use crate::state::session::Role;
    use crate::test_support::helpers::{admin_user, employee_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    fn render(decision: GateDecision, verifying: bool) -> String {
        render_to_string(move || {
            let user = match decision {
                GateDecision::RenderLogin => None,
                GateDecision::Render(route) if route.required_role == Some(Role::Admin) => {
                    Some(admin_user())
                }
                _ => Some(employee_user()),
            };
            provide_session(user);
            view! {
                <GateOutlet
                    decision=Signal::derive(move || decision)
                    verifying=Signal::derive(move || verifying)
                />
            }
        })
    }

    #[test]
    fn login_decision_renders_login_form() {
        let html = render(GateDecision::RenderLogin, false);
        assert!(html.contains("Sign in"));
    }

    #[test]
    fn render_decision_wraps_screen_in_layout() {
        let route = routes::resolve(Role::Employee, "/profile").unwrap();
        assert_eq!(route.screen, Screen::Profile);
        let html = render(GateDecision::Render(route), false);
        assert!(html.contains("HR Desk"));
        assert!(html.contains("My Profile"));
    }

    #[test]
    fn verifying_session_shows_spinner() {
        let route = routes::resolve(Role::Employee, "/").unwrap();
        let html = render(GateDecision::Render(route), true);
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn no_match_renders_nothing() {
        let html = render(GateDecision::NoMatch, false);
        assert!(!html.contains("HR Desk"));
        assert!(!html.contains("Sign in"));
    }
}
