use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{components::guard::RouteGate, state::auth::AuthProvider};

pub mod gate;
pub mod routes;

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Every path goes through one gated view; the route tables decide what it
/// renders.
pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="HR Desk"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/*any" view=RouteGate/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
