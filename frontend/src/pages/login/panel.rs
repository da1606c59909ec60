use super::view_model::use_login_view_model;
use crate::components::{common::Button, error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to HR Desk"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Employee and task management"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="login_value" class="sr-only">"Email or username"</label>
                            <input
                                id="login_value"
                                name="login_value"
                                type="text"
                                required
                                autocomplete="username"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border text-fg rounded-t-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Email or username"
                                prop:value=move || vm.form.login_value.get()
                                on:input=move |ev| vm.form.login_value.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border text-fg rounded-b-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=move || vm.form.password.get()
                                on:input=move |ev| vm.form.password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=vm.error.into() />

                    <Button class="w-full" loading=pending>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(move || view! { <LoginPanel /> });
        assert!(html.contains("Sign in to HR Desk"));
        assert!(html.contains("Email or username"));
        assert!(html.contains("type=\"password\""));
    }
}
