use super::{utils::ProfileFormState, view_model::use_profile_view_model};
use crate::components::{common::Button, error::FormMessages};
use leptos::{ev::SubmitEvent, *};

fn profile_input(
    form: RwSignal<ProfileFormState>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ProfileFormState) -> String,
    set: fn(&mut ProfileFormState, String),
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-fg">{label}</span>
            <input
                type=input_type
                class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| set(state, value));
                }
            />
        </label>
    }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let form = vm.form;
    let role = move || {
        vm.session
            .user()
            .map(|user| user.role.to_string())
            .unwrap_or_default()
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <section class="max-w-xl mx-auto space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"My Profile"</h2>
            <FormMessages messages=vm.messages />
            <Show
                when=move || vm.editing.get()
                fallback=move || view! {
                    <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
                        <dl class="grid grid-cols-2 gap-2 text-sm">
                            <dt class="text-fg-muted">"Username"</dt>
                            <dd class="text-fg">{move || form.with(|s| s.username.clone())}</dd>
                            <dt class="text-fg-muted">"Email"</dt>
                            <dd class="text-fg">{move || form.with(|s| s.email.clone())}</dd>
                            <dt class="text-fg-muted">"Phone"</dt>
                            <dd class="text-fg">{move || form.with(|s| s.phone_number.clone())}</dd>
                            <dt class="text-fg-muted">"Role"</dt>
                            <dd class="text-fg">{role}</dd>
                        </dl>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border"
                            on:click=move |_| vm.start_editing()
                        >
                            "Edit Profile"
                        </button>
                    </div>
                }
            >
                <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                    {profile_input(form, "Username", "text", |s| s.username.clone(), |s, v| s.username = v)}
                    {profile_input(form, "Email", "email", |s| s.email.clone(), |s, v| s.email = v)}
                    {profile_input(form, "Phone Number", "tel", |s| s.phone_number.clone(), |s, v| s.phone_number = v)}
                    <p class="text-xs text-fg-muted">"Leave the password fields empty to keep your password."</p>
                    {profile_input(form, "Current Password", "password", |s| s.current_password.clone(), |s, v| s.current_password = v)}
                    {profile_input(form, "New Password", "password", |s| s.new_password.clone(), |s, v| s.new_password = v)}
                    {profile_input(form, "Confirm Password", "password", |s| s.confirm_password.clone(), |s, v| s.confirm_password = v)}
                    <div class="flex gap-2">
                        <Button loading=vm.save_action.pending()>"Save"</Button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border"
                            on:click=move |_| vm.cancel()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_shows_session_details() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            view! { <ProfilePanel /> }
        });
        assert!(html.contains("My Profile"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("555-0100"));
        assert!(html.contains("Edit Profile"));
    }
}
