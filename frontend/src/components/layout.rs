use crate::{
    api::ApiError,
    components::notifications::NotificationBell,
    router::routes,
    state::auth::{self, use_session},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let (menu_open, set_menu_open) = create_signal(false);
    let display_name = move || {
        session
            .user()
            .map(|user| format!("{} ({})", user.username, user.role))
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        set_menu_open.set(false);
        auth::logout(session);
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                        <h1 class="text-xl font-semibold text-fg">"HR Desk"</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <span class="hidden sm:inline text-sm text-fg-muted">{display_name}</span>
                        <NotificationBell />
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <SidebarLinks on_navigate=Callback::new(move |_| set_menu_open.set(false)) />
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="hidden lg:block w-60 shrink-0 border-r border-border bg-surface-elevated min-h-[calc(100vh-4rem)]">
            <SidebarLinks on_navigate=Callback::new(|_| {}) />
        </aside>
    }
}

/// Navigation entries for the signed-in role, taken from its route table.
#[component]
fn SidebarLinks(on_navigate: Callback<()>) -> impl IntoView {
    let session = use_session();
    let entries = move || {
        session
            .phase()
            .role()
            .map(|role| routes::navigation(role).collect::<Vec<_>>())
            .unwrap_or_default()
    };
    view! {
        <nav class="px-3 py-4 space-y-1">
            {move || {
                entries()
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <a
                                href=path
                                class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                on:click=move |_| on_navigate.call(())
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="flex">
                <Sidebar/>
                <main class="flex-1 max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Spinner while a resource is pending, an error banner on failure, else
/// `render`.
pub fn loaded<T>(value: Option<Result<T, ApiError>>, render: impl FnOnce(T) -> View) -> View {
    match value {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
        Some(Ok(data)) => render(data),
    }
}
