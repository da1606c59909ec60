use crate::{
    api::{ApiError, Notification},
    state::auth::use_session,
    utils::time::format_date,
};
use leptos::*;

/// Splits notifications into `(unread, read)`, keeping server order.
pub fn partition_notifications(items: &[Notification]) -> (Vec<Notification>, Vec<Notification>) {
    items.iter().cloned().partition(|n| !n.read)
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let session = use_session();
    let open = create_rw_signal(false);
    let reload = create_rw_signal(0u32);

    let notifications = create_resource(
        move || (session.user().map(|user| user.user_id), reload.get()),
        move |(user_id, _)| async move {
            match user_id {
                Some(id) if !id.is_empty() => session.api().list_notifications(&id).await,
                _ => Ok(Vec::new()),
            }
        },
    );

    let mark_read = create_action(move |id: &String| {
        let id = id.clone();
        async move { session.api().mark_notification_read(&id).await }
    });
    let clear_all = create_action(move |_: &()| async move {
        match session.user_untracked() {
            Some(user) => session.api().clear_notifications(&user.user_id).await,
            None => Ok(()),
        }
    });

    create_effect(move |_| {
        let finished = [mark_read.value().get(), clear_all.value().get()];
        if finished.iter().flatten().next().is_some() {
            reload.update(|value| *value = value.wrapping_add(1));
        }
    });

    let items = Signal::derive(move || {
        notifications
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let error = Signal::derive(move || notifications.get().and_then(Result::err));
    let unread_count = move || partition_notifications(&items.get()).0.len();

    view! {
        <div class="relative">
            <button
                type="button"
                aria-label="Notifications"
                class="relative p-2 rounded-full text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                on:click=move |_| open.update(|value| *value = !*value)
            >
                <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-1.4-1.4A2 2 0 0118 14.2V11a6 6 0 10-12 0v3.2a2 2 0 01-.6 1.4L4 17h5m6 0a3 3 0 11-6 0" />
                </svg>
                <Show when=move || { unread_count() > 0 }>
                    <span class="absolute -top-1 -right-1 rounded-full bg-status-error-bg text-status-error-text text-xs px-1.5">
                        {unread_count}
                    </span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <NotificationPanel
                    items=items
                    error=error
                    on_mark_read=Callback::new(move |id: String| mark_read.dispatch(id))
                    on_clear_all=Callback::new(move |_| clear_all.dispatch(()))
                />
            </Show>
        </div>
    }
}

#[component]
pub fn NotificationPanel(
    items: Signal<Vec<Notification>>,
    error: Signal<Option<ApiError>>,
    on_mark_read: Callback<String>,
    on_clear_all: Callback<()>,
) -> impl IntoView {
    let partitions = create_memo(move |_| partition_notifications(&items.get()));

    view! {
        <div class="absolute right-0 mt-2 w-80 z-50 rounded-lg bg-surface-elevated shadow-xl border border-border p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold text-fg">"Notifications"</h3>
                <button
                    type="button"
                    class="text-xs text-action-primary-bg hover:underline disabled:opacity-50"
                    disabled=move || items.get().is_empty()
                    on:click=move |_| on_clear_all.call(())
                >
                    "Clear all"
                </button>
            </div>
            {move || error.get().map(|err| view! { <p class="text-xs text-status-error-text">{err.error}</p> })}
            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <p class="text-sm text-fg-muted">"No notifications"</p> }
            >
                <div>
                    <p class="text-xs uppercase text-fg-muted mb-1">"Unread"</p>
                    <ul class="space-y-2">
                        {move || {
                            partitions
                                .get()
                                .0
                                .into_iter()
                                .map(|item| {
                                    let id = item.id.clone();
                                    view! {
                                        <li class="rounded border border-border p-2 bg-surface-muted">
                                            <p class="text-sm font-medium text-fg">{item.title}</p>
                                            <p class="text-xs text-fg-muted">{item.message}</p>
                                            <div class="flex justify-between items-center mt-1">
                                                <span class="text-xs text-fg-muted">{format_date(item.created_at)}</span>
                                                <button
                                                    type="button"
                                                    class="text-xs text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_mark_read.call(id.clone())
                                                >
                                                    "Mark as read"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <p class="text-xs uppercase text-fg-muted mt-3 mb-1">"Read"</p>
                    <ul class="space-y-2">
                        {move || {
                            partitions
                                .get()
                                .1
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li class="rounded border border-border p-2 opacity-75">
                                            <p class="text-sm text-fg">{item.title}</p>
                                            <p class="text-xs text-fg-muted">{item.message}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: format!("title-{id}"),
            message: "message".into(),
            read,
            created_at: None,
        }
    }

    #[test]
    fn partition_splits_unread_and_read_in_order() {
        let items = vec![
            notification("a", false),
            notification("b", true),
            notification("c", false),
        ];
        let (unread, read) = partition_notifications(&items);
        let unread_ids: Vec<_> = unread.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(unread_ids, vec!["a", "c"]);
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, "b");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_both_partitions() {
        let html = render_to_string(move || {
            let items = Signal::derive(|| {
                vec![
                    Notification {
                        id: "n1".into(),
                        title: "New task assigned".into(),
                        message: "Quarterly report".into(),
                        read: false,
                        created_at: None,
                    },
                    Notification {
                        id: "n2".into(),
                        title: "Leave approved".into(),
                        message: "Enjoy".into(),
                        read: true,
                        created_at: None,
                    },
                ]
            });
            view! {
                <NotificationPanel
                    items=items
                    error=Signal::derive(|| None)
                    on_mark_read=Callback::new(|_| {})
                    on_clear_all=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("New task assigned"));
        assert!(html.contains("Mark as read"));
        assert!(html.contains("Leave approved"));
    }

    #[test]
    fn empty_panel_says_so() {
        let html = render_to_string(move || {
            view! {
                <NotificationPanel
                    items=Signal::derive(Vec::new)
                    error=Signal::derive(|| None)
                    on_mark_read=Callback::new(|_| {})
                    on_clear_all=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No notifications"));
    }
}
