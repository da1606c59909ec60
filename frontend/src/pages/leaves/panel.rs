use super::{
    repository::LeavesRepository,
    utils::{
        filter_leaves, pending_requests, search_by_name, LeaveFormState, APPROVED, LEAVE_STATUSES,
        LEAVE_TYPES, REJECTED,
    },
};
use crate::{
    api::{ApiError, Employee, HistoryPeriod, LeaveRequest},
    components::{
        common::{Button, ButtonVariant, DateFilterBar, SearchBox},
        empty_state::EmptyState,
        error::{FormMessages, MessageState},
        layout::loaded,
    },
    pages::employees::utils::filter_employees,
    state::auth::use_session,
    utils::time::{format_date, now, DateFilter},
};
use leptos::{ev::SubmitEvent, *};

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

#[component]
pub fn LeaveTable(
    leaves: Vec<LeaveRequest>,
    #[prop(optional)] actions: Option<Callback<LeaveRequest, View>>,
) -> impl IntoView {
    if leaves.is_empty() {
        return view! { <EmptyState title="No leave requests found" /> }.into_view();
    }
    let has_actions = actions.is_some();
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left">"Employee"</th>
                        <th class="px-4 py-2 text-left">"Type"</th>
                        <th class="px-4 py-2 text-left">"Start"</th>
                        <th class="px-4 py-2 text-left">"End"</th>
                        <th class="px-4 py-2 text-left">"Description"</th>
                        <th class="px-4 py-2 text-left">"Status"</th>
                        {has_actions.then(|| view! { <th class="px-4 py-2 text-right">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {leaves
                        .into_iter()
                        .map(|leave| {
                            let cells = actions.map(|render| render.call(leave.clone()));
                            view! {
                                <tr>
                                    <td class="px-4 py-2 font-medium text-fg">{leave.name.clone().unwrap_or_else(|| "-".into())}</td>
                                    <td class="px-4 py-2">{leave.leave_type.clone()}</td>
                                    <td class="px-4 py-2">{format_date(leave.start_date)}</td>
                                    <td class="px-4 py-2">{format_date(leave.end_date)}</td>
                                    <td class="px-4 py-2">{leave.description.clone().unwrap_or_default()}</td>
                                    <td class="px-4 py-2">{leave.status_label()}</td>
                                    {cells.map(|cells| view! { <td class="px-4 py-2 text-right space-x-2">{cells}</td> })}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

#[component]
pub fn GrantLeavePage() -> impl IntoView {
    let session = use_session();
    let repo = LeavesRepository::from_session();
    let reload = create_rw_signal(0u32);
    let repo_for_list = repo.clone();
    let leaves = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.list().await }
        },
    );
    let messages = create_rw_signal(MessageState::default());

    let decide = create_action(move |(leave, status): &(LeaveRequest, &'static str)| {
        let repo = repo.clone();
        let (leave, status) = (leave.clone(), *status);
        let admin = session
            .user_untracked()
            .map(|user| user.user_id)
            .unwrap_or_default();
        async move { repo.decide(leave, admin, status).await }
    });

    create_effect(move |_| {
        if let Some(result) = decide.value().get() {
            messages.update(|state| {
                state.set_result(&result, "Leave request updated successfully!")
            });
            bump(reload);
        }
    });

    let actions = Callback::new(move |leave: LeaveRequest| {
        let rejected = leave.clone();
        view! {
            <Button on:click=move |_| decide.dispatch((leave.clone(), APPROVED))>"Approve"</Button>
            <Button variant=ButtonVariant::Danger on:click=move |_| decide.dispatch((rejected.clone(), REJECTED))>
                "Reject"
            </Button>
        }
        .into_view()
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Leave Requests"</h2>
            <FormMessages messages=messages />
            {move || loaded(leaves.get(), |list| {
                view! { <LeaveTable leaves=pending_requests(&list) actions=actions /> }.into_view()
            })}
        </section>
    }
}

#[component]
pub fn LeaveTrackPage() -> impl IntoView {
    let repo = LeavesRepository::from_session();
    let repo_for_list = repo.clone();
    let employees = create_resource(
        || (),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.employees().await }
        },
    );
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(None::<Employee>);
    let period = create_rw_signal(HistoryPeriod::All);

    let history = create_resource(
        move || (selected.get().map(|e| e.id), period.get()),
        move |(employee_id, period)| {
            let repo = repo.clone();
            async move {
                match employee_id {
                    Some(id) => repo.history(id, period).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Leave History"</h2>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <div class="space-y-3">
                    <SearchBox query=query placeholder="Search employees" />
                    {move || loaded(employees.get(), |list| {
                        filter_employees(&list, &query.get())
                            .into_iter()
                            .map(|employee| {
                                let label = format!("{} ({})", employee.name, employee.email);
                                view! {
                                    <button
                                        type="button"
                                        class="block w-full text-left px-3 py-2 rounded-md border border-border text-sm hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| selected.set(Some(employee.clone()))
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    })}
                </div>
                <div class="space-y-3">
                    <Show
                        when=move || selected.with(Option::is_some)
                        fallback=|| view! { <p class="text-sm text-fg-muted">"Select an employee to view leave history."</p> }
                    >
                        <div class="flex items-center justify-between">
                            <h3 class="text-lg font-semibold text-fg">
                                {move || selected.get().map(|e| e.name).unwrap_or_default()}
                            </h3>
                            <select
                                class="rounded-md border border-border px-3 py-2 text-sm"
                                on:change=move |ev| period.set(HistoryPeriod::from_query(&event_target_value(&ev)))
                            >
                                {HistoryPeriod::ALL
                                    .into_iter()
                                    .map(|option| view! {
                                        <option value=option.as_query() selected=move || period.get() == option>
                                            {option.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        {move || loaded(history.get(), |list| view! { <LeaveTable leaves=list /> }.into_view())}
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn LeaveManagementPage() -> impl IntoView {
    let repo = LeavesRepository::from_session();
    let leaves = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        },
    );
    let query = create_rw_signal(String::new());

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Leave Management"</h2>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <a href="/req-leave" class="block bg-surface-elevated shadow rounded-lg p-5 hover:bg-action-ghost-bg-hover">
                    <p class="text-lg font-semibold text-fg">"Request Leave"</p>
                    <p class="text-sm text-fg-muted">"Submit a new leave request."</p>
                </a>
                <a href="/leave-status" class="block bg-surface-elevated shadow rounded-lg p-5 hover:bg-action-ghost-bg-hover">
                    <p class="text-lg font-semibold text-fg">"Check Leave Status"</p>
                    <p class="text-sm text-fg-muted">"Track the decision on your requests."</p>
                </a>
            </div>
            <SearchBox query=query placeholder="Search leave requests by name" />
            {move || loaded(leaves.get(), |list| {
                let q = query.get();
                let hits = search_by_name(&list, &q);
                if hits.is_empty() {
                    return ().into_view();
                }
                view! { <LeaveTable leaves=hits /> }.into_view()
            })}
        </section>
    }
}

#[component]
pub fn RequestLeavePage() -> impl IntoView {
    let session = use_session();
    let repo = LeavesRepository::from_session();
    let repo_for_admins = repo.clone();
    let admins = create_resource(
        || (),
        move |_| {
            let repo = repo_for_admins.clone();
            async move { repo.admins().await }
        },
    );
    let form = create_rw_signal(LeaveFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let submit = create_action(move |state: &LeaveFormState| {
        let repo = repo.clone();
        let state = state.clone();
        let user = session.user_untracked();
        async move {
            match user {
                Some(user) => repo.request(state, user).await,
                None => Err(ApiError::unknown("Not signed in.")),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit.value().get() {
            messages.update(|state| state.set_result(&result, "Leave request submitted!"));
            if result.is_ok() {
                form.set(LeaveFormState::default());
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageState::clear);
        submit.dispatch(form.get_untracked());
    };

    view! {
        <section class="space-y-4 max-w-xl">
            <h2 class="text-2xl font-semibold text-fg">"Request Leave"</h2>
            <FormMessages messages=messages />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Leave Type"</span>
                    <select
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.leave_type = value);
                        }
                    >
                        {LEAVE_TYPES
                            .iter()
                            .map(|kind| view! {
                                <option value=*kind selected=move || form.with(|s| s.leave_type == *kind)>{*kind}</option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="grid grid-cols-2 gap-4">
                    <label class="block space-y-1">
                        <span class="text-sm font-medium text-fg">"Start Date"</span>
                        <input
                            type="date"
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=move || form.with(|s| s.start_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|s| s.start_date = value);
                            }
                        />
                    </label>
                    <label class="block space-y-1">
                        <span class="text-sm font-medium text-fg">"End Date"</span>
                        <input
                            type="date"
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=move || form.with(|s| s.end_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|s| s.end_date = value);
                            }
                        />
                    </label>
                </div>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Description"</span>
                    <textarea
                        rows="3"
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || form.with(|s| s.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.description = value);
                        }
                    ></textarea>
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Reviewing Admin"</span>
                    {move || loaded(admins.get(), |list| {
                        if list.is_empty() {
                            return view! { <p class="text-sm text-fg-muted">"No admins available"</p> }.into_view();
                        }
                        view! {
                            <select
                                class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|s| s.assigned_admin = value);
                                }
                            >
                                <option value="" selected=move || form.with(|s| s.assigned_admin.is_empty())>
                                    "Select admin"
                                </option>
                                {list
                                    .into_iter()
                                    .map(|admin| {
                                        let id = admin.id.clone();
                                        view! {
                                            <option value=admin.id.clone() selected=move || form.with(|s| s.assigned_admin == id)>
                                                {admin.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                        .into_view()
                    })}
                </label>
                <Button class="w-full" loading=submit.pending()>"Submit Request"</Button>
            </form>
        </section>
    }
}

#[component]
pub fn LeaveStatusPage() -> impl IntoView {
    let session = use_session();
    let repo = LeavesRepository::from_session();
    let leaves = create_resource(
        move || session.user().map(|user| user.user_id),
        move |user_id| {
            let repo = repo.clone();
            async move {
                match user_id {
                    Some(id) => repo.mine(&id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );
    let status = create_rw_signal(String::new());
    let window = create_rw_signal(DateFilter::All);

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Leave Status"</h2>
            <div class="flex flex-wrap items-center gap-4">
                <select
                    class="rounded-md border border-border px-3 py-2 text-sm"
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    <option value="" selected=move || status.with(String::is_empty)>"All Statuses"</option>
                    {LEAVE_STATUSES
                        .iter()
                        .map(|option| view! {
                            <option value=*option selected=move || status.with(|s| s == option)>{*option}</option>
                        })
                        .collect_view()}
                </select>
                <DateFilterBar filter=window />
            </div>
            {move || loaded(leaves.get(), |list| {
                let visible = filter_leaves(&list, &status.get(), window.get(), now());
                view! { <LeaveTable leaves=visible /> }.into_view()
            })}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, employee_user, provide_session};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::time::parse_timestamp;

    fn sample() -> Vec<LeaveRequest> {
        vec![LeaveRequest {
            id: "l1".into(),
            employee_id: Some("u-jane".into()),
            name: Some("Jane Doe".into()),
            leave_type: "Vacation".into(),
            start_date: parse_timestamp("2024-06-03"),
            end_date: parse_timestamp("2024-06-05"),
            description: Some("Trip".into()),
            status: None,
            ..LeaveRequest::default()
        }]
    }

    #[test]
    fn leave_table_defaults_missing_status_to_pending() {
        let html = render_to_string(move || view! { <LeaveTable leaves=sample() /> });
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Vacation"));
        assert!(html.contains("2024-06-05"));
        assert!(html.contains("Pending"));
    }

    #[test]
    fn leave_table_renders_actions() {
        let html = render_to_string(move || {
            let actions =
                Callback::new(|leave: LeaveRequest| format!("decide-{}", leave.id).into_view());
            view! { <LeaveTable leaves=sample() actions=actions /> }
        });
        assert!(html.contains("decide-l1"));
    }

    #[test]
    fn request_form_lists_leave_types() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            view! { <RequestLeavePage /> }
        });
        assert!(html.contains("Request Leave"));
        assert!(html.contains("Emergency"));
        assert!(html.contains("Reviewing Admin"));
    }

    #[test]
    fn status_page_offers_status_filter() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            view! { <LeaveStatusPage /> }
        });
        assert!(html.contains("All Statuses"));
        assert!(html.contains("Rejected"));
        assert!(html.contains("This Month"));
    }

    #[test]
    fn track_page_prompts_for_employee() {
        let html = render_to_string(move || {
            provide_session(Some(admin_user()));
            view! { <LeaveTrackPage /> }
        });
        assert!(html.contains("Select an employee to view leave history."));
    }
}
