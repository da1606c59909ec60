use super::{
    repository::{TaskListing, TasksRepository},
    utils::{
        edit_from_task, filter_tasks, search_titles, with_status, ProgressFormState, TaskFormState,
        TaskGroups, EDITABLE_STATUSES, PROGRESS_CHOICES,
    },
};
use crate::{
    api::{ApiError, Employee, Task, TaskEdit, TaskStatus},
    components::{
        common::{Button, ButtonVariant, DateFilterBar, SearchBox},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::{FormMessages, MessageState},
        layout::loaded,
    },
    pages::employees::utils::employee_name,
    state::{auth::use_session, session::Session},
    utils::{
        search::{is_active_query, matches_query},
        time::{format_date, now, DateFilter},
    },
};
use leptos::{ev::SubmitEvent, *};

type Listing = Resource<u32, Result<TaskListing, ApiError>>;

fn listing_resource(repo: &TasksRepository, reload: RwSignal<u32>) -> Listing {
    let repo = repo.clone();
    create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.listing().await }
        },
    )
}

fn my_listing_resource(
    repo: &TasksRepository,
    today: bool,
    reload: RwSignal<u32>,
) -> Resource<(u32, Option<Session>), Result<TaskListing, ApiError>> {
    let session = use_session();
    let repo = repo.clone();
    create_resource(
        move || (reload.get(), session.user()),
        move |(_, user)| {
            let repo = repo.clone();
            async move {
                match user {
                    Some(user) => repo.my_listing(&user, today).await,
                    None => Ok(TaskListing::default()),
                }
            }
        },
    )
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

#[component]
pub fn TaskTable(
    tasks: Vec<Task>,
    employees: Vec<Employee>,
    #[prop(optional)] actions: Option<Callback<Task, View>>,
) -> impl IntoView {
    if tasks.is_empty() {
        return view! { <EmptyState title="No tasks found" /> }.into_view();
    }
    let has_actions = actions.is_some();
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left">"Title"</th>
                        <th class="px-4 py-2 text-left">"Assigned To"</th>
                        <th class="px-4 py-2 text-left">"Status"</th>
                        <th class="px-4 py-2 text-left">"Due Date"</th>
                        <th class="px-4 py-2 text-left">"Created"</th>
                        {has_actions.then(|| view! { <th class="px-4 py-2 text-right">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {tasks
                        .into_iter()
                        .map(|task| {
                            let assignee = employee_name(&employees, task.assigned_to.as_deref());
                            let cells = actions.map(|render| render.call(task.clone()));
                            view! {
                                <tr>
                                    <td class="px-4 py-2 font-medium text-fg">{task.title.clone()}</td>
                                    <td class="px-4 py-2">{assignee}</td>
                                    <td class="px-4 py-2">{task.status.label()}</td>
                                    <td class="px-4 py-2">{format_date(task.due_date)}</td>
                                    <td class="px-4 py-2">{format_date(task.created_at)}</td>
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
fn TaskDetails(task: Task, #[prop(into)] assignee: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-2">
            <h3 class="text-lg font-semibold text-fg">{task.title.clone()}</h3>
            <p class="text-sm text-fg-muted">{task.description.clone()}</p>
            <dl class="grid grid-cols-2 gap-2 text-sm">
                <dt class="text-fg-muted">"Assigned To"</dt>
                <dd class="text-fg">{assignee}</dd>
                <dt class="text-fg-muted">"Status"</dt>
                <dd class="text-fg">{task.status.label()}</dd>
                <dt class="text-fg-muted">"Due Date"</dt>
                <dd class="text-fg">{format_date(task.due_date)}</dd>
                <dt class="text-fg-muted">"Last Updated"</dt>
                <dd class="text-fg">{format_date(task.updated_at)}</dd>
            </dl>
        </div>
    }
}

#[component]
pub fn CreateTaskPage() -> impl IntoView {
    let session = use_session();
    let repo = TasksRepository::from_session();
    let repo_for_list = repo.clone();
    let employees = create_resource(
        || (),
        move |_| {
            let repo = repo_for_list.clone();
            async move { repo.assignable_employees().await }
        },
    );
    let form = create_rw_signal(TaskFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let create = create_action(move |payload: &TaskFormState| {
        let repo = repo.clone();
        let payload = payload.clone();
        let assigned_from = session
            .user_untracked()
            .map(|user| user.user_id)
            .unwrap_or_default();
        async move { repo.create(payload, assigned_from).await }
    });

    create_effect(move |_| {
        if let Some(result) = create.value().get() {
            messages.update(|state| state.set_result(&result, "Task created successfully."));
            if result.is_ok() {
                form.set(TaskFormState::default());
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageState::clear);
        create.dispatch(form.get_untracked());
    };

    view! {
        <section class="space-y-4 max-w-xl">
            <h2 class="text-2xl font-semibold text-fg">"Create New Task"</h2>
            <FormMessages messages=messages />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Title"</span>
                    <input
                        type="text"
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || form.with(|s| s.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.title = value);
                        }
                    />
                </label>
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
                    <span class="text-sm font-medium text-fg">"Assign To"</span>
                    {move || loaded(employees.get(), |list| {
                        view! {
                            <select
                                class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|s| s.assigned_to = value);
                                }
                            >
                                <option value="" selected=move || form.with(|s| s.assigned_to.is_empty())>
                                    "Select employee"
                                </option>
                                {list
                                    .into_iter()
                                    .map(|employee| {
                                        let id = employee.id.clone();
                                        view! {
                                            <option
                                                value=employee.id.clone()
                                                selected=move || form.with(|s| s.assigned_to == id)
                                            >
                                                {employee.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                        .into_view()
                    })}
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Due Date"</span>
                    <input
                        type="date"
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || form.with(|s| s.due_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.due_date = value);
                        }
                    />
                </label>
                <Button class="w-full" loading=create.pending()>"Create Task"</Button>
            </form>
        </section>
    }
}

#[component]
pub fn TaskManagementPage() -> impl IntoView {
    let repo = TasksRepository::from_session();
    let listing = listing_resource(&repo, create_rw_signal(0));
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(None::<(Task, String)>);

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Task Management"</h2>
            <SearchBox query=query placeholder="Search tasks by title" />
            {move || loaded(listing.get(), |TaskListing { tasks, employees }| {
                let q = query.get();
                if !is_active_query(&q) {
                    return view! {
                        <p class="text-sm text-fg-muted">"Type at least two characters to search."</p>
                    }
                    .into_view();
                }
                let hits: Vec<Task> = tasks
                    .into_iter()
                    .filter(|t| matches_query(&t.title, &q))
                    .collect();
                let lookup = employees.clone();
                let details = Callback::new(move |task: Task| {
                    let assignee = employee_name(&lookup, task.assigned_to.as_deref());
                    view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| selected.set(Some((task.clone(), assignee.clone())))
                        >
                            "Details"
                        </Button>
                    }
                    .into_view()
                });
                view! { <TaskTable tasks=hits employees=employees actions=details /> }.into_view()
            })}
            {move || selected.get().map(|(task, assignee)| view! { <TaskDetails task=task assignee=assignee /> })}
        </section>
    }
}

#[component]
pub fn ShowAllTasksPage() -> impl IntoView {
    let repo = TasksRepository::from_session();
    let listing = listing_resource(&repo, create_rw_signal(0));
    let query = create_rw_signal(String::new());
    let window = create_rw_signal(DateFilter::All);

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"All Tasks"</h2>
            <DateFilterBar filter=window />
            <SearchBox query=query placeholder="Search tasks by title" />
            {move || loaded(listing.get(), |TaskListing { tasks, employees }| {
                let visible = filter_tasks(&tasks, &query.get(), window.get(), now());
                view! { <TaskTable tasks=visible employees=employees /> }.into_view()
            })}
        </section>
    }
}

#[component]
fn AdminStatusTasks(#[prop(into)] title: String, status: TaskStatus) -> impl IntoView {
    let repo = TasksRepository::from_session();
    let listing = listing_resource(&repo, create_rw_signal(0));
    let query = create_rw_signal(String::new());

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">{title}</h2>
            <SearchBox query=query placeholder="Search tasks by title" />
            {move || loaded(listing.get(), |TaskListing { tasks, employees }| {
                let visible = filter_tasks(&with_status(&tasks, status), &query.get(), DateFilter::All, now());
                view! { <TaskTable tasks=visible employees=employees /> }.into_view()
            })}
        </section>
    }
}

#[component]
pub fn PendingTasksPage() -> impl IntoView {
    view! { <AdminStatusTasks title="Pending Tasks" status=TaskStatus::Pending /> }
}

#[component]
pub fn CompletedTasksPage() -> impl IntoView {
    view! { <AdminStatusTasks title="Completed Tasks" status=TaskStatus::Completed /> }
}

#[component]
pub fn UpdateTaskPage() -> impl IntoView {
    let repo = TasksRepository::from_session();
    let reload = create_rw_signal(0u32);
    let listing = listing_resource(&repo, reload);
    let query = create_rw_signal(String::new());
    let editing = create_rw_signal(None::<String>);
    let form = create_rw_signal(TaskEdit::default());
    let pending_delete = create_rw_signal(None::<Task>);
    let messages = create_rw_signal(MessageState::default());

    let repo_for_save = repo.clone();
    let save = create_action(move |(id, edit): &(String, TaskEdit)| {
        let repo = repo_for_save.clone();
        let (id, edit) = (id.clone(), edit.clone());
        async move { repo.edit(id, edit).await }
    });
    let delete = create_action(move |id: &String| {
        let repo = repo.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save.value().get() {
            messages.update(|state| state.set_result(&result, "Task updated."));
            if result.is_ok() {
                editing.set(None);
                bump(reload);
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete.value().get() {
            messages.update(|state| state.set_result(&result, "Task deleted."));
            bump(reload);
        }
    });

    let actions = Callback::new(move |task: Task| {
        let for_edit = task.clone();
        view! {
            <Button
                variant=ButtonVariant::Secondary
                on:click=move |_| {
                    form.set(edit_from_task(&for_edit));
                    editing.set(Some(for_edit.id.clone()));
                }
            >
                "Edit"
            </Button>
            <Button variant=ButtonVariant::Danger on:click=move |_| pending_delete.set(Some(task.clone()))>
                "Delete"
            </Button>
        }
        .into_view()
    });

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(id) = editing.get_untracked() {
            save.dispatch((id, form.get_untracked()));
        }
    };

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Edit Tasks"</h2>
            <FormMessages messages=messages />
            <SearchBox query=query placeholder="Search tasks by title" />
            {move || loaded(listing.get(), |TaskListing { tasks, employees }| {
                view! {
                    <TaskTable tasks=search_titles(&tasks, &query.get()) employees=employees actions=actions />
                }
                .into_view()
            })}
            <Show when=move || editing.with(Option::is_some)>
                <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_save>
                    <h3 class="text-lg font-semibold text-fg">"Edit Task"</h3>
                    <label class="block space-y-1">
                        <span class="text-sm font-medium text-fg">"Title"</span>
                        <input
                            type="text"
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=move || form.with(|s| s.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|s| s.title = value);
                            }
                        />
                    </label>
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
                        <span class="text-sm font-medium text-fg">"Due Date"</span>
                        <input
                            type="date"
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            prop:value=move || form.with(|s| s.due_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|s| s.due_date = value);
                            }
                        />
                    </label>
                    <label class="block space-y-1">
                        <span class="text-sm font-medium text-fg">"Status"</span>
                        <select
                            class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|s| s.status = value);
                            }
                        >
                            {EDITABLE_STATUSES
                                .iter()
                                .map(|status| view! {
                                    <option value=*status selected=move || form.with(|s| s.status == *status)>
                                        {*status}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="flex gap-2">
                        <Button loading=save.pending()>"Save"</Button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border"
                            on:click=move |_| editing.set(None)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete task"
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|t| format!("Delete \"{}\"? This cannot be undone.", t.title))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(move |_| {
                    if let Some(task) = pending_delete.get_untracked() {
                        delete.dispatch(task.id);
                    }
                    pending_delete.set(None);
                })
                on_cancel=Callback::new(move |_| pending_delete.set(None))
                confirm_label="Delete"
                destructive=true
            />
        </section>
    }
}

/// Progress report form for the selected task; closes and calls `on_done`
/// after a successful update.
#[component]
fn ProgressForm(
    selected: RwSignal<Option<Task>>,
    messages: RwSignal<MessageState>,
    on_done: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let repo = TasksRepository::from_session();
    let form = create_rw_signal(ProgressFormState::default());

    create_effect(move |_| {
        if let Some(task) = selected.get() {
            form.set(ProgressFormState::for_task(&task));
        }
    });

    let report = create_action(move |(task, state): &(Task, ProgressFormState)| {
        let repo = repo.clone();
        let (task, state) = (task.clone(), state.clone());
        let reporter = session
            .user_untracked()
            .map(|user| user.user_id)
            .unwrap_or_default();
        async move { repo.report_progress(task, reporter, state).await }
    });

    create_effect(move |_| {
        if let Some(result) = report.value().get() {
            messages.update(|state| state.set_result(&result, "Task updated successfully."));
            if result.is_ok() {
                selected.set(None);
                on_done.call(());
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(task) = selected.get_untracked() {
            report.dispatch((task, form.get_untracked()));
        }
    };

    view! {
        <Show when=move || selected.with(Option::is_some)>
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-fg">
                    {move || selected.get().map(|t| format!("Update: {}", t.title)).unwrap_or_default()}
                </h3>
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
                    <span class="text-sm font-medium text-fg">"Remarks"</span>
                    <input
                        type="text"
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        prop:value=move || form.with(|s| s.remarks.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.remarks = value);
                        }
                    />
                </label>
                <label class="block space-y-1">
                    <span class="text-sm font-medium text-fg">"Progress"</span>
                    <select
                        class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|s| s.progress = value);
                        }
                    >
                        <option value="" selected=move || form.with(|s| s.progress.is_empty())>"Select"</option>
                        {PROGRESS_CHOICES
                            .iter()
                            .map(|choice| view! {
                                <option value=*choice selected=move || form.with(|s| s.progress == *choice)>
                                    {*choice}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="flex gap-2">
                    <Button loading=report.pending()>"Submit"</Button>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border"
                        on:click=move |_| selected.set(None)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}

/// Own tasks in the given statuses, with date window, title search and an
/// optional progress update.
#[component]
fn MyStatusTasks(
    #[prop(into)] title: String,
    statuses: &'static [TaskStatus],
    #[prop(optional)] today: bool,
    #[prop(optional)] with_progress: bool,
) -> impl IntoView {
    let repo = TasksRepository::from_session();
    let reload = create_rw_signal(0u32);
    let listing = my_listing_resource(&repo, today, reload);
    let query = create_rw_signal(String::new());
    let window = create_rw_signal(DateFilter::All);
    let selected = create_rw_signal(None::<Task>);
    let messages = create_rw_signal(MessageState::default());

    let actions = with_progress.then(|| {
        Callback::new(move |task: Task| {
            view! {
                <Button
                    variant=ButtonVariant::Secondary
                    on:click=move |_| {
                        messages.update(MessageState::clear);
                        selected.set(Some(task.clone()));
                    }
                >
                    "Update"
                </Button>
            }
            .into_view()
        })
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">{title}</h2>
            <FormMessages messages=messages />
            {(!today).then(|| view! { <DateFilterBar filter=window /> })}
            <SearchBox query=query placeholder="Search tasks by title" />
            {move || loaded(listing.get(), |TaskListing { tasks, employees }| {
                let in_status: Vec<Task> = tasks
                    .into_iter()
                    .filter(|t| statuses.contains(&t.status))
                    .collect();
                let visible = filter_tasks(&in_status, &query.get(), window.get(), now());
                match actions {
                    Some(actions) => view! { <TaskTable tasks=visible employees=employees actions=actions /> }.into_view(),
                    None => view! { <TaskTable tasks=visible employees=employees /> }.into_view(),
                }
            })}
            {with_progress.then(|| view! {
                <ProgressForm
                    selected=selected
                    messages=messages
                    on_done=Callback::new(move |_| bump(reload))
                />
            })}
        </section>
    }
}

#[component]
fn TaskColumn(#[prop(into)] title: String, tasks: Vec<Task>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <h3 class="text-sm font-semibold text-fg">{format!("{} ({})", title, tasks.len())}</h3>
            <ul class="space-y-1 text-sm">
                {tasks
                    .into_iter()
                    .map(|task| view! {
                        <li class="rounded border border-border px-2 py-1">
                            <span class="text-fg">{task.title}</span>
                            <span class="block text-xs text-fg-muted">{format!("Due {}", format_date(task.due_date))}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn EmployeeTaskManagementPage() -> impl IntoView {
    let repo = TasksRepository::from_session();
    let listing = my_listing_resource(&repo, true, create_rw_signal(0));
    let query = create_rw_signal(String::new());

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Today's Tasks"</h2>
            <SearchBox query=query placeholder="Search tasks by title" />
            {move || loaded(listing.get(), |TaskListing { tasks, employees }| {
                let q = query.get();
                let matches = is_active_query(&q).then(|| {
                    let hits = filter_tasks(&tasks, &q, DateFilter::All, now());
                    view! { <TaskTable tasks=hits employees=employees /> }
                });
                let groups = TaskGroups::from_tasks(&tasks);
                view! {
                    {matches}
                    <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                        <TaskColumn title="New" tasks=groups.new />
                        <TaskColumn title="Pending" tasks=groups.pending />
                        <TaskColumn title="Completed" tasks=groups.completed />
                    </div>
                }
                .into_view()
            })}
        </section>
    }
}

#[component]
pub fn NewTasksPage() -> impl IntoView {
    view! {
        <MyStatusTasks
            title="New Tasks"
            statuses=&[TaskStatus::New, TaskStatus::Pending]
            today=true
            with_progress=true
        />
    }
}

#[component]
pub fn EmployeePendingTasksPage() -> impl IntoView {
    view! { <MyStatusTasks title="Pending Tasks" statuses=&[TaskStatus::Pending] with_progress=true /> }
}

#[component]
pub fn EmployeeCompletedTasksPage() -> impl IntoView {
    view! { <MyStatusTasks title="Completed Tasks" statuses=&[TaskStatus::Completed] /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, employee_user, provide_session};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::time::parse_timestamp;

    fn sample() -> (Vec<Task>, Vec<Employee>) {
        let task = Task {
            id: "t1".into(),
            title: "Quarterly report".into(),
            description: "Numbers".into(),
            assigned_to: Some("e1".into()),
            assigned_from: Some("u-admin".into()),
            status: TaskStatus::InProgress,
            due_date: parse_timestamp("2024-06-01"),
            created_at: parse_timestamp("2024-05-01"),
            updated_at: None,
        };
        let employee = Employee {
            id: "e1".into(),
            name: "Jane Doe".into(),
            ..Employee::default()
        };
        (vec![task], vec![employee])
    }

    #[test]
    fn task_table_shows_assignee_name_and_status() {
        let html = render_to_string(move || {
            let (tasks, employees) = sample();
            view! { <TaskTable tasks=tasks employees=employees /> }
        });
        assert!(html.contains("Quarterly report"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("In Progress"));
        assert!(html.contains("2024-06-01"));
    }

    #[test]
    fn unknown_assignee_is_labelled() {
        let html = render_to_string(move || {
            let (tasks, _) = sample();
            view! { <TaskTable tasks=tasks employees=Vec::new() /> }
        });
        assert!(html.contains("Unknown"));
    }

    #[test]
    fn task_columns_count_their_tasks() {
        let html = render_to_string(move || {
            let (tasks, _) = sample();
            view! { <TaskColumn title="Pending" tasks=tasks /> }
        });
        assert!(html.contains("Pending (1)"));
        assert!(html.contains("Due 2024-06-01"));
    }

    #[test]
    fn create_task_page_renders_form() {
        let html = render_to_string(move || {
            provide_session(Some(admin_user()));
            view! { <CreateTaskPage /> }
        });
        assert!(html.contains("Create New Task"));
        assert!(html.contains("Assign To"));
        assert!(html.contains("Due Date"));
    }

    #[test]
    fn pending_page_offers_date_filters() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            view! { <EmployeePendingTasksPage /> }
        });
        assert!(html.contains("Pending Tasks"));
        assert!(html.contains("This Week"));
    }
}
