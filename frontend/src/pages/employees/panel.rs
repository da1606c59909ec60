use super::{
    repository::EmployeesRepository,
    utils::{
        filter_employees, search_employees, AccountFormState, EmployeeFormState, ACCOUNT_ROLES,
        GENDERS,
    },
};
use crate::{
    api::{ApiError, Employee},
    components::{
        common::{Button, ButtonVariant, SearchBox, TextField},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::{FormMessages, MessageState},
        layout::loaded,
    },
    utils::search::is_active_query,
};
use leptos::{ev::SubmitEvent, *};

type EmployeeList = Resource<u32, Result<Vec<Employee>, ApiError>>;

fn employee_resource(repo: &EmployeesRepository, reload: RwSignal<u32>) -> EmployeeList {
    let repo = repo.clone();
    create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        },
    )
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

#[component]
pub fn EmployeeTable(
    employees: Vec<Employee>,
    #[prop(optional)] actions: Option<Callback<Employee, View>>,
) -> impl IntoView {
    if employees.is_empty() {
        return view! { <EmptyState title="No employees found" /> }.into_view();
    }
    let has_actions = actions.is_some();
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left">"Name"</th>
                        <th class="px-4 py-2 text-left">"Email"</th>
                        <th class="px-4 py-2 text-left">"Department"</th>
                        <th class="px-4 py-2 text-left">"Designation"</th>
                        <th class="px-4 py-2 text-left">"Status"</th>
                        {has_actions.then(|| view! { <th class="px-4 py-2 text-right">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let cells = actions.map(|render| render.call(employee.clone()));
                            view! {
                                <tr>
                                    <td class="px-4 py-2 font-medium text-fg">{employee.name.clone()}</td>
                                    <td class="px-4 py-2">{employee.email.clone()}</td>
                                    <td class="px-4 py-2">{employee.department.clone().unwrap_or_default()}</td>
                                    <td class="px-4 py-2">{employee.designation.clone().unwrap_or_default()}</td>
                                    <td class="px-4 py-2">{employee.status.clone().unwrap_or_else(|| "-".into())}</td>
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

fn form_field(
    form: RwSignal<EmployeeFormState>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&EmployeeFormState) -> String,
    set: fn(&mut EmployeeFormState, String),
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
fn EmployeeFields(form: RwSignal<EmployeeFormState>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
            {form_field(form, "Name", "text", |s| s.name.clone(), |s, v| s.name = v)}
            {form_field(form, "Email", "email", |s| s.email.clone(), |s, v| s.email = v)}
            {form_field(form, "Department", "text", |s| s.department.clone(), |s, v| s.department = v)}
            {form_field(form, "Designation", "text", |s| s.designation.clone(), |s, v| s.designation = v)}
            {form_field(form, "Phone Number", "tel", |s| s.phone_number.clone(), |s, v| s.phone_number = v)}
            {form_field(form, "Aadhaar Number", "text", |s| s.aadhaar_number.clone(), |s, v| s.aadhaar_number = v)}
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Gender"</span>
                <select
                    class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.gender = value);
                    }
                >
                    <option value="" selected=move || form.with(|s| s.gender.is_empty())>"Select"</option>
                    {GENDERS
                        .iter()
                        .map(|gender| {
                            view! {
                                <option value=*gender selected=move || form.with(|s| s.gender == *gender)>
                                    {*gender}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            {form_field(form, "Address", "text", |s| s.address.clone(), |s, v| s.address = v)}
        </div>
    }
}

#[component]
pub fn CreateEmployeePage() -> impl IntoView {
    let repo = EmployeesRepository::from_session();
    let form = create_rw_signal(EmployeeFormState::default());
    let messages = create_rw_signal(MessageState::default());

    let create = create_action(move |payload: &EmployeeFormState| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.create(payload.to_new_employee()?).await }
    });

    create_effect(move |_| {
        if let Some(result) = create.value().get() {
            messages.update(|state| state.set_result(&result, "Employee added successfully."));
            if result.is_ok() {
                form.set(EmployeeFormState::default());
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageState::clear);
        create.dispatch(form.get_untracked());
    };

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Add Employee"</h2>
            <FormMessages messages=messages />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <EmployeeFields form=form />
                <Button loading=create.pending()>"Add Employee"</Button>
            </form>
        </section>
    }
}

#[component]
pub fn EmployeeManagementPage() -> impl IntoView {
    let repo = EmployeesRepository::from_session();
    let employees = employee_resource(&repo, create_rw_signal(0));
    let query = create_rw_signal(String::new());
    let selected = create_rw_signal(None::<Employee>);

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Employee Management"</h2>
            <SearchBox query=query placeholder="Search employees by name" />
            {move || loaded(employees.get(), |list| {
                let q = query.get();
                if !is_active_query(&q) {
                    return view! {
                        <p class="text-sm text-fg-muted">"Type at least two characters to search."</p>
                    }
                    .into_view();
                }
                let details = Callback::new(move |employee: Employee| {
                    view! {
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| selected.set(Some(employee.clone()))
                        >
                            "Details"
                        </Button>
                    }
                    .into_view()
                });
                view! { <EmployeeTable employees=search_employees(&list, &q) actions=details /> }
            })}
            {move || selected.get().map(|employee| view! { <EmployeeDetails employee=employee /> })}
        </section>
    }
}

#[component]
fn EmployeeDetails(employee: Employee) -> impl IntoView {
    let rows = [
        ("Email", Some(employee.email.clone())),
        ("Department", employee.department.clone()),
        ("Designation", employee.designation.clone()),
        ("Phone", employee.phone_number.clone()),
        ("Gender", employee.gender.clone()),
        ("Aadhaar", employee.aadhaar_number.clone()),
        ("Address", employee.address.clone()),
        ("Status", employee.status.clone()),
    ];
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <h3 class="text-lg font-semibold text-fg mb-3">{employee.name.clone()}</h3>
            <dl class="grid grid-cols-2 gap-2 text-sm">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="text-fg-muted">{label}</dt>
                        <dd class="text-fg">{value.unwrap_or_else(|| "-".into())}</dd>
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}

#[component]
pub fn ShowAllEmployeesPage() -> impl IntoView {
    let repo = EmployeesRepository::from_session();
    let employees = employee_resource(&repo, create_rw_signal(0));
    let selected = create_rw_signal(None::<Employee>);
    let messages = create_rw_signal(MessageState::default());

    let create_account = create_action(move |(employee, form): &(Employee, AccountFormState)| {
        let repo = repo.clone();
        let employee = employee.clone();
        let form = form.clone();
        async move { repo.create_account(employee, form).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_account.value().get() {
            messages.update(|state| state.set_result(&result, "Account created successfully."));
            if result.is_ok() {
                selected.set(None);
            }
        }
    });

    let actions = Callback::new(move |employee: Employee| {
        view! {
            <Button
                variant=ButtonVariant::Secondary
                on:click=move |_| {
                    messages.update(MessageState::clear);
                    selected.set(Some(employee.clone()));
                }
            >
                "Create Account"
            </Button>
        }
        .into_view()
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"All Employees"</h2>
            <FormMessages messages=messages />
            {move || loaded(employees.get(), |list| view! { <EmployeeTable employees=list actions=actions /> })}
            {move || {
                selected
                    .get()
                    .map(|employee| {
                        view! {
                            <AccountForm
                                employee=employee
                                messages=messages
                                pending=create_account.pending()
                                on_submit=Callback::new(move |request: (Employee, AccountFormState)| {
                                    create_account.dispatch(request)
                                })
                                on_cancel=Callback::new(move |_| selected.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn AccountForm(
    employee: Employee,
    messages: RwSignal<MessageState>,
    pending: ReadSignal<bool>,
    on_submit: Callback<(Employee, AccountFormState)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(ACCOUNT_ROLES[0].to_string());
    let heading = format!("Create Account for {}", employee.name);
    let contact = format!(
        "{} / {}",
        employee.email,
        employee.phone_number.clone().unwrap_or_else(|| "-".into())
    );

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = AccountFormState {
            username: username.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        if let Err(err) = form.to_signup(&employee) {
            messages.update(|state| state.set_error(err.error));
            return;
        }
        on_submit.call((employee.clone(), form));
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=submit>
            <h3 class="text-lg font-semibold text-fg">{heading}</h3>
            <p class="text-sm text-fg-muted">{contact}</p>
            <TextField label="Username" value=username />
            <label class="block space-y-1">
                <span class="text-sm font-medium text-fg">"Role"</span>
                <select
                    class="block w-full rounded-md border border-border px-3 py-2 text-sm"
                    on:change=move |ev| role.set(event_target_value(&ev))
                >
                    {ACCOUNT_ROLES
                        .iter()
                        .map(|value| {
                            view! {
                                <option value=*value selected=move || role.get() == *value>
                                    {*value}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <TextField label="Password" value=password input_type="password" />
            <div class="flex gap-2">
                <Button loading=pending>"Create Account"</Button>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn EditEmployeesPage() -> impl IntoView {
    let repo = EmployeesRepository::from_session();
    let reload = create_rw_signal(0u32);
    let employees = employee_resource(&repo, reload);
    let query = create_rw_signal(String::new());
    let editing = create_rw_signal(None::<Employee>);
    let form = create_rw_signal(EmployeeFormState::default());
    let pending_delete = create_rw_signal(None::<Employee>);
    let messages = create_rw_signal(MessageState::default());

    let repo_for_save = repo.clone();
    let save = create_action(move |(employee, edited): &(Employee, EmployeeFormState)| {
        let repo = repo_for_save.clone();
        let updated = edited.apply_to(employee);
        async move { repo.update(updated?).await }
    });
    let delete = create_action(move |id: &String| {
        let repo = repo.clone();
        let id = id.clone();
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save.value().get() {
            messages.update(|state| state.set_result(&result, "Employee updated."));
            if result.is_ok() {
                editing.set(None);
                bump(reload);
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete.value().get() {
            messages.update(|state| state.set_result(&result, "Employee deleted."));
            bump(reload);
        }
    });

    let actions = Callback::new(move |employee: Employee| {
        let for_edit = employee.clone();
        view! {
            <Button
                variant=ButtonVariant::Secondary
                on:click=move |_| {
                    form.set(EmployeeFormState::from_employee(&for_edit));
                    editing.set(Some(for_edit.clone()));
                }
            >
                "Edit"
            </Button>
            <Button
                variant=ButtonVariant::Danger
                on:click=move |_| pending_delete.set(Some(employee.clone()))
            >
                "Delete"
            </Button>
        }
        .into_view()
    });

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(employee) = editing.get_untracked() {
            save.dispatch((employee, form.get_untracked()));
        }
    };

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Edit Employees"</h2>
            <FormMessages messages=messages />
            <SearchBox query=query placeholder="Search employee" />
            {move || loaded(employees.get(), |list| {
                view! { <EmployeeTable employees=filter_employees(&list, &query.get()) actions=actions /> }
            })}
            <Show when=move || editing.with(Option::is_some)>
                <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_save>
                    <h3 class="text-lg font-semibold text-fg">"Edit Employee"</h3>
                    <EmployeeFields form=form />
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
                title="Delete employee"
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|e| format!("Delete {}? This cannot be undone.", e.name))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(move |_| {
                    if let Some(employee) = pending_delete.get_untracked() {
                        delete.dispatch(employee.id);
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

#[component]
pub fn EmployeeStatusPage() -> impl IntoView {
    let repo = EmployeesRepository::from_session();
    let reload = create_rw_signal(0u32);
    let employees = employee_resource(&repo, reload);
    let query = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());

    let toggle = create_action(move |employee: &Employee| {
        let repo = repo.clone();
        let employee = employee.clone();
        async move {
            let name = employee.name.clone();
            repo.toggle_status(employee)
                .await
                .map(|status| format!("{} is now {}.", name, status))
        }
    });

    create_effect(move |_| {
        if let Some(result) = toggle.value().get() {
            match result {
                Ok(message) => messages.update(|state| state.set_success(message)),
                Err(err) => messages.update(|state| state.set_error(err.error)),
            }
            bump(reload);
        }
    });

    let actions = Callback::new(move |employee: Employee| {
        let label = if employee.is_active() { "Deactivate" } else { "Activate" };
        let variant = if employee.is_active() {
            ButtonVariant::Danger
        } else {
            ButtonVariant::Primary
        };
        view! {
            <Button variant=variant on:click=move |_| toggle.dispatch(employee.clone())>
                {label}
            </Button>
        }
        .into_view()
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-semibold text-fg">"Employee Status"</h2>
            <FormMessages messages=messages />
            <SearchBox query=query placeholder="Search employee" />
            {move || loaded(employees.get(), |list| {
                view! { <EmployeeTable employees=filter_employees(&list, &query.get()) actions=actions /> }
            })}
        </section>
    }
}
