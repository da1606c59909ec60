use super::{
    metrics::{AdminMetrics, EmployeeMetrics},
    repository::DashboardRepository,
};
use crate::{components::layout::loaded, state::auth::use_session};
use leptos::*;

#[component]
fn MetricCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-5">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-fg">{value}</p>
        </div>
    }
}

/// Two-segment bar with the first share as a percentage.
#[component]
fn SplitBar(
    #[prop(into)] title: String,
    first: (&'static str, usize),
    second: (&'static str, usize),
    percent: f64,
) -> impl IntoView {
    let width = format!("width: {:.0}%", percent);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-5 space-y-2">
            <p class="text-sm font-semibold text-fg">{title}</p>
            <div class="h-3 w-full rounded-full bg-surface-muted overflow-hidden">
                <div class="h-3 bg-action-primary-bg" style=width></div>
            </div>
            <p class="text-xs text-fg-muted">
                {format!("{}: {} ({:.0}%) / {}: {}", first.0, first.1, percent, second.0, second.1)}
            </p>
        </div>
    }
}

#[component]
pub fn AdminMetricsView(metrics: AdminMetrics) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <MetricCard label="Employees" value=metrics.total_employees.to_string() />
            <MetricCard label="Completed Tasks" value=metrics.completed.to_string() />
            <MetricCard label="Pending Tasks" value=metrics.pending.to_string() />
            <MetricCard
                label="Avg. Overdue Days"
                value=format!("{:.1}", metrics.average_overdue_days)
            />
        </div>
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
            <SplitBar
                title="This Month"
                first=("Completed", metrics.month_completed)
                second=("Pending", metrics.month_pending)
                percent=metrics.month_completed_percent()
            />
            <SplitBar
                title="Due Date Performance"
                first=("Within due date", metrics.within_due)
                second=("Over due date", metrics.over_due)
                percent=metrics.within_due_percent()
            />
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let repo = DashboardRepository::from_session();
    let metrics = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.admin_metrics().await }
        },
    );

    view! {
        <section class="space-y-6">
            <h2 class="text-2xl font-semibold text-fg">"Admin Dashboard"</h2>
            {move || loaded(metrics.get(), |metrics| {
                view! { <AdminMetricsView metrics=metrics /> }.into_view()
            })}
        </section>
    }
}

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let session = use_session();
    let repo = DashboardRepository::from_session();
    let metrics = create_resource(
        move || session.user(),
        move |user| {
            let repo = repo.clone();
            async move {
                match user {
                    Some(user) => repo.employee_metrics(user).await,
                    None => Ok(EmployeeMetrics::default()),
                }
            }
        },
    );
    let greeting = move || {
        session
            .user()
            .map(|user| format!("Welcome, {}", user.username))
            .unwrap_or_default()
    };

    view! {
        <section class="space-y-6">
            <h2 class="text-2xl font-semibold text-fg">{greeting}</h2>
            {move || loaded(metrics.get(), |metrics| {
                view! {
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                        <MetricCard label="Completed Tasks" value=metrics.completed.to_string() />
                        <MetricCard label="Pending Tasks" value=metrics.pending.to_string() />
                        <MetricCard label="Approved Leaves" value=metrics.approved_leaves.to_string() />
                    </div>
                }
                .into_view()
            })}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{employee_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_metrics_view_renders_cards_and_splits() {
        let html = render_to_string(move || {
            let metrics = AdminMetrics {
                total_employees: 12,
                completed: 3,
                pending: 1,
                average_overdue_days: 1.5,
                month_completed: 3,
                month_pending: 1,
                within_due: 2,
                over_due: 1,
            };
            view! { <AdminMetricsView metrics=metrics /> }
        });
        assert!(html.contains("Employees"));
        assert!(html.contains("12"));
        assert!(html.contains("1.5"));
        assert!(html.contains("Completed: 3 (75%) &#x2F; Pending: 1"));
        assert!(html.contains("Within due date: 2 (67%)"));
    }

    #[test]
    fn employee_dashboard_greets_user() {
        let html = render_to_string(move || {
            provide_session(Some(employee_user()));
            view! { <EmployeeDashboardPage /> }
        });
        assert!(html.contains("Welcome, jane"));
    }
}
