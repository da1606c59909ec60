pub mod dashboard;
pub mod employees;
pub mod leaves;
pub mod login;
pub mod profile;
pub mod tasks;

use crate::router::routes::Screen;
use dashboard::{AdminDashboardPage, EmployeeDashboardPage};
use employees::{
    CreateEmployeePage, EditEmployeesPage, EmployeeManagementPage, EmployeeStatusPage,
    ShowAllEmployeesPage,
};
use leaves::{
    GrantLeavePage, LeaveManagementPage, LeaveStatusPage, LeaveTrackPage, RequestLeavePage,
};
use leptos::*;
use profile::ProfilePage;
use tasks::{
    CompletedTasksPage, CreateTaskPage, EmployeeCompletedTasksPage, EmployeePendingTasksPage,
    EmployeeTaskManagementPage, NewTasksPage, PendingTasksPage, ShowAllTasksPage,
    TaskManagementPage, UpdateTaskPage,
};

/// Page component for a resolved screen.
pub fn render_screen(screen: Screen) -> View {
    match screen {
        Screen::AdminDashboard => view! { <AdminDashboardPage /> }.into_view(),
        Screen::CreateEmployee => view! { <CreateEmployeePage /> }.into_view(),
        Screen::EmployeeManagement => view! { <EmployeeManagementPage /> }.into_view(),
        Screen::ShowAllEmployees => view! { <ShowAllEmployeesPage /> }.into_view(),
        Screen::EditEmployee => view! { <EditEmployeesPage /> }.into_view(),
        Screen::EmployeeStatus => view! { <EmployeeStatusPage /> }.into_view(),
        Screen::GrantLeave => view! { <GrantLeavePage /> }.into_view(),
        Screen::LeaveTrack => view! { <LeaveTrackPage /> }.into_view(),
        Screen::CreateTask => view! { <CreateTaskPage /> }.into_view(),
        Screen::TaskManagement => view! { <TaskManagementPage /> }.into_view(),
        Screen::ShowAllTasks => view! { <ShowAllTasksPage /> }.into_view(),
        Screen::PendingTasks => view! { <PendingTasksPage /> }.into_view(),
        Screen::CompletedTasks => view! { <CompletedTasksPage /> }.into_view(),
        Screen::UpdateTask => view! { <UpdateTaskPage /> }.into_view(),
        Screen::EmployeeDashboard => view! { <EmployeeDashboardPage /> }.into_view(),
        Screen::EmployeeTaskManagement => view! { <EmployeeTaskManagementPage /> }.into_view(),
        Screen::NewTasks => view! { <NewTasksPage /> }.into_view(),
        Screen::LeaveManagement => view! { <LeaveManagementPage /> }.into_view(),
        Screen::RequestLeave => view! { <RequestLeavePage /> }.into_view(),
        Screen::LeaveStatus => view! { <LeaveStatusPage /> }.into_view(),
        Screen::EmployeePendingTasks => view! { <EmployeePendingTasksPage /> }.into_view(),
        Screen::EmployeeCompletedTasks => view! { <EmployeeCompletedTasksPage /> }.into_view(),
        Screen::Profile => view! { <ProfilePage /> }.into_view(),
    }
}
