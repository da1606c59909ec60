//! Static role → route tables.

use crate::state::session::Role;

/// Every screen the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    AdminDashboard,
    CreateEmployee,
    EmployeeManagement,
    ShowAllEmployees,
    EditEmployee,
    EmployeeStatus,
    GrantLeave,
    LeaveTrack,
    CreateTask,
    TaskManagement,
    ShowAllTasks,
    PendingTasks,
    CompletedTasks,
    UpdateTask,
    EmployeeDashboard,
    EmployeeTaskManagement,
    NewTasks,
    LeaveManagement,
    RequestLeave,
    LeaveStatus,
    EmployeePendingTasks,
    EmployeeCompletedTasks,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    /// `None` means any authenticated role.
    pub required_role: Option<Role>,
    pub screen: Screen,
    /// Sidebar label; routes without one are reachable but not listed.
    pub nav_label: Option<&'static str>,
}

impl RouteDescriptor {
    const fn new(path: &'static str, role: Role, screen: Screen, label: &'static str) -> Self {
        Self {
            path,
            required_role: Some(role),
            screen,
            nav_label: Some(label),
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.required_role.map_or(true, |required| required == role)
    }
}

pub const PROFILE_ROUTE: RouteDescriptor = RouteDescriptor {
    path: "/profile",
    required_role: None,
    screen: Screen::Profile,
    nav_label: Some("Profile"),
};

const fn admin(path: &'static str, screen: Screen, label: &'static str) -> RouteDescriptor {
    RouteDescriptor::new(path, Role::Admin, screen, label)
}

const fn employee(path: &'static str, screen: Screen, label: &'static str) -> RouteDescriptor {
    RouteDescriptor::new(path, Role::Employee, screen, label)
}

pub const ADMIN_ROUTES: &[RouteDescriptor] = &[
    admin("/", Screen::AdminDashboard, "Dashboard"),
    admin("/create-employee", Screen::CreateEmployee, "Add Employee"),
    admin("/employee-management", Screen::EmployeeManagement, "Employees"),
    admin("/show-all", Screen::ShowAllEmployees, "All Employees"),
    admin("/edit", Screen::EditEmployee, "Edit Employees"),
    admin("/status", Screen::EmployeeStatus, "Employee Status"),
    admin("/grand-leave", Screen::GrantLeave, "Leave Requests"),
    admin("/leave-track", Screen::LeaveTrack, "Leave History"),
    admin("/create-task", Screen::CreateTask, "Create Task"),
    admin("/task-management", Screen::TaskManagement, "Tasks"),
    admin("/show-all-tasks", Screen::ShowAllTasks, "All Tasks"),
    admin("/pending-tasks", Screen::PendingTasks, "Pending Tasks"),
    admin("/completed-tasks", Screen::CompletedTasks, "Completed Tasks"),
    admin("/update-task", Screen::UpdateTask, "Edit Tasks"),
    PROFILE_ROUTE,
];

pub const EMPLOYEE_ROUTES: &[RouteDescriptor] = &[
    employee("/", Screen::EmployeeDashboard, "Dashboard"),
    employee("/task-management", Screen::EmployeeTaskManagement, "My Tasks"),
    employee("/new-tasks", Screen::NewTasks, "New Tasks"),
    employee("/leave-management", Screen::LeaveManagement, "Leaves"),
    employee("/req-leave", Screen::RequestLeave, "Request Leave"),
    employee("/leave-status", Screen::LeaveStatus, "Leave Status"),
    employee("/pending-tasks", Screen::EmployeePendingTasks, "Pending Tasks"),
    employee("/completed-tasks", Screen::EmployeeCompletedTasks, "Completed Tasks"),
    PROFILE_ROUTE,
];

pub fn routes_for(role: Role) -> &'static [RouteDescriptor] {
    match role {
        Role::Admin => ADMIN_ROUTES,
        Role::Employee => EMPLOYEE_ROUTES,
    }
}

/// Strips a trailing slash so `/show-all/` matches `/show-all`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Looks `path` up in the table for `role` only.
pub fn resolve(role: Role, path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(path);
    routes_for(role)
        .iter()
        .find(|route| route.path == path && route.permits(role))
}

/// Sidebar entries for `role`, in table order.
pub fn navigation(role: Role) -> impl Iterator<Item = (&'static str, &'static str)> {
    routes_for(role)
        .iter()
        .filter_map(|route| route.nav_label.map(|label| (route.path, label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn paths(role: Role) -> Vec<&'static str> {
        routes_for(role).iter().map(|r| r.path).collect()
    }

    #[test]
    fn admin_table_is_the_enumerated_paths() {
        assert_eq!(
            paths(Role::Admin),
            vec![
                "/",
                "/create-employee",
                "/employee-management",
                "/show-all",
                "/edit",
                "/status",
                "/grand-leave",
                "/leave-track",
                "/create-task",
                "/task-management",
                "/show-all-tasks",
                "/pending-tasks",
                "/completed-tasks",
                "/update-task",
                "/profile",
            ]
        );
        let role_bound = ADMIN_ROUTES
            .iter()
            .filter(|r| r.required_role == Some(Role::Admin))
            .count();
        assert_eq!(role_bound, 14);
    }

    #[test]
    fn employee_table_is_the_enumerated_paths() {
        assert_eq!(
            paths(Role::Employee),
            vec![
                "/",
                "/task-management",
                "/new-tasks",
                "/leave-management",
                "/req-leave",
                "/leave-status",
                "/pending-tasks",
                "/completed-tasks",
                "/profile",
            ]
        );
        let role_bound = EMPLOYEE_ROUTES
            .iter()
            .filter(|r| r.required_role == Some(Role::Employee))
            .count();
        assert_eq!(role_bound, 8);
    }

    #[test]
    fn profile_is_the_only_shared_screen() {
        let admin: HashSet<Screen> = ADMIN_ROUTES.iter().map(|r| r.screen).collect();
        let employee: HashSet<Screen> = EMPLOYEE_ROUTES.iter().map(|r| r.screen).collect();
        let shared: Vec<_> = admin.intersection(&employee).collect();
        assert_eq!(shared, vec![&Screen::Profile]);
    }

    #[test]
    fn no_duplicate_paths_within_a_table() {
        for role in [Role::Admin, Role::Employee] {
            let unique: HashSet<_> = paths(role).into_iter().collect();
            assert_eq!(unique.len(), routes_for(role).len());
        }
    }

    #[test]
    fn shared_paths_resolve_to_role_specific_screens() {
        assert_eq!(resolve(Role::Admin, "/").unwrap().screen, Screen::AdminDashboard);
        assert_eq!(resolve(Role::Employee, "/").unwrap().screen, Screen::EmployeeDashboard);
        assert_eq!(
            resolve(Role::Employee, "/pending-tasks").unwrap().screen,
            Screen::EmployeePendingTasks
        );
        assert_eq!(resolve(Role::Admin, "/profile").unwrap().screen, Screen::Profile);
        assert_eq!(resolve(Role::Employee, "/profile/").unwrap().screen, Screen::Profile);
    }

    #[test]
    fn cross_role_paths_do_not_resolve() {
        assert!(resolve(Role::Admin, "/new-tasks").is_none());
        assert!(resolve(Role::Admin, "/req-leave").is_none());
        assert!(resolve(Role::Employee, "/create-employee").is_none());
        assert!(resolve(Role::Employee, "/unknown").is_none());
    }

    #[test]
    fn navigation_lists_labelled_routes_in_order() {
        let nav: Vec<_> = navigation(Role::Employee).collect();
        assert_eq!(nav.first(), Some(&("/", "Dashboard")));
        assert_eq!(nav.last(), Some(&("/profile", "Profile")));
        assert_eq!(nav.len(), EMPLOYEE_ROUTES.len());
    }

    #[test]
    fn normalize_path_keeps_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/edit/"), "/edit");
    }
}
