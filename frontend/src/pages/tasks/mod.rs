pub mod repository;
pub mod utils;

mod panel;

pub use panel::{
    CompletedTasksPage, CreateTaskPage, EmployeeCompletedTasksPage, EmployeePendingTasksPage,
    EmployeeTaskManagementPage, NewTasksPage, PendingTasksPage, ShowAllTasksPage,
    TaskManagementPage, UpdateTaskPage,
};
