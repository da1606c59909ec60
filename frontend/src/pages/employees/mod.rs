pub mod repository;
pub mod utils;

mod panel;

pub use panel::{
    CreateEmployeePage, EditEmployeesPage, EmployeeManagementPage, EmployeeStatusPage,
    ShowAllEmployeesPage,
};
