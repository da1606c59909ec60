pub mod metrics;
pub mod repository;

mod panel;

pub use panel::{AdminDashboardPage, EmployeeDashboardPage};
