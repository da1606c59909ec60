pub mod repository;
pub mod utils;

mod panel;

pub use panel::{
    GrantLeavePage, LeaveManagementPage, LeaveStatusPage, LeaveTrackPage, RequestLeavePage,
};
