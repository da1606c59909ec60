use chrono::{DateTime, Utc};

use crate::{
    api::{ApiError, LeaveDecision, LeaveRequest, NewLeaveRequest},
    state::session::Session,
    utils::{
        search::{is_active_query, matches_query},
        time::{parse_timestamp, DateFilter},
    },
};

pub const LEAVE_TYPES: [&str; 3] = ["Sick", "Vacation", "Emergency"];

pub const LEAVE_STATUSES: [&str; 3] = ["Pending", "Approved", "Rejected"];

pub const APPROVED: &str = "Approved";
pub const REJECTED: &str = "Rejected";

/// Requests still awaiting a decision.
pub fn pending_requests(leaves: &[LeaveRequest]) -> Vec<LeaveRequest> {
    leaves
        .iter()
        .filter(|l| l.status_label() == "Pending")
        .cloned()
        .collect()
}

/// Status filter (empty = any, case-insensitive) combined with a window over
/// the start date.
pub fn filter_leaves(
    leaves: &[LeaveRequest],
    status: &str,
    window: DateFilter,
    now: DateTime<Utc>,
) -> Vec<LeaveRequest> {
    leaves
        .iter()
        .filter(|l| status.is_empty() || l.status_label().eq_ignore_ascii_case(status))
        .filter(|l| window.matches(l.start_date, now))
        .cloned()
        .collect()
}

/// Name search; nothing is listed until the query is long enough.
pub fn search_by_name(leaves: &[LeaveRequest], query: &str) -> Vec<LeaveRequest> {
    if !is_active_query(query) {
        return Vec::new();
    }
    leaves
        .iter()
        .filter(|l| l.name.as_deref().is_some_and(|name| matches_query(name, query)))
        .cloned()
        .collect()
}

/// Decision addressed back to the requester.
pub fn decision_for(
    leave: &LeaveRequest,
    admin_id: &str,
    status: &str,
) -> Result<LeaveDecision, ApiError> {
    let requester = leave
        .employee_id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::validation("Leave request has no requester."))?;
    Ok(LeaveDecision {
        from: admin_id.to_string(),
        to: requester,
        status: status.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveFormState {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    /// Employee id of the approving admin.
    pub assigned_admin: String,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        LeaveFormState {
            leave_type: LEAVE_TYPES[0].to_string(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            assigned_admin: String::new(),
        }
    }
}

impl LeaveFormState {
    pub fn validate(&self) -> Result<(), ApiError> {
        let (Some(start), Some(end)) = (
            parse_timestamp(&self.start_date),
            parse_timestamp(&self.end_date),
        ) else {
            return Err(ApiError::validation("Start and end dates are required."));
        };
        if end < start {
            return Err(ApiError::validation("End date must not be before start date."));
        }
        if self.assigned_admin.is_empty() {
            return Err(ApiError::validation("Select an admin to review the request."));
        }
        Ok(())
    }

    /// `admin_user_id` is the reviewer's user id, used for the notification.
    pub fn to_request(
        &self,
        user: &Session,
        employee_name: String,
        admin_user_id: String,
    ) -> NewLeaveRequest {
        NewLeaveRequest {
            leave_type: self.leave_type.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            description: self.description.trim().to_string(),
            employee_id: user.user_id.clone(),
            name: employee_name,
            email: user.email.clone(),
            assigned_admin: self.assigned_admin.clone(),
            from: user.user_id.clone(),
            to: admin_user_id,
        }
    }
}
