use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{state::session::Session, utils::time::deserialize_optional_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address or username.
    pub login_value: String,
    pub password: String,
}

/// Raw login payload. Both fields are optional on the wire; a response
/// without a token is a failed login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Session>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub user: Session,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub aadhaar_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("Active")
    }

    pub fn toggled_status(&self) -> &'static str {
        if self.is_active() {
            "Inactive"
        } else {
            "Active"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub phone_number: String,
    pub gender: String,
    pub aadhaar_number: String,
    pub address: String,
}

/// Only the linked user id is read from `/employees/userid/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    New,
    Pending,
    #[serde(rename = "In Progress", alias = "Progress")]
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::New => "New",
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Employee id of the assignee.
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_from: Option<String>,
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    /// User id notified about the assignment.
    pub assigned_to_notification: String,
    pub assigned_from: String,
    pub status: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEdit {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: String,
}

/// Progress report sent by the assignee. `assigned_to` is routed back to
/// whoever assigned the task so they get the notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProgress {
    pub status: TaskStatus,
    pub description: String,
    pub remarks: String,
    pub progress: String,
    pub assigned_from: String,
    pub assigned_to: String,
}

impl TaskProgress {
    pub fn new(
        task: &Task,
        reporter_id: &str,
        description: String,
        remarks: String,
        progress: String,
    ) -> Self {
        let status = if progress == "Completed" {
            TaskStatus::Completed
        } else {
            TaskStatus::InProgress
        };
        Self {
            status,
            description,
            remarks,
            progress,
            assigned_from: reporter_id.to_string(),
            assigned_to: task.assigned_from.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default, alias = "employeeName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl LeaveRequest {
    /// Requests without a decision are shown as pending.
    pub fn status_label(&self) -> String {
        self.status
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Pending".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub assigned_admin: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveDecision {
    pub from: String,
    pub to: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPeriod {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl HistoryPeriod {
    pub const ALL: [HistoryPeriod; 4] = [
        HistoryPeriod::All,
        HistoryPeriod::Week,
        HistoryPeriod::Month,
        HistoryPeriod::Year,
    ];

    pub fn as_query(&self) -> &'static str {
        match self {
            HistoryPeriod::All => "all",
            HistoryPeriod::Week => "week",
            HistoryPeriod::Month => "month",
            HistoryPeriod::Year => "year",
        }
    }

    pub fn from_query(value: &str) -> Self {
        match value {
            "week" => HistoryPeriod::Week,
            "month" => HistoryPeriod::Month,
            "year" => HistoryPeriod::Year,
            _ => HistoryPeriod::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HistoryPeriod::All => "All Time",
            HistoryPeriod::Week => "This Week",
            HistoryPeriod::Month => "This Month",
            HistoryPeriod::Year => "This Year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "INVALID_RESPONSE")
    }

    pub fn invalid_credentials() -> Self {
        Self::with_code("Invalid credentials or no token returned.", "INVALID_CREDENTIALS")
    }

    /// Maps a non-2xx status to an error code.
    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        let code = match status {
            400 | 422 => "VALIDATION_ERROR",
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            500..=599 => "SERVER_ERROR",
            _ => "REQUEST_FAILED",
        };
        Self::with_code(msg, code)
    }

    /// True when the server refused the identity rather than the request
    /// failing in transit.
    pub fn is_rejection(&self) -> bool {
        matches!(self.code.as_str(), "UNAUTHORIZED" | "FORBIDDEN" | "NOT_FOUND")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;
    use serde_json::json;

    #[test]
    fn login_request_uses_api_field_names() {
        let body = serde_json::to_value(LoginRequest {
            login_value: "jane@example.com".into(),
            password: "secret".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"loginValue": "jane@example.com", "password": "secret"}));
    }

    #[test]
    fn login_response_tolerates_missing_token() {
        let response: LoginResponse =
            serde_json::from_value(json!({"user": {"username": "jane", "role": "employee"}}))
                .unwrap();
        assert!(response.token.is_none());
        assert_eq!(response.user.unwrap().role, Role::Employee);
    }

    #[test]
    fn task_status_reads_legacy_and_unknown_values() {
        let task: Task = serde_json::from_value(json!({
            "_id": "t1",
            "title": "Report",
            "status": "Progress",
            "dueDate": "2024-05-10T00:00:00.000Z",
            "createdAt": null
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.due_date.is_some());
        assert!(task.created_at.is_none());

        let odd: Task = serde_json::from_value(json!({"status": "Archived"})).unwrap();
        assert_eq!(odd.status, TaskStatus::Unknown);
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            json!("In Progress")
        );
    }

    #[test]
    fn task_progress_reports_back_to_assigner() {
        let task: Task = serde_json::from_value(json!({
            "_id": "t1",
            "status": "Pending",
            "assignedFrom": "admin-user"
        }))
        .unwrap();
        let done = TaskProgress::new(
            &task,
            "emp-user",
            "done".into(),
            "".into(),
            "Completed".into(),
        );
        assert_eq!(done.status, TaskStatus::Completed);
        assert_eq!(done.assigned_to, "admin-user");
        assert_eq!(done.assigned_from, "emp-user");

        let partial = TaskProgress::new(&task, "emp-user", "".into(), "".into(), "50%".into());
        assert_eq!(partial.status, TaskStatus::InProgress);
    }

    #[test]
    fn leave_request_accepts_employee_name_alias() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "_id": "l1",
            "employeeName": "Jane",
            "leaveType": "Sick",
            "startDate": "2024-05-01",
            "endDate": "2024-05-02"
        }))
        .unwrap();
        assert_eq!(leave.name.as_deref(), Some("Jane"));
        assert_eq!(leave.status_label(), "Pending");
    }

    #[test]
    fn employee_status_toggle() {
        let mut employee = Employee {
            status: Some("Active".into()),
            ..Employee::default()
        };
        assert!(employee.is_active());
        assert_eq!(employee.toggled_status(), "Inactive");
        employee.status = None;
        assert_eq!(employee.toggled_status(), "Active");
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert_eq!(ApiError::from_status(401, "x").code, "UNAUTHORIZED");
        assert_eq!(ApiError::from_status(503, "x").code, "SERVER_ERROR");
        assert_eq!(ApiError::from_status(409, "x").code, "REQUEST_FAILED");
        assert!(ApiError::from_status(404, "x").is_rejection());
        assert!(!ApiError::request_failed("x").is_rejection());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::invalid_credentials();
        assert_eq!(format!("{}", error), "Invalid credentials or no token returned.");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn history_period_round_trips_query_values() {
        for period in HistoryPeriod::ALL {
            assert_eq!(HistoryPeriod::from_query(period.as_query()), period);
        }
        assert_eq!(HistoryPeriod::from_query("decade"), HistoryPeriod::All);
    }
}
