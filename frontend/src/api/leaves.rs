use reqwest::Method;

use super::{
    client::{segment, ApiClient},
    types::{ApiError, HistoryPeriod, LeaveDecision, LeaveRequest, NewLeaveRequest},
};

impl ApiClient {
    pub async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json("/leaves/all").await
    }

    pub async fn list_employee_leaves(&self, id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json(&format!("/leaves/employee/{}", segment(id)))
            .await
    }

    pub async fn leave_history(
        &self,
        employee_id: &str,
        period: HistoryPeriod,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_json_with_query(
            &format!("/leaves/history/{}", segment(employee_id)),
            &[("filter", period.as_query())],
        )
        .await
    }

    pub async fn request_leave(&self, request: &NewLeaveRequest) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "/leaves/request", request)
            .await
    }

    pub async fn decide_leave(&self, id: &str, decision: &LeaveDecision) -> Result<(), ApiError> {
        self.send_unit(
            Method::PUT,
            &format!("/leaves/update/{}", segment(id)),
            decision,
        )
        .await
    }
}
