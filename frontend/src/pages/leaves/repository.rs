use super::utils::{decision_for, LeaveFormState};
use crate::{
    api::{ApiClient, ApiError, Employee, HistoryPeriod, LeaveRequest},
    state::{auth::use_session, session::Session},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new_with_client(Rc::new(use_session().api()))
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_leaves().await
    }

    /// Requests filed by the given user.
    pub async fn mine(&self, user_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.list_employee_leaves(user_id).await
    }

    pub async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn admins(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_admins().await
    }

    /// History of an employee record; requests are stored under the linked
    /// user id, so that is resolved first.
    pub async fn history(
        &self,
        employee_id: String,
        period: HistoryPeriod,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let user_id = self.client.employee_user_id(&employee_id).await?;
        self.client.leave_history(&user_id, period).await
    }

    pub async fn decide(
        &self,
        leave: LeaveRequest,
        admin_id: String,
        status: &'static str,
    ) -> Result<(), ApiError> {
        let decision = decision_for(&leave, &admin_id, status)?;
        self.client.decide_leave(&leave.id, &decision).await
    }

    pub async fn request(&self, form: LeaveFormState, user: Session) -> Result<(), ApiError> {
        form.validate()?;
        let name = self.display_name(&user).await;
        let admin_user = self.client.employee_user_id(&form.assigned_admin).await?;
        let request = form.to_request(&user, name, admin_user);
        self.client.request_leave(&request).await
    }

    /// Linked employee name, falling back to the username.
    async fn display_name(&self, user: &Session) -> String {
        let Some(id) = user.employee.as_deref().filter(|id| !id.is_empty()) else {
            return user.username.clone();
        };
        match self.client.get_employee(id).await {
            Ok(employee) if !employee.name.is_empty() => employee.name,
            Ok(_) => user.username.clone(),
            Err(err) => {
                log::warn!("could not load employee {}: {}", id, err);
                user.username.clone()
            }
        }
    }
}
