use reqwest::Method;
use serde_json::json;

use super::{
    client::{segment, ApiClient},
    types::{ApiError, Employee, NewEmployee, UserRef},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/all").await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.get_json(&format!("/employees/{}", segment(id))).await
    }

    /// Employees holding the admin role (leave approvers).
    pub async fn list_admins(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/role/admin").await
    }

    /// Employees that can be assigned tasks.
    pub async fn list_assignable_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/role").await
    }

    /// Resolves the user account linked to an employee record.
    pub async fn employee_user_id(&self, employee_id: &str) -> Result<String, ApiError> {
        let user: UserRef = self
            .get_json(&format!("/employees/userid/{}", segment(employee_id)))
            .await?;
        Ok(user.id)
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "/employees/", employee).await
    }

    pub async fn update_employee(&self, employee: &Employee) -> Result<(), ApiError> {
        self.send_unit(
            Method::PUT,
            &format!("/employees/{}", segment(&employee.id)),
            employee,
        )
        .await
    }

    pub async fn set_employee_status(&self, id: &str, status: &str) -> Result<(), ApiError> {
        self.send_unit(
            Method::PUT,
            &format!("/employees/{}", segment(id)),
            &json!({ "status": status }),
        )
        .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/employees/{}", segment(id)))
            .await
    }
}
