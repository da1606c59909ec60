use super::utils::AccountFormState;
use crate::api::{ApiClient, ApiError, Employee, NewEmployee};
use crate::state::auth::use_session;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Repository bound to the signed-in session's token.
    pub fn from_session() -> Self {
        Self::new_with_client(Rc::new(use_session().api()))
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create(&self, employee: NewEmployee) -> Result<(), ApiError> {
        self.client.create_employee(&employee).await
    }

    pub async fn update(&self, employee: Employee) -> Result<(), ApiError> {
        self.client.update_employee(&employee).await
    }

    /// Flips Active/Inactive and returns the new status.
    pub async fn toggle_status(&self, employee: Employee) -> Result<&'static str, ApiError> {
        let status = employee.toggled_status();
        self.client.set_employee_status(&employee.id, status).await?;
        Ok(status)
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_employee(&id).await
    }

    /// Creates a login for `employee`. The admin's own session is untouched.
    pub async fn create_account(
        &self,
        employee: Employee,
        form: AccountFormState,
    ) -> Result<(), ApiError> {
        let request = form.to_signup(&employee)?;
        self.client.signup(&request).await.map(|_| ())
    }
}
