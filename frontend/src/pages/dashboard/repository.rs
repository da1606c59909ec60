use super::metrics::{AdminMetrics, EmployeeMetrics};
use crate::{
    api::{ApiClient, ApiError},
    pages::employees::utils::linked_employee,
    state::{auth::use_session, session::Session},
    utils::time::now,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new_with_client(Rc::new(use_session().api()))
    }

    pub async fn admin_metrics(&self) -> Result<AdminMetrics, ApiError> {
        let employees = self.client.list_employees().await?;
        let tasks = self.client.list_tasks().await?;
        Ok(AdminMetrics::compute(employees.len(), &tasks, now()))
    }

    /// Task figures for the employee record linked to `user`; leaves are
    /// keyed by the requester's user id.
    pub async fn employee_metrics(&self, user: Session) -> Result<EmployeeMetrics, ApiError> {
        let leaves = self.client.list_employee_leaves(&user.user_id).await?;
        let employees = self.client.list_employees().await?;
        let Some(employee) = linked_employee(&user, &employees) else {
            log::warn!("no employee record linked to user {}", user.user_id);
            return Ok(EmployeeMetrics::compute("", &[], &leaves));
        };
        let tasks = self.client.list_tasks().await?;
        Ok(EmployeeMetrics::compute(&employee.id, &tasks, &leaves))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee_user;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> DashboardRepository {
        DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn admin_metrics_combine_employees_and_tasks() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees/all");
                then.status(200).json_body(json!([
                    {"_id": "e1", "name": "A", "email": "a@x"},
                    {"_id": "e2", "name": "B", "email": "b@x"}
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tasks/all");
                then.status(200).json_body(json!([
                    {"_id": "t1", "title": "a", "status": "Completed"},
                    {"_id": "t2", "title": "b", "status": "Pending"},
                    {"_id": "t3", "title": "c", "status": "Pending"}
                ]));
            })
            .await;

        let metrics = repo(&server).admin_metrics().await.unwrap();
        assert_eq!(metrics.total_employees, 2);
        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.pending, 2);
    }

    #[tokio::test]
    async fn employee_metrics_use_linked_record() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/employees/all");
                then.status(200).json_body(json!([
                    {"_id": "e-jane", "name": "Jane", "email": "jane@example.com"}
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tasks/all");
                then.status(200).json_body(json!([
                    {"_id": "t1", "title": "a", "status": "Completed", "assignedTo": "e-jane"},
                    {"_id": "t2", "title": "b", "status": "Pending", "assignedTo": "e-other"}
                ]));
            })
            .await;
        let leaves = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/leaves/employee/u-jane");
                then.status(200).json_body(json!([
                    {"_id": "l1", "leaveType": "Sick", "status": "Approved"}
                ]));
            })
            .await;

        let metrics = repo(&server)
            .employee_metrics(employee_user())
            .await
            .unwrap();
        leaves.assert_async().await;
        assert_eq!(
            metrics,
            EmployeeMetrics {
                completed: 1,
                pending: 0,
                approved_leaves: 1,
            }
        );
    }
}
