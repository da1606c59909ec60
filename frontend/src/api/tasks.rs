use reqwest::Method;

use super::{
    client::{segment, ApiClient},
    types::{ApiError, NewTask, Task, TaskEdit, TaskProgress},
};

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/tasks/all").await
    }

    pub async fn list_todays_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/tasks/today").await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "/tasks", task).await
    }

    /// Admin edit of title, description, due date or status.
    pub async fn edit_task(&self, id: &str, edit: &TaskEdit) -> Result<(), ApiError> {
        self.send_unit(Method::PUT, &format!("/tasks/{}", segment(id)), edit)
            .await
    }

    /// Assignee progress report; also notifies the assigner.
    pub async fn report_task_progress(
        &self,
        id: &str,
        progress: &TaskProgress,
    ) -> Result<(), ApiError> {
        self.send_unit(
            Method::PUT,
            &format!("/tasks/update/{}", segment(id)),
            progress,
        )
        .await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/tasks/{}", segment(id)))
            .await
    }
}
