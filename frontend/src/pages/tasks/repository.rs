use super::utils::{assigned_to, ProgressFormState, TaskFormState};
use crate::{
    api::{ApiClient, ApiError, Employee, Task, TaskEdit},
    pages::employees::utils::linked_employee,
    state::{auth::use_session, session::Session},
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Tasks together with the employee directory used to show assignee names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListing {
    pub tasks: Vec<Task>,
    pub employees: Vec<Employee>,
}

#[derive(Clone)]
pub struct TasksRepository {
    client: Rc<ApiClient>,
}

impl TasksRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn from_session() -> Self {
        Self::new_with_client(Rc::new(use_session().api()))
    }

    pub async fn listing(&self) -> Result<TaskListing, ApiError> {
        let tasks = self.client.list_tasks().await?;
        let employees = self.client.list_employees().await?;
        Ok(TaskListing { tasks, employees })
    }

    /// Tasks assigned to the employee record linked to `user`, optionally
    /// limited to today's tasks.
    pub async fn my_listing(&self, user: &Session, today: bool) -> Result<TaskListing, ApiError> {
        let employees = self.client.list_employees().await?;
        let Some(me) = linked_employee(user, &employees).map(|e| e.id.clone()) else {
            log::warn!("no employee record linked to user {}", user.user_id);
            return Ok(TaskListing {
                tasks: Vec::new(),
                employees,
            });
        };
        let tasks = if today {
            self.client.list_todays_tasks().await?
        } else {
            self.client.list_tasks().await?
        };
        Ok(TaskListing {
            tasks: assigned_to(&tasks, &me),
            employees,
        })
    }

    pub async fn assignable_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_assignable_employees().await
    }

    /// Resolves the assignee's user id for the notification, then creates
    /// the task.
    pub async fn create(&self, form: TaskFormState, assigned_from: String) -> Result<(), ApiError> {
        form.validate()?;
        let notify = self.client.employee_user_id(&form.assigned_to).await?;
        let task = form.to_new_task(&assigned_from, notify);
        self.client.create_task(&task).await
    }

    pub async fn edit(&self, id: String, edit: TaskEdit) -> Result<(), ApiError> {
        if edit.title.trim().is_empty() {
            return Err(ApiError::validation("Title is required."));
        }
        self.client.edit_task(&id, &edit).await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_task(&id).await
    }

    pub async fn report_progress(
        &self,
        task: Task,
        reporter_id: String,
        form: ProgressFormState,
    ) -> Result<(), ApiError> {
        let progress = form.to_progress(&task, &reporter_id)?;
        self.client.report_task_progress(&task.id, &progress).await
    }
}
