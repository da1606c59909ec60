use chrono::{DateTime, Utc};

use crate::{
    api::{ApiError, NewTask, Task, TaskEdit, TaskProgress, TaskStatus},
    utils::{
        search::{is_active_query, matches_query},
        time::DateFilter,
    },
};

/// Statuses an admin may set from the edit form.
pub const EDITABLE_STATUSES: [&str; 4] = ["New", "Pending", "In Progress", "Completed"];

/// Choices offered to the assignee when reporting progress.
pub const PROGRESS_CHOICES: [&str; 2] = ["Completed", "In Progress"];

pub fn with_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

pub fn assigned_to(tasks: &[Task], employee_id: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.assigned_to.as_deref() == Some(employee_id))
        .cloned()
        .collect()
}

/// Date window plus title search; the search only applies from two
/// characters on.
pub fn filter_tasks(
    tasks: &[Task],
    query: &str,
    window: DateFilter,
    now: DateTime<Utc>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| window.matches(t.created_at, now))
        .filter(|t| !is_active_query(query) || matches_query(&t.title, query))
        .cloned()
        .collect()
}

/// Title search for the edit table, active on any non-blank query.
pub fn search_titles(tasks: &[Task], query: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| query.trim().is_empty() || matches_query(&t.title, query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskGroups {
    pub new: Vec<Task>,
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
}

impl TaskGroups {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        TaskGroups {
            new: with_status(tasks, TaskStatus::New),
            pending: with_status(tasks, TaskStatus::Pending),
            completed: with_status(tasks, TaskStatus::Completed),
        }
    }
}

pub fn date_input(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFormState {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub due_date: String,
}

impl TaskFormState {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::validation("Title is required."));
        }
        if self.assigned_to.is_empty() {
            return Err(ApiError::validation("Select an employee to assign."));
        }
        if self.due_date.is_empty() {
            return Err(ApiError::validation("Due date is required."));
        }
        Ok(())
    }

    /// New tasks always start as `Pending`.
    pub fn to_new_task(&self, assigned_from: &str, notify_user_id: String) -> NewTask {
        NewTask {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            assigned_to: self.assigned_to.clone(),
            assigned_to_notification: notify_user_id,
            assigned_from: assigned_from.to_string(),
            status: TaskStatus::Pending.label().to_string(),
            due_date: self.due_date.clone(),
        }
    }
}

pub fn edit_from_task(task: &Task) -> TaskEdit {
    TaskEdit {
        title: task.title.clone(),
        description: task.description.clone(),
        due_date: date_input(task.due_date),
        status: task.status.label().to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressFormState {
    pub description: String,
    pub remarks: String,
    pub progress: String,
}

impl ProgressFormState {
    pub fn for_task(task: &Task) -> Self {
        ProgressFormState {
            description: task.description.clone(),
            ..Self::default()
        }
    }

    pub fn to_progress(&self, task: &Task, reporter_id: &str) -> Result<TaskProgress, ApiError> {
        if !PROGRESS_CHOICES.contains(&self.progress.as_str()) {
            return Err(ApiError::validation("Choose Completed or In Progress."));
        }
        Ok(TaskProgress::new(
            task,
            reporter_id,
            self.description.clone(),
            self.remarks.clone(),
            self.progress.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;

    fn task(id: &str, title: &str, status: TaskStatus, created: &str) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            description: "desc".into(),
            assigned_to: Some("e1".into()),
            assigned_from: Some("u-admin".into()),
            status,
            due_date: parse_timestamp("2024-05-30"),
            created_at: parse_timestamp(created),
            updated_at: None,
        }
    }

    // Wednesday
    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-05-15T12:00:00Z").unwrap()
    }

    #[test]
    fn filter_tasks_ignores_single_character_queries() {
        let tasks = vec![
            task("1", "Quarterly report", TaskStatus::Pending, "2024-05-15"),
            task("2", "Payroll", TaskStatus::Pending, "2024-04-01"),
        ];
        assert_eq!(filter_tasks(&tasks, "q", DateFilter::All, now()).len(), 2);
        let hits = filter_tasks(&tasks, "REP", DateFilter::All, now());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert!(filter_tasks(&tasks, "pay", DateFilter::ThisMonth, now()).is_empty());
    }

    #[test]
    fn search_titles_filters_on_any_query() {
        let tasks = vec![
            task("1", "Audit", TaskStatus::New, "2024-05-15"),
            task("2", "Budget", TaskStatus::New, "2024-05-15"),
        ];
        assert_eq!(search_titles(&tasks, "a").len(), 1);
        assert_eq!(search_titles(&tasks, "  ").len(), 2);
    }

    #[test]
    fn groups_split_by_status() {
        let tasks = vec![
            task("1", "a", TaskStatus::New, "2024-05-15"),
            task("2", "b", TaskStatus::Pending, "2024-05-15"),
            task("3", "c", TaskStatus::Completed, "2024-05-15"),
            task("4", "d", TaskStatus::InProgress, "2024-05-15"),
        ];
        let groups = TaskGroups::from_tasks(&tasks);
        assert_eq!(groups.new.len(), 1);
        assert_eq!(groups.pending.len(), 1);
        assert_eq!(groups.completed[0].id, "3");
    }

    #[test]
    fn assigned_to_keeps_only_own_tasks() {
        let mut other = task("2", "b", TaskStatus::Pending, "2024-05-15");
        other.assigned_to = Some("e2".into());
        let tasks = vec![task("1", "a", TaskStatus::Pending, "2024-05-15"), other];
        let mine = assigned_to(&tasks, "e1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "1");
    }

    #[test]
    fn task_form_validates_and_builds_pending_task() {
        let mut form = TaskFormState {
            title: " Audit ".into(),
            description: "Check books".into(),
            assigned_to: String::new(),
            due_date: "2024-06-01".into(),
        };
        assert_eq!(
            form.validate().unwrap_err().error,
            "Select an employee to assign."
        );
        form.assigned_to = "e1".into();
        assert!(form.validate().is_ok());

        let task = form.to_new_task("u-admin", "u-jane".into());
        assert_eq!(task.title, "Audit");
        assert_eq!(task.status, "Pending");
        assert_eq!(task.assigned_from, "u-admin");
        assert_eq!(task.assigned_to_notification, "u-jane");
    }

    #[test]
    fn edit_form_starts_from_task() {
        let edit = edit_from_task(&task("1", "Audit", TaskStatus::InProgress, "2024-05-15"));
        assert_eq!(edit.status, "In Progress");
        assert_eq!(edit.due_date, "2024-05-30");
    }

    #[test]
    fn progress_requires_a_choice() {
        let task = task("1", "Audit", TaskStatus::Pending, "2024-05-15");
        let mut form = ProgressFormState::for_task(&task);
        assert!(form.to_progress(&task, "u-jane").is_err());

        form.progress = "Completed".into();
        form.remarks = "done".into();
        let progress = form.to_progress(&task, "u-jane").unwrap();
        assert_eq!(progress.status, TaskStatus::Completed);
        assert_eq!(progress.assigned_from, "u-jane");
        assert_eq!(progress.assigned_to, "u-admin");
    }
}
