//! Dashboard figures computed from raw task, employee and leave lists.

use chrono::{DateTime, Datelike, Utc};

use crate::api::{LeaveRequest, Task, TaskStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminMetrics {
    pub total_employees: usize,
    pub completed: usize,
    pub pending: usize,
    /// Mean days past the due date across completed tasks; early
    /// completions count as zero.
    pub average_overdue_days: f64,
    pub month_completed: usize,
    pub month_pending: usize,
    pub within_due: usize,
    pub over_due: usize,
}

impl AdminMetrics {
    pub fn compute(total_employees: usize, tasks: &[Task], now: DateTime<Utc>) -> Self {
        let completed: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .collect();
        let within_due = completed
            .iter()
            .filter(|t| matches!((t.updated_at, t.due_date), (Some(done), Some(due)) if done <= due))
            .count();
        let overdue_days: f64 = completed.iter().map(|t| days_overdue(t)).sum();
        let average_overdue_days = if completed.is_empty() {
            0.0
        } else {
            overdue_days / completed.len() as f64
        };
        let this_month = |t: &&Task| {
            t.created_at
                .map(|c| c.year() == now.year() && c.month() == now.month())
                .unwrap_or(false)
        };

        AdminMetrics {
            total_employees,
            completed: completed.len(),
            pending: count_status(tasks, TaskStatus::Pending),
            average_overdue_days,
            month_completed: tasks
                .iter()
                .filter(this_month)
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
            month_pending: tasks
                .iter()
                .filter(this_month)
                .filter(|t| t.status == TaskStatus::Pending)
                .count(),
            within_due,
            over_due: completed.len() - within_due,
        }
    }

    pub fn month_completed_percent(&self) -> f64 {
        percent(self.month_completed, self.month_completed + self.month_pending)
    }

    pub fn within_due_percent(&self) -> f64 {
        percent(self.within_due, self.within_due + self.over_due)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeMetrics {
    pub completed: usize,
    pub pending: usize,
    pub approved_leaves: usize,
}

impl EmployeeMetrics {
    pub fn compute(employee_id: &str, tasks: &[Task], leaves: &[LeaveRequest]) -> Self {
        let own: Vec<Task> = tasks
            .iter()
            .filter(|t| t.assigned_to.as_deref() == Some(employee_id))
            .cloned()
            .collect();
        EmployeeMetrics {
            completed: count_status(&own, TaskStatus::Completed),
            pending: count_status(&own, TaskStatus::Pending),
            approved_leaves: leaves
                .iter()
                .filter(|l| l.status.as_deref() == Some("Approved"))
                .count(),
        }
    }
}

fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

fn days_overdue(task: &Task) -> f64 {
    match (task.updated_at, task.due_date) {
        (Some(done), Some(due)) => ((done - due).num_seconds() as f64 / 86_400.0).max(0.0),
        _ => 0.0,
    }
}

pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;

    fn task(status: TaskStatus, assignee: &str, created: &str, due: &str, updated: &str) -> Task {
        Task {
            id: format!("{assignee}-{created}"),
            title: "t".into(),
            description: String::new(),
            assigned_to: Some(assignee.into()),
            assigned_from: Some("u-admin".into()),
            status,
            due_date: parse_timestamp(due),
            created_at: parse_timestamp(created),
            updated_at: parse_timestamp(updated),
        }
    }

    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-05-20T12:00:00Z").unwrap()
    }

    #[test]
    fn admin_metrics_split_due_dates_and_months() {
        let tasks = vec![
            // done one day early
            task(TaskStatus::Completed, "e1", "2024-05-01", "2024-05-10", "2024-05-09"),
            // done four days late
            task(TaskStatus::Completed, "e2", "2024-04-01", "2024-04-10", "2024-04-14"),
            task(TaskStatus::Pending, "e1", "2024-05-02", "2024-05-30", "2024-05-02"),
            task(TaskStatus::Pending, "e2", "2024-03-02", "2024-03-30", "2024-03-02"),
            task(TaskStatus::New, "e2", "2024-05-03", "2024-05-30", "2024-05-03"),
        ];
        let metrics = AdminMetrics::compute(7, &tasks, now());
        assert_eq!(metrics.total_employees, 7);
        assert_eq!(metrics.completed, 2);
        assert_eq!(metrics.pending, 2);
        assert_eq!(metrics.within_due, 1);
        assert_eq!(metrics.over_due, 1);
        assert!((metrics.average_overdue_days - 2.0).abs() < 1e-9);
        assert_eq!(metrics.month_completed, 1);
        assert_eq!(metrics.month_pending, 1);
        assert!((metrics.month_completed_percent() - 50.0).abs() < 1e-9);
        assert!((metrics.within_due_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn admin_metrics_on_empty_lists_are_zero() {
        let metrics = AdminMetrics::compute(0, &[], now());
        assert_eq!(metrics, AdminMetrics::default());
        assert_eq!(metrics.within_due_percent(), 0.0);
    }

    #[test]
    fn employee_metrics_only_count_own_tasks() {
        let tasks = vec![
            task(TaskStatus::Completed, "e1", "2024-05-01", "2024-05-10", "2024-05-09"),
            task(TaskStatus::Pending, "e1", "2024-05-02", "2024-05-10", "2024-05-02"),
            task(TaskStatus::Pending, "e2", "2024-05-02", "2024-05-10", "2024-05-02"),
        ];
        let leaves = vec![
            LeaveRequest {
                status: Some("Approved".into()),
                ..LeaveRequest::default()
            },
            LeaveRequest {
                status: Some("Rejected".into()),
                ..LeaveRequest::default()
            },
        ];
        let metrics = EmployeeMetrics::compute("e1", &tasks, &leaves);
        assert_eq!(
            metrics,
            EmployeeMetrics {
                completed: 1,
                pending: 1,
                approved_leaves: 1,
            }
        );
    }
}
