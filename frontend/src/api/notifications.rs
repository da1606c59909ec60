use reqwest::Method;

use super::{
    client::{segment, ApiClient},
    types::{ApiError, Notification, NotificationList},
};

impl ApiClient {
    pub async fn list_notifications(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        let list: NotificationList = self
            .get_json(&format!("/notifications/task/{}", segment(user_id)))
            .await?;
        Ok(list.notifications)
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        self.send_empty(
            Method::PUT,
            &format!("/notifications/markAsRead/{}", segment(id)),
        )
        .await
    }

    pub async fn clear_notifications(&self, user_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            Method::PUT,
            &format!("/notifications/clearAll/{}", segment(user_id)),
        )
        .await
    }
}
