pub mod inbox;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::{
    BroadcastNotificationRequest, NotificationListParams, SendNotificationRequest,
};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn send_notification(
        &self,
        notification_data: SendNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_notification(self, notification_data, request).await
    }

    pub async fn broadcast_notification(
        &self,
        broadcast_data: BroadcastNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::broadcast_notification(self, broadcast_data, request).await
    }

    pub async fn list_my_notifications(
        &self,
        query: NotificationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        inbox::list_my_notifications(self, query, request).await
    }

    pub async fn get_unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        inbox::get_unread_count(self, request).await
    }

    pub async fn mark_as_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        inbox::mark_as_read(self, notification_id, request).await
    }

    pub async fn mark_all_as_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        inbox::mark_all_as_read(self, request).await
    }

    pub async fn delete_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        inbox::delete_notification(self, notification_id, request).await
    }
}
