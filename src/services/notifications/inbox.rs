use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::{
    ApiResponse, ErrorCode,
    notifications::{
        requests::{NotificationListParams, NotificationListQuery},
        responses::{NotificationBatchResponse, UnreadCountResponse},
    },
};
use crate::services::{current_user, error_response, forbidden, not_found};

pub async fn list_my_notifications(
    service: &NotificationService,
    query: NotificationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let list_query = NotificationListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        unread_only: query.unread_only.unwrap_or(false),
    };

    match storage
        .list_notifications_with_pagination(user.id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Notifications retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn get_unread_count(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.count_unread_notifications(user.id).await {
        Ok(unread_count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UnreadCountResponse { unread_count },
            "Unread count retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 只有接收者本人可以操作通知
async fn owned_notification(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<Result<(), HttpResponse>> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(Err(response)),
    };

    Ok(match storage.get_notification_by_id(notification_id).await {
        Ok(Some(notification)) if notification.receiver_id == user.id => Ok(()),
        Ok(Some(_)) => Err(forbidden(
            ErrorCode::Forbidden,
            "This notification belongs to another user",
        )),
        Ok(None) => Err(not_found(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        )),
        Err(e) => Err(error_response(&e, None)),
    })
}

pub async fn mark_as_read(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = owned_notification(service, notification_id, request).await? {
        return Ok(response);
    }
    let storage = service.get_storage(request)?;

    match storage.mark_notification_read(notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Notification marked as read",
        ))),
        Ok(false) => Ok(not_found(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn mark_all_as_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.mark_all_notifications_read(user.id).await {
        Ok(affected) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            NotificationBatchResponse { affected },
            "All notifications marked as read",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_notification(
    service: &NotificationService,
    notification_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(response) = owned_notification(service, notification_id, request).await? {
        return Ok(response);
    }
    let storage = service.get_storage(request)?;

    match storage.delete_notification(notification_id).await {
        Ok(true) => {
            tracing::info!("Notification {} deleted", notification_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Notification deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        )),
        Err(e) => Ok(error_response(&e, None)),
    }
}
