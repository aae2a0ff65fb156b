use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    notifications::{
        requests::{BroadcastNotificationRequest, SendNotificationRequest},
        responses::{NotificationBatchResponse, NotificationResponse},
    },
};
use crate::services::{bad_request, current_user, error_response};

/// 标题 1-100 字，内容不能为空
pub(crate) fn validate_message(title: &str, content: &str) -> Result<(), &'static str> {
    let title_len = title.trim().chars().count();
    if title_len == 0 || title_len > 100 {
        return Err("Title must be 1-100 characters");
    }
    if content.trim().is_empty() {
        return Err("Content cannot be empty");
    }
    if content.chars().count() > 2000 {
        return Err("Content must be at most 2000 characters");
    }
    Ok(())
}

pub async fn send_notification(
    service: &NotificationService,
    notification_data: SendNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let sender = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(msg) = validate_message(&notification_data.title, &notification_data.content) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let receiver_id = notification_data.receiver_id;
    match storage.send_notification(sender.id, notification_data).await {
        Ok(notification) => {
            tracing::info!(
                "Notification {} sent from user {} to user {}",
                notification.id,
                sender.id,
                receiver_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                NotificationResponse { notification },
                "Notification sent successfully",
            )))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::UserNotFound)))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 向指定角色的全部在职用户发送
pub async fn broadcast_notification(
    service: &NotificationService,
    broadcast_data: BroadcastNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let sender = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(msg) = validate_message(&broadcast_data.title, &broadcast_data.content) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let role = broadcast_data.role;
    match storage.broadcast_notification(sender.id, broadcast_data).await {
        Ok(affected) => {
            tracing::info!(
                "User {} broadcast a notification to {} {} users",
                sender.id,
                affected,
                role
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                NotificationBatchResponse { affected },
                format!("Notification sent to {affected} users"),
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message() {
        assert!(validate_message("시험 안내", "다음 주 월요일 시험").is_ok());
        assert!(validate_message("  ", "내용").is_err());
        assert!(validate_message(&"가".repeat(101), "내용").is_err());
        assert!(validate_message("제목", "   ").is_err());
    }
}
