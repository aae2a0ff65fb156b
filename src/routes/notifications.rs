use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notifications::requests::{
    BroadcastNotificationRequest, NotificationListParams, SendNotificationRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

pub async fn list_my_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .list_my_notifications(query.into_inner(), &req)
        .await
}

pub async fn get_unread_count(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.get_unread_count(&req).await
}

pub async fn send_notification(
    req: HttpRequest,
    notification_data: web::Json<SendNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .send_notification(notification_data.into_inner(), &req)
        .await
}

pub async fn broadcast_notification(
    req: HttpRequest,
    broadcast_data: web::Json<BroadcastNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .broadcast_notification(broadcast_data.into_inner(), &req)
        .await
}

pub async fn mark_as_read(
    req: HttpRequest,
    notification_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .mark_as_read(notification_id.0, &req)
        .await
}

pub async fn mark_all_as_read(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_all_as_read(&req).await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .delete_notification(notification_id.0, &req)
        .await
}

// 配置路由
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_my_notifications))
                    // 发送通知 - 教师、职员和管理员
                    .route(
                        web::post()
                            .to(send_notification)
                            .wrap(middlewares::RequireRole::new_any(UserRole::sender_roles())),
                    ),
            )
            .service(
                web::resource("/broadcast")
                    .wrap(middlewares::RequireRole::new_any(UserRole::sender_roles()))
                    .route(web::post().to(broadcast_notification)),
            )
            .route("/unread-count", web::get().to(get_unread_count))
            .route("/read-all", web::put().to(mark_all_as_read))
            .route("/{id}/read", web::put().to(mark_as_read))
            .route("/{id}", web::delete().to(delete_notification)),
    );
}
