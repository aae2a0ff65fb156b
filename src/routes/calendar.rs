use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::calendar::requests::{
    CreateEventRequest, EventFeedParams, EventRangeParams, MonthlyEventParams,
    UpcomingEventParams, UpdateEventRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CalendarService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CalendarService 实例
static CALENDAR_SERVICE: Lazy<CalendarService> = Lazy::new(CalendarService::new_lazy);

pub async fn monthly_events(
    req: HttpRequest,
    query: web::Query<MonthlyEventParams>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .monthly_events(query.into_inner(), &req)
        .await
}

pub async fn range_events(
    req: HttpRequest,
    query: web::Query<EventRangeParams>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.range_events(query.into_inner(), &req).await
}

pub async fn event_feed(
    req: HttpRequest,
    query: web::Query<EventFeedParams>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.event_feed(query.into_inner(), &req).await
}

pub async fn upcoming_events(
    req: HttpRequest,
    query: web::Query<UpcomingEventParams>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.upcoming_events(query.limit, &req).await
}

pub async fn get_event(req: HttpRequest, event_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.get_event(event_id.0, &req).await
}

pub async fn create_event(
    req: HttpRequest,
    event_data: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .create_event(event_data.into_inner(), &req)
        .await
}

pub async fn update_event(
    req: HttpRequest,
    event_id: SafeIDI64,
    update_data: web::Json<UpdateEventRequest>,
) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE
        .update_event(event_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_event(req: HttpRequest, event_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.delete_event(event_id.0, &req).await
}

pub async fn import_events(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    CALENDAR_SERVICE.import_events(payload, &req).await
}

// 配置路由
pub fn configure_calendar_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/calendar")
            .wrap(middlewares::RequireJWT)
            // 所有登录用户可查看
            .route("/monthly", web::get().to(monthly_events))
            .route("/range", web::get().to(range_events))
            .route("/feed", web::get().to(event_feed))
            .route("/upcoming", web::get().to(upcoming_events))
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(create_event)),
            )
            // CSV 批量导入 - 仅管理员
            .service(
                web::resource("/import")
                    .wrap(middlewares::RateLimit::import())
                    .route(
                        web::post()
                            .to(import_events)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_event))
                    .route(
                        web::put()
                            .to(update_event)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_event)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
