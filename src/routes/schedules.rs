use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::schedules::requests::{
    CreateScheduleRequest, ScheduleDayParams, UpdateScheduleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ScheduleService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ScheduleService 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

pub async fn today_schedules(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.today_schedules(&req).await
}

pub async fn all_schedules(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.all_schedules(&req).await
}

pub async fn schedules_by_day(
    req: HttpRequest,
    query: web::Query<ScheduleDayParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .schedules_by_day(query.day_of_week, &req)
        .await
}

pub async fn get_schedule(req: HttpRequest, schedule_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.get_schedule(schedule_id.0, &req).await
}

pub async fn create_schedule(
    req: HttpRequest,
    schedule_data: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(schedule_data.into_inner(), &req)
        .await
}

pub async fn update_schedule(
    req: HttpRequest,
    schedule_id: SafeIDI64,
    update_data: web::Json<UpdateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_schedule(schedule_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_schedule(
    req: HttpRequest,
    schedule_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_schedule(schedule_id.0, &req).await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Teacher))
                    .route("", web::get().to(all_schedules))
                    .route("", web::post().to(create_schedule))
                    .route("/today", web::get().to(today_schedules))
                    .route("/day", web::get().to(schedules_by_day))
                    .route("/{id}", web::get().to(get_schedule))
                    .route("/{id}", web::put().to(update_schedule))
                    .route("/{id}", web::delete().to(delete_schedule)),
            ),
    );
}
