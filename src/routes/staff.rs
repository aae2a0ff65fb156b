use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::staff::requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest};
use crate::models::users::entities::UserRole;
use crate::services::StaffService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StaffService 实例
static STAFF_SERVICE: Lazy<StaffService> = Lazy::new(StaffService::new_lazy);

pub async fn list_staff(
    req: HttpRequest,
    query: web::Query<StaffListParams>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.list_staff(query.into_inner(), &req).await
}

pub async fn get_staff(req: HttpRequest, staff_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.get_staff(staff_id.0, &req).await
}

pub async fn create_staff(
    req: HttpRequest,
    staff_data: web::Json<CreateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.create_staff(staff_data.into_inner(), &req).await
}

pub async fn update_staff(
    req: HttpRequest,
    staff_id: SafeIDI64,
    update_data: web::Json<UpdateStaffRequest>,
) -> ActixResult<HttpResponse> {
    STAFF_SERVICE
        .update_staff(staff_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn retire_staff(req: HttpRequest, staff_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.retire_staff(staff_id.0, &req).await
}

pub async fn import_staff(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    STAFF_SERVICE.import_staff(payload, &req).await
}

// 配置路由
pub fn configure_staff_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/staff")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_staff))
                    .route("", web::post().to(create_staff))
                    // CSV 批量导入
                    .service(
                        web::resource("/import")
                            .wrap(middlewares::RateLimit::import())
                            .route(web::post().to(import_staff)),
                    )
                    .route("/{id}", web::get().to(get_staff))
                    .route("/{id}", web::put().to(update_staff))
                    // 退职处理
                    .route("/{id}", web::delete().to(retire_staff)),
            ),
    );
}
