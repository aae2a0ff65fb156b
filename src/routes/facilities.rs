use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::facilities::requests::{
    CreateFacilityRequest, FacilityListParams, UpdateFacilityRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FacilityService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FacilityService 实例
static FACILITY_SERVICE: Lazy<FacilityService> = Lazy::new(FacilityService::new_lazy);

pub async fn list_facilities(
    req: HttpRequest,
    query: web::Query<FacilityListParams>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .list_facilities(query.into_inner(), &req)
        .await
}

pub async fn get_facility(req: HttpRequest, facility_id: SafeIDI64) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE.get_facility(facility_id.0, &req).await
}

pub async fn create_facility(
    req: HttpRequest,
    facility_data: web::Json<CreateFacilityRequest>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .create_facility(facility_data.into_inner(), &req)
        .await
}

pub async fn update_facility(
    req: HttpRequest,
    facility_id: SafeIDI64,
    update_data: web::Json<UpdateFacilityRequest>,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE
        .update_facility(facility_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_facility(
    req: HttpRequest,
    facility_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    FACILITY_SERVICE.delete_facility(facility_id.0, &req).await
}

// 配置路由
pub fn configure_facility_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/facilities")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_facilities))
                    // 设施管理 - 设施管理员和管理员
                    .route(
                        web::post().to(create_facility).wrap(
                            middlewares::RequireRole::new_any(UserRole::facility_manager_roles()),
                        ),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_facility))
                    .route(
                        web::put().to(update_facility).wrap(
                            middlewares::RequireRole::new_any(UserRole::facility_manager_roles()),
                        ),
                    )
                    .route(
                        web::delete().to(delete_facility).wrap(
                            middlewares::RequireRole::new_any(UserRole::facility_manager_roles()),
                        ),
                    ),
            ),
    );
}
