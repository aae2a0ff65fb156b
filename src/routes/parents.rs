use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::parents::requests::{
    CreateParentRequest, LinkChildRequest, ParentListParams, ParentStatusRequest,
    UpdateParentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ParentService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 ParentService 实例
static PARENT_SERVICE: Lazy<ParentService> = Lazy::new(ParentService::new_lazy);

pub async fn list_parents(
    req: HttpRequest,
    query: web::Query<ParentListParams>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.list_parents(query.into_inner(), &req).await
}

pub async fn get_parent(req: HttpRequest, parent_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.get_parent(parent_id.0, &req).await
}

pub async fn create_parent(
    req: HttpRequest,
    parent_data: web::Json<CreateParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .create_parent(parent_data.into_inner(), &req)
        .await
}

pub async fn update_parent(
    req: HttpRequest,
    parent_id: SafeIDI64,
    update_data: web::Json<UpdateParentRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .update_parent(parent_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn change_status(
    req: HttpRequest,
    parent_id: SafeIDI64,
    status_data: web::Json<ParentStatusRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .change_status(parent_id.0, status_data.status, &req)
        .await
}

pub async fn list_children(req: HttpRequest, parent_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.list_children(parent_id.0, &req).await
}

pub async fn link_child(
    req: HttpRequest,
    parent_id: SafeIDI64,
    link_data: web::Json<LinkChildRequest>,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .link_child(parent_id.0, link_data.into_inner(), &req)
        .await
}

pub async fn unlink_child(
    req: HttpRequest,
    parent_id: SafeIDI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE
        .unlink_child(parent_id.0, student_id.0, &req)
        .await
}

pub async fn my_children(req: HttpRequest) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.my_children(&req).await
}

pub async fn import_parents(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.import_parents(payload, &req).await
}

// 配置路由
pub fn configure_parent_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/parents")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(list_parents))
                    .route(web::post().to(create_parent)),
            )
            // CSV 批量导入 - 仅管理员
            .service(
                web::resource("/import")
                    .wrap(middlewares::RateLimit::import())
                    .route(
                        web::post()
                            .to(import_parents)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 家长本人查看子女
            .service(
                web::resource("/me/children").route(
                    web::get()
                        .to(my_children)
                        .wrap(middlewares::RequireRole::new_any(UserRole::parent_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(get_parent))
                    .route(web::put().to(update_parent)),
            )
            .service(
                web::resource("/{id}/status")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::put().to(change_status)),
            )
            .service(
                web::resource("/{id}/children")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(list_children))
                    .route(web::post().to(link_child)),
            )
            .service(
                web::resource("/{id}/children/{student_id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::delete().to(unlink_child)),
            ),
    );
}
