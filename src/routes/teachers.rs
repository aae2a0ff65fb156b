use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teachers::requests::{
    AvailableHomeroomParams, CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::TeacherService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TeacherService 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(query.into_inner(), &req).await
}

pub async fn get_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(teacher_id.0, &req).await
}

pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(teacher_data.into_inner(), &req)
        .await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(teacher_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn retire_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.retire_teacher(teacher_id.0, &req).await
}

pub async fn list_available_homeroom(
    req: HttpRequest,
    query: web::Query<AvailableHomeroomParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_available_homeroom(query.into_inner(), &req)
        .await
}

pub async fn my_class(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.my_class(&req).await
}

pub async fn import_teachers(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.import_teachers(payload, &req).await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_teachers)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // CSV 批量导入 - 仅管理员
            .service(
                web::resource("/import")
                    .wrap(middlewares::RateLimit::import())
                    .route(
                        web::post()
                            .to(import_teachers)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 班主任查看本人班级
            .service(
                web::resource("/me/class")
                    .wrap(middlewares::RequireRole::new(&UserRole::Teacher))
                    .route(web::get().to(my_class)),
            )
            .service(
                web::resource("/available-homeroom")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::get().to(list_available_homeroom)),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    // 退休处理
                    .route(
                        web::delete()
                            .to(retire_teacher)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
