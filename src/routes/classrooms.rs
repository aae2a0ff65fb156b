use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classrooms::requests::{
    BulkStatusRequest, ClassroomListParams, ClassroomStudentsRequest, CreateClassroomRequest,
    RandomAssignRequest, TransferStudentRequest, UpdateClassroomRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassroomService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ClassroomService 实例
static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);

pub async fn list_classrooms(
    req: HttpRequest,
    query: web::Query<ClassroomListParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classrooms(query.into_inner(), &req)
        .await
}

pub async fn get_classroom(req: HttpRequest, classroom_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.get_classroom(classroom_id.0, &req).await
}

pub async fn create_classroom(
    req: HttpRequest,
    classroom_data: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .create_classroom(classroom_data.into_inner(), &req)
        .await
}

pub async fn update_classroom(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    update_data: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(classroom_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn bulk_update_status(
    req: HttpRequest,
    status_data: web::Json<BulkStatusRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .bulk_update_status(status_data.into_inner(), &req)
        .await
}

pub async fn delete_classroom(
    req: HttpRequest,
    classroom_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .delete_classroom(classroom_id.0, &req)
        .await
}

pub async fn assign_students(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    students: web::Json<ClassroomStudentsRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .assign_students(classroom_id.0, students.into_inner().student_ids, &req)
        .await
}

pub async fn assign_random(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    random_data: web::Json<RandomAssignRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .assign_random(classroom_id.0, random_data.count, &req)
        .await
}

pub async fn remove_students(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    students: web::Json<ClassroomStudentsRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .remove_students(classroom_id.0, students.into_inner().student_ids, &req)
        .await
}

pub async fn transfer_student(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    transfer_data: web::Json<TransferStudentRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .transfer_student(classroom_id.0, transfer_data.into_inner(), &req)
        .await
}

pub async fn export_roster(req: HttpRequest, classroom_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.export_roster(classroom_id.0, &req).await
}

pub async fn import_classrooms(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.import_classrooms(payload, &req).await
}

// 配置路由
pub fn configure_classroom_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classrooms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_classrooms)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // CSV 批量导入 - 仅管理员
            .service(
                web::resource("/import")
                    .wrap(middlewares::RateLimit::import())
                    .route(
                        web::post()
                            .to(import_classrooms)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/status")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::put().to(bulk_update_status)),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/export")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::get().to(export_roster)),
            )
            .service(
                web::resource("/{id}/students")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(assign_students))
                    .route(web::delete().to(remove_students)),
            )
            .service(
                web::resource("/{id}/students/random")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(assign_random)),
            )
            .service(
                web::resource("/{id}/transfer")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(transfer_student)),
            ),
    );
}
