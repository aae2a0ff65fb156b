use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::{GradeListParams, InputGradeRequest, UpdateGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(query.into_inner(), &req).await
}

pub async fn list_student_grades(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_student_grades(student_id.0, query.into_inner(), &req)
        .await
}

pub async fn list_my_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_my_grades(query.into_inner(), &req).await
}

pub async fn list_child_grades(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_child_grades(student_id.0, query.into_inner(), &req)
        .await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(grade_id.0, &req).await
}

pub async fn input_grade(
    req: HttpRequest,
    grade_data: web::Json<InputGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.input_grade(grade_data.into_inner(), &req).await
}

pub async fn update_score(
    req: HttpRequest,
    grade_id: SafeIDI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_score(grade_id.0, update_data.score, &req)
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(grade_id.0, &req).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/me").route(
                    web::get()
                        .to(list_my_grades)
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::resource("/children/{student_id}").route(
                    web::get()
                        .to(list_child_grades)
                        .wrap(middlewares::RequireRole::new_any(UserRole::parent_roles())),
                ),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(list_grades))
                    .route("", web::post().to(input_grade))
                    .route("/students/{student_id}", web::get().to(list_student_grades))
                    .route("/{id}", web::get().to(get_grade))
                    .route("/{id}", web::put().to(update_score))
                    .route("/{id}", web::delete().to(delete_grade)),
            ),
    );
}
