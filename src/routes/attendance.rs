use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    BulkAttendanceRequest, ClassroomAttendanceParams, DateRangeParams, RecordAttendanceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::{SafeClassroomIdI64, SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn record_attendance(
    req: HttpRequest,
    record_data: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_attendance(record_data.into_inner(), &req)
        .await
}

pub async fn bulk_record(
    req: HttpRequest,
    bulk_data: web::Json<BulkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .bulk_record(bulk_data.into_inner(), &req)
        .await
}

pub async fn delete_attendance(
    req: HttpRequest,
    attendance_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .delete_attendance(attendance_id.0, &req)
        .await
}

pub async fn list_student_attendance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    range: web::Query<DateRangeParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_student_attendance(student_id.0, range.into_inner(), &req)
        .await
}

pub async fn student_summary(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    range: web::Query<DateRangeParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .student_summary(student_id.0, range.into_inner(), &req)
        .await
}

pub async fn list_my_attendance(
    req: HttpRequest,
    range: web::Query<DateRangeParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_my_attendance(range.into_inner(), &req)
        .await
}

pub async fn list_classroom_attendance(
    req: HttpRequest,
    classroom_id: SafeClassroomIdI64,
    query: web::Query<ClassroomAttendanceParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_classroom_attendance(classroom_id.0, query.date, &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/me").route(
                    web::get()
                        .to(list_my_attendance)
                        .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                ),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::post().to(record_attendance))
                    .route("/bulk", web::post().to(bulk_record))
                    .route(
                        "/students/{student_id}",
                        web::get().to(list_student_attendance),
                    )
                    .route(
                        "/students/{student_id}/summary",
                        web::get().to(student_summary),
                    )
                    .route(
                        "/classrooms/{classroom_id}",
                        web::get().to(list_classroom_attendance),
                    )
                    .route("/{id}", web::delete().to(delete_attendance)),
            ),
    );
}
