use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassroomService, actor_of};
use crate::errors::SchoolMateError;
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::{
        requests::{CreateClassroomRequest, NewClassroom},
        responses::ClassroomResponse,
    },
};
use crate::services::{bad_request, error_response};
use crate::utils::validate::validate_grade_and_class;

/// 新建班级，随后按请求分配指定学生或随机学生
pub async fn create_classroom(
    service: &ClassroomService,
    classroom_data: CreateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    if classroom_data.school_year <= 0 {
        return Ok(bad_request(ErrorCode::BadRequest, "Invalid school year"));
    }
    if let Err(msg) = validate_grade_and_class(classroom_data.grade, classroom_data.class_num) {
        return Ok(bad_request(ErrorCode::BadRequest, msg));
    }

    let new = NewClassroom {
        school_year: classroom_data.school_year,
        grade: classroom_data.grade,
        class_num: classroom_data.class_num,
        homeroom_teacher_id: classroom_data.homeroom_teacher_id,
    };

    let classroom = match storage.create_classroom(new, &actor).await {
        Ok(classroom) => classroom,
        Err(e @ SchoolMateError::Conflict(_)) => {
            return Ok(error_response(&e, Some(ErrorCode::ClassroomAlreadyExists)));
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            return Ok(error_response(&e, Some(ErrorCode::TeacherNotFound)));
        }
        Err(e) => return Ok(error_response(&e, None)),
    };
    tracing::info!("Classroom {} ({}) created by {}", classroom.id, classroom.name, actor);

    if let Some(student_ids) = classroom_data.student_ids.filter(|ids| !ids.is_empty())
        && let Err(e) = storage
            .assign_students(classroom.id, student_ids, &actor)
            .await
    {
        return Ok(error_response(&e, None));
    }
    if let Some(count) = classroom_data.random_count.filter(|count| *count > 0)
        && let Err(e) = storage
            .assign_random_students(classroom.id, count, &actor)
            .await
    {
        return Ok(error_response(&e, None));
    }

    // 分配后重新读取人数
    let classroom = match storage.get_classroom_by_id(classroom.id).await {
        Ok(Some(refreshed)) => refreshed,
        Ok(None) => classroom,
        Err(e) => return Ok(error_response(&e, None)),
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(
        ClassroomResponse { classroom },
        "Classroom created successfully",
    )))
}
