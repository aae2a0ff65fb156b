use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{
        requests::GradeListParams,
        responses::{GradeListResponse, GradeResponse},
    },
};
use crate::services::{bad_request, current_user, error_response, forbidden, not_found};
use crate::storage::Storage;
use crate::utils::validate::{validate_grade_year, validate_semester};

/// 学期与学年过滤条件校验
fn check_filters(query: &GradeListParams) -> Result<(), HttpResponse> {
    if let Some(semester) = query.semester {
        validate_semester(semester).map_err(|msg| bad_request(ErrorCode::GradeInvalid, msg))?;
    }
    if let Some(grade_year) = query.grade_year {
        validate_grade_year(grade_year).map_err(|msg| bad_request(ErrorCode::GradeInvalid, msg))?;
    }
    Ok(())
}

async fn grades_response(
    storage: &Arc<dyn Storage>,
    query: GradeListParams,
) -> ActixResult<HttpResponse> {
    match storage.list_grades(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeListResponse { items },
            "Grade list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, None)),
    }
}

/// 按学生、科目、学期、学年任意组合查询，条件为空时返回全部
pub async fn list_grades(
    service: &GradeService,
    query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(response) = check_filters(&query) {
        return Ok(response);
    }
    grades_response(&storage, query).await
}

/// 指定学生的成绩，学生不存在时返回 404
pub async fn list_student_grades(
    service: &GradeService,
    student_id: i64,
    mut query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(response) = check_filters(&query) {
        return Ok(response);
    }
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(error_response(&e, None)),
    }

    query.student_id = Some(student_id);
    grades_response(&storage, query).await
}

/// 学生本人的成绩
pub async fn list_my_grades(
    service: &GradeService,
    mut query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(response) = check_filters(&query) {
        return Ok(response);
    }
    let student = match storage.get_student_by_user_id(user.id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::StudentNotFound,
                "Student information not found for current user",
            ));
        }
        Err(e) => return Ok(error_response(&e, None)),
    };

    query.student_id = Some(student.id);
    query.subject_code = None;
    grades_response(&storage, query).await
}

/// 家长查看已关联子女的成绩
pub async fn list_child_grades(
    service: &GradeService,
    student_id: i64,
    mut query: GradeListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(response) = check_filters(&query) {
        return Ok(response);
    }
    let parent = match storage.get_parent_by_user_id(user.id).await {
        Ok(Some(parent)) => parent,
        Ok(None) => {
            return Ok(not_found(
                ErrorCode::ParentNotFound,
                "Parent information not found for current user",
            ));
        }
        Err(e) => return Ok(error_response(&e, None)),
    };
    if !parent.children.iter().any(|c| c.student_id == student_id) {
        return Ok(forbidden(
            ErrorCode::Forbidden,
            "The student is not linked to this parent",
        ));
    }

    query.student_id = Some(student_id);
    grades_response(&storage, query).await
}

pub async fn get_grade(
    service: &GradeService,
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradeResponse { grade },
            "Grade retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}
