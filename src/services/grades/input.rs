use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{requests::InputGradeRequest, responses::GradeResponse},
};
use crate::services::{bad_request, error_response, not_found};
use crate::utils::validate::{validate_grade_year, validate_score, validate_semester};

fn validate_input(grade_data: &InputGradeRequest) -> Result<(), &'static str> {
    validate_semester(grade_data.semester)?;
    validate_grade_year(grade_data.grade_year)?;
    validate_score(grade_data.score)
}

/// 录入成绩，同一考试已有记录时覆盖分数
pub async fn input_grade(
    service: &GradeService,
    grade_data: InputGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_input(&grade_data) {
        return Ok(bad_request(ErrorCode::GradeInvalid, msg));
    }

    match storage.input_grade(grade_data).await {
        Ok(grade) => {
            tracing::info!(
                "Grade recorded: student {}, subject {}, {} {}",
                grade.student_id,
                grade.subject_code,
                grade.test_type,
                grade.score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradeResponse { grade },
                "Grade recorded successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn update_score(
    service: &GradeService,
    grade_id: i64,
    score: f64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_score(score) {
        return Ok(bad_request(ErrorCode::GradeInvalid, msg));
    }

    match storage.update_grade_score(grade_id, score).await {
        Ok(Some(grade)) => {
            tracing::info!("Grade {} score changed to {}", grade_id, score);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradeResponse { grade },
                "Grade updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

pub async fn delete_grade(
    service: &GradeService,
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_grade(grade_id).await {
        Ok(true) => {
            tracing::info!("Grade {} deleted", grade_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Grade deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::GradeNotFound, "Grade not found")),
        Err(e) => Ok(error_response(&e, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::entities::TestType;

    fn request(semester: i32, grade_year: i32, score: f64) -> InputGradeRequest {
        InputGradeRequest {
            student_id: 1,
            subject_code: "KOR1".to_string(),
            test_type: TestType::MidtermTest,
            semester,
            grade_year,
            score,
        }
    }

    #[test]
    fn test_validate_input() {
        assert!(validate_input(&request(1, 1, 87.5)).is_ok());
        assert!(validate_input(&request(2, 3, 0.0)).is_ok());
        assert!(validate_input(&request(3, 1, 50.0)).is_err());
        assert!(validate_input(&request(1, 4, 50.0)).is_err());
        assert!(validate_input(&request(1, 1, 100.5)).is_err());
        assert!(validate_input(&request(1, 1, f64::NAN)).is_err());
    }
}
