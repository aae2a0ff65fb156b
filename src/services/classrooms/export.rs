//! 班级名单 CSV 导出

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::ErrorCode;
use crate::models::classrooms::entities::ClassroomStudent;
use crate::services::{error_response, not_found};

pub async fn export_roster(
    service: &ClassroomService,
    classroom_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let classroom = match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => return Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };
    let students = match storage.list_classroom_students(classroom_id).await {
        Ok(students) => students,
        Err(e) => return Ok(error_response(&e, None)),
    };

    let data = roster_csv(&students).map_err(|e| {
        tracing::error!("CSV 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV 生成失败: {e}"))
    })?;

    // 文件名只用 ASCII
    let file_name = format!(
        "classroom_{}_{}_{}.csv",
        classroom.school_year, classroom.grade, classroom.class_num
    );
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(data))
}

/// 번호,이름,학번,상태；没有出席号时写 "-"
fn roster_csv(students: &[ClassroomStudent]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["번호", "이름", "학번", "상태"])?;

    for student in students {
        wtr.write_record([
            student
                .attendance_num
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            student.name.clone(),
            student.code.clone(),
            student.status.label().to_string(),
        ])?;
    }

    wtr.into_inner().map_err(|e| e.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::StudentStatus;

    #[test]
    fn test_roster_csv() {
        let students = vec![
            ClassroomStudent {
                assignment_id: 1,
                student_id: 10,
                attendance_num: Some(1),
                name: "김민준".to_string(),
                code: "S2024001".to_string(),
                status: StudentStatus::Enrolled,
            },
            ClassroomStudent {
                assignment_id: 2,
                student_id: 11,
                attendance_num: None,
                name: "이서연".to_string(),
                code: "S2024002".to_string(),
                status: StudentStatus::Enrolled,
            },
        ];

        let data = String::from_utf8(roster_csv(&students).unwrap()).unwrap();
        let lines: Vec<_> = data.lines().collect();
        assert_eq!(lines[0], "번호,이름,학번,상태");
        assert!(lines[1].starts_with("1,김민준,S2024001,"));
        assert!(lines[2].starts_with("-,이서연,S2024002,"));
    }
}
