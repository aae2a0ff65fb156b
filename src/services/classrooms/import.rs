//! 班级 CSV 导入
//!
//! 必需列 grade、class_num，可选列 school_year（留空为当前学年）、
//! teacher_code（班主任教职工号）、student_codes（以逗号分隔的学号）。
//! 班级不存在时新建；学号按分班规则分配，找不到的学号跳过并在结果中列出。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassroomService, actor_of};
use crate::errors::SchoolMateError;
use crate::models::common::ImportRowError;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::ClassroomImportRow};
use crate::services::csv_import::{
    CsvSheet, ImportParseError, load_sheet, reject_rows, row_error,
};
use crate::services::{current_setting, error_response};
use crate::utils::validate::validate_grade_and_class;

const SCHOOL_YEAR: &[&str] = &["school_year", "학년도"];
const GRADE: &[&str] = &["grade", "학년"];
const CLASS_NUM: &[&str] = &["class_num", "반"];
const TEACHER_CODE: &[&str] = &["teacher_code", "담임교번"];
const STUDENT_CODES: &[&str] = &["student_codes", "학번목록"];

pub async fn import_classrooms(
    service: &ClassroomService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let actor = match actor_of(request) {
        Ok(actor) => actor,
        Err(response) => return Ok(response),
    };

    let sheet = match load_sheet(&mut payload).await {
        Ok(sheet) => sheet,
        Err(resp) => return Ok(resp),
    };
    let default_year = match current_setting(&storage).await {
        Ok(setting) => setting.current_school_year,
        Err(e) => return Ok(error_response(&e, None)),
    };
    let (rows, mut errors) = match parse_rows(&sheet, default_year) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(e.into_response()),
    };

    for (row, import) in &rows {
        let Some(code) = import.teacher_code.as_deref() else {
            continue;
        };
        match storage.get_teacher_by_code(code).await {
            Ok(Some(_)) => {}
            Ok(None) => errors.push(row_error(*row, "teacher_code", "Teacher code not found")),
            Err(e) => return Ok(error_response(&e, None)),
        }
    }

    if !errors.is_empty() {
        return Ok(reject_rows(errors));
    }

    let rows: Vec<ClassroomImportRow> = rows.into_iter().map(|(_, row)| row).collect();
    match storage.import_classrooms(rows, &actor).await {
        Ok(result) => {
            tracing::info!(
                "Imported {} classrooms ({} created, {} students assigned, {} moved) by {}",
                result.classrooms,
                result.created,
                result.assigned,
                result.moved,
                actor
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Import completed")))
        }
        Err(e @ SchoolMateError::NotFound(_)) => {
            Ok(error_response(&e, Some(ErrorCode::TeacherNotFound)))
        }
        Err(e) => Ok(error_response(&e, Some(ErrorCode::ImportFileDataInvalid))),
    }
}

type ParsedRows = (Vec<(usize, ClassroomImportRow)>, Vec<ImportRowError>);

fn parse_rows(sheet: &CsvSheet, default_year: i32) -> Result<ParsedRows, ImportParseError> {
    for column in [GRADE, CLASS_NUM] {
        sheet.require(column)?;
    }

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for mut row in sheet.rows() {
        let school_year = row
            .parse::<i32>(SCHOOL_YEAR, "Must be a number")
            .unwrap_or(default_year);
        if school_year <= 0 {
            row.error(SCHOOL_YEAR, "Invalid school year");
        }
        let grade = row.parse::<i32>(GRADE, "Must be a number");
        let class_num = row.parse::<i32>(CLASS_NUM, "Must be a number");
        match (grade, class_num) {
            (Some(grade), Some(class_num)) => {
                if let Err(msg) = validate_grade_and_class(grade, class_num) {
                    row.error(GRADE, msg);
                }
            }
            (None, _) if row.optional(GRADE).is_none() => row.error(GRADE, "Grade is required"),
            (_, None) if row.optional(CLASS_NUM).is_none() => {
                row.error(CLASS_NUM, "Class number is required")
            }
            _ => {}
        }
        let teacher_code = row.optional(TEACHER_CODE);
        let student_codes = split_codes(&row.text(STUDENT_CODES));

        match row.finish() {
            Ok(row_num) => {
                if let (Some(grade), Some(class_num)) = (grade, class_num) {
                    rows.push((
                        row_num,
                        ClassroomImportRow {
                            school_year,
                            grade,
                            class_num,
                            teacher_code,
                            student_codes,
                        },
                    ));
                }
            }
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    Ok((rows, errors))
}

/// `S1, S2,,S3` -> [S1, S2, S3]
fn split_codes(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_csv(data: &str) -> Result<ParsedRows, ImportParseError> {
        parse_rows(&CsvSheet::parse(data.as_bytes())?, 2025)
    }

    #[test]
    fn test_split_codes() {
        assert_eq!(split_codes(" S1, S2,,S3 "), vec!["S1", "S2", "S3"]);
        assert!(split_codes("").is_empty());
    }

    #[test]
    fn test_parse_classroom_rows() {
        let data = "학년도,학년,반,담임교번,학번목록\n\
                    2024,1,1,T100,\"S1,S2\"\n\
                    ,1,2,,\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1.school_year, 2024);
        assert_eq!(rows[0].1.teacher_code.as_deref(), Some("T100"));
        assert_eq!(rows[0].1.student_codes, vec!["S1", "S2"]);
        // 学年留空时使用当前学年
        assert_eq!(rows[1].1.school_year, 2025);
        assert_eq!(rows[1].1.teacher_code, None);
        assert!(rows[1].1.student_codes.is_empty());
    }

    #[test]
    fn test_invalid_grade_and_missing_class() {
        let data = "grade,class_num\n7,1\n2,\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(rows.is_empty());
        assert_eq!(errors.len(), 2);
        assert_eq!((errors[0].row, errors[0].field.as_str()), (2, "grade"));
        assert_eq!((errors[1].row, errors[1].field.as_str()), (3, "class_num"));
    }

    #[test]
    fn test_missing_grade_column() {
        let err = parse_csv("class_num\n1\n").unwrap_err();
        assert!(matches!(err, ImportParseError::MissingColumn(ref c) if c == "grade"));
    }
}
