//! 学生 CSV 导入
//!
//! 表头必须包含 email、password、name、code，
//! 可选列 phone、birth_date、gender、address、school_year、classroom_id、attendance_num。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;

use super::StudentService;
use super::create::validate_new_student;
use crate::models::ErrorCode;
use crate::models::common::ImportRowError;
use crate::models::students::entities::Gender;
use crate::models::students::requests::CreateStudentRequest;
use crate::services::csv_import::{
    CsvSheet, EMAIL, ImportParseError, NAME, PASSWORD, PHONE, hash_in_background,
    imported_response, load_sheet, reject_rows, row_error,
};
use crate::services::error_response;

const CODE: &[&str] = &["code", "학번"];
const BIRTH_DATE: &[&str] = &["birth_date", "생년월일"];
const GENDER: &[&str] = &["gender", "성별"];
const ADDRESS: &[&str] = &["address", "주소"];
const SCHOOL_YEAR: &[&str] = &["school_year", "학년도"];
const CLASSROOM_ID: &[&str] = &["classroom_id", "학급"];
const ATTENDANCE_NUM: &[&str] = &["attendance_num", "번호"];

/// 一行导入数据（行号从 2 开始）
#[derive(Debug, Clone)]
struct ImportRow {
    row_num: usize,
    request: CreateStudentRequest,
}

pub async fn import_students(
    service: &StudentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let sheet = match load_sheet(&mut payload).await {
        Ok(sheet) => sheet,
        Err(resp) => return Ok(resp),
    };
    let (rows, mut errors) = match parse_rows(&sheet) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(e.into_response()),
    };

    errors.extend(check_rows(&rows));

    // 与已有数据冲突
    for row in &rows {
        match storage.get_user_by_email(&row.request.email).await {
            Ok(Some(_)) => errors.push(row_error(row.row_num, "email", "Email already exists")),
            Ok(None) => {}
            Err(e) => return Ok(error_response(&e, None)),
        }
        match storage.get_student_by_code(&row.request.code).await {
            Ok(Some(_)) => errors.push(row_error(row.row_num, "code", "Student code already exists")),
            Ok(None) => {}
            Err(e) => return Ok(error_response(&e, None)),
        }
    }

    if !errors.is_empty() {
        return Ok(reject_rows(errors));
    }

    let mut requests = Vec::with_capacity(rows.len());
    for row in rows {
        let mut req = row.request;
        req.password = match hash_in_background(req.password).await {
            Ok(hash) => hash,
            Err(resp) => return Ok(resp),
        };
        requests.push(req);
    }

    match storage.import_students(requests).await {
        Ok(imported) => {
            tracing::info!("Imported {} students", imported);
            Ok(imported_response(imported))
        }
        Err(e) => Ok(error_response(&e, Some(ErrorCode::ImportFileDataInvalid))),
    }
}

/// 逐行转换，返回可用的行与格式错误
fn parse_rows(sheet: &CsvSheet) -> Result<(Vec<ImportRow>, Vec<ImportRowError>), ImportParseError> {
    for column in [EMAIL, PASSWORD, NAME, CODE] {
        sheet.require(column)?;
    }

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for mut row in sheet.rows() {
        let birth_date = row.date(BIRTH_DATE);
        let gender = row.parse::<Gender>(GENDER, "Unknown gender");
        let school_year = row.parse::<i32>(SCHOOL_YEAR, "Must be a number");
        let classroom_id = row.parse::<i64>(CLASSROOM_ID, "Must be a number");
        let attendance_num = row.parse::<i32>(ATTENDANCE_NUM, "Must be a number");

        let request = CreateStudentRequest {
            email: row.text(EMAIL).to_lowercase(),
            password: row.text(PASSWORD),
            name: row.text(NAME),
            phone: row.optional(PHONE),
            code: row.text(CODE),
            birth_date,
            gender,
            address: row.optional(ADDRESS),
            basic_habits: None,
            special_notes: None,
            school_year,
            classroom_id,
            attendance_num,
        };

        match row.finish() {
            Ok(row_num) => rows.push(ImportRow { row_num, request }),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    Ok((rows, errors))
}

/// 字段校验及文件内的重复检查
fn check_rows(rows: &[ImportRow]) -> Vec<ImportRowError> {
    let mut errors = Vec::new();
    let mut emails = HashSet::new();
    let mut codes = HashSet::new();

    for row in rows {
        if let Err((field, msg)) = validate_new_student(&row.request) {
            errors.push(row_error(row.row_num, field, msg));
            continue;
        }
        if !emails.insert(row.request.email.clone()) {
            errors.push(row_error(row.row_num, "email", "Duplicate email in file"));
        }
        if !codes.insert(row.request.code.clone()) {
            errors.push(row_error(row.row_num, "code", "Duplicate student code in file"));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "email,password,name,code,phone,birth_date,gender\n";

    fn parse_csv(data: &str) -> Result<(Vec<ImportRow>, Vec<ImportRowError>), ImportParseError> {
        parse_rows(&CsvSheet::parse(data.as_bytes())?)
    }

    #[test]
    fn test_parse_valid_rows() {
        let data = format!(
            "{HEADER}kim@school.kr,Schoolmate7x,김민준,S2024001,010-1234-5678,2010-03-02,MALE\n\
             lee@school.kr,Schoolmate7x,이서연,S2024002,,,\n"
        );
        let (rows, errors) = parse_csv(&data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_num, 2);
        assert_eq!(rows[0].request.gender, Some(Gender::Male));
        assert_eq!(rows[1].request.phone, None);
        assert_eq!(rows[1].request.birth_date, None);
    }

    #[test]
    fn test_korean_headers() {
        let data = "이메일,비밀번호,이름,학번,번호\nkim@school.kr,Schoolmate7x,김민준,S1,7\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(rows[0].request.code, "S1");
        assert_eq!(rows[0].request.attendance_num, Some(7));
    }

    #[test]
    fn test_missing_required_column() {
        let err = parse_csv("email,password,name\na@b.kr,Schoolmate7x,x\n").unwrap_err();
        assert!(matches!(err, ImportParseError::MissingColumn(ref c) if c == "code"));
    }

    #[test]
    fn test_bad_cells_are_reported_with_row_number() {
        let data = format!("{HEADER}kim@school.kr,Schoolmate7x,김민준,S1,,2010-13-40,UNKNOWN\n");
        let (rows, errors) = parse_csv(&data).expect("parse");
        assert!(rows.is_empty());
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.row == 2));
    }

    #[test]
    fn test_duplicates_within_file() {
        let data = format!(
            "{HEADER}kim@school.kr,Schoolmate7x,김민준,S1,,,\n\
             kim@school.kr,Schoolmate7x,김민서,S1,,,\n"
        );
        let (rows, _) = parse_csv(&data).expect("parse");
        let errors = check_rows(&rows);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.row == 3));
    }
}
