//! 教师 CSV 导入
//!
//! 必需列 email、password、name、code，
//! 可选列 phone、subject、department、position、employment_type。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::errors::SchoolMateError;
use crate::models::ErrorCode;
use crate::models::common::ImportRowError;
use crate::models::teachers::{entities::EmploymentType, requests::CreateTeacherRequest};
use crate::services::csv_import::{
    CsvSheet, EMAIL, ImportParseError, NAME, PASSWORD, PHONE, duplicates_in_file,
    existing_emails, hash_in_background, imported_response, load_sheet, reject_rows, row_error,
    validate_account_row,
};
use crate::services::error_response;
use crate::utils::validate::validate_code;

const CODE: &[&str] = &["code", "교직원번호"];
const SUBJECT: &[&str] = &["subject", "담당과목"];
const DEPARTMENT: &[&str] = &["department", "부서"];
const POSITION: &[&str] = &["position", "직위"];
const EMPLOYMENT_TYPE: &[&str] = &["employment_type", "고용형태"];

pub async fn import_teachers(
    service: &TeacherService,
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

    match existing_emails(
        &storage,
        rows.iter().map(|(row, req)| (*row, req.email.as_str())),
    )
    .await
    {
        Ok(taken) => errors.extend(taken),
        Err(resp) => return Ok(resp),
    }
    for (row, req) in &rows {
        match storage.get_teacher_by_code(&req.code).await {
            Ok(Some(_)) => errors.push(row_error(*row, "code", "Teacher code already exists")),
            Ok(None) => {}
            Err(e) => return Ok(error_response(&e, None)),
        }
    }

    if !errors.is_empty() {
        return Ok(reject_rows(errors));
    }

    let mut requests = Vec::with_capacity(rows.len());
    for (_, mut req) in rows {
        req.password = match hash_in_background(req.password).await {
            Ok(hash) => hash,
            Err(resp) => return Ok(resp),
        };
        requests.push(req);
    }

    match storage.import_teachers(requests).await {
        Ok(imported) => {
            tracing::info!("Imported {} teachers", imported);
            Ok(imported_response(imported))
        }
        Err(e @ SchoolMateError::Conflict(_)) => Ok(error_response(
            &e,
            Some(ErrorCode::TeacherCodeAlreadyExists),
        )),
        Err(e) => Ok(error_response(&e, Some(ErrorCode::ImportFileDataInvalid))),
    }
}

type ParsedRows = (Vec<(usize, CreateTeacherRequest)>, Vec<ImportRowError>);

fn parse_rows(sheet: &CsvSheet) -> Result<ParsedRows, ImportParseError> {
    for column in [EMAIL, PASSWORD, NAME, CODE] {
        sheet.require(column)?;
    }

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for mut row in sheet.rows() {
        let employment_type = row.choice(
            EMPLOYMENT_TYPE,
            "Unknown employment type",
            EmploymentType::from_label,
        );
        let request = CreateTeacherRequest {
            email: row.text(EMAIL).to_lowercase(),
            password: row.text(PASSWORD),
            name: row.text(NAME),
            phone: row.optional(PHONE),
            code: row.text(CODE),
            subject: row.optional(SUBJECT),
            department: row.optional(DEPARTMENT),
            position: row.optional(POSITION),
            employment_type,
        };
        match row.finish() {
            Ok(row_num) => rows.push((row_num, request)),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    Ok((rows, errors))
}

fn check_rows(rows: &[(usize, CreateTeacherRequest)]) -> Vec<ImportRowError> {
    let mut errors: Vec<ImportRowError> = rows
        .iter()
        .filter_map(|(row, req)| {
            validate_account_row(*row, &req.email, &req.name, req.phone.as_deref(), &req.password)
                .or_else(|| {
                    validate_code(&req.code)
                        .err()
                        .map(|msg| row_error(*row, "code", msg))
                })
        })
        .collect();
    errors.extend(duplicates_in_file(
        rows.iter().map(|(row, req)| (*row, req.email.as_str())),
        "email",
        "Duplicate email in file",
    ));
    errors.extend(duplicates_in_file(
        rows.iter().map(|(row, req)| (*row, req.code.as_str())),
        "code",
        "Duplicate teacher code in file",
    ));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_csv(data: &str) -> Result<ParsedRows, ImportParseError> {
        parse_rows(&CsvSheet::parse(data.as_bytes())?)
    }

    #[test]
    fn test_parse_teacher_rows() {
        let data = "이메일,비밀번호,이름,교직원번호,담당과목,고용형태\n\
                    park@school.kr,Schoolmate7x,박지훈,T100,수학,FIXED_TERM\n\
                    choi@school.kr,Schoolmate7x,최유진,T101,,\n\
                    kang@school.kr,Schoolmate7x,강하늘,T102,,시간제\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].1.subject.as_deref(), Some("수학"));
        assert_eq!(rows[0].1.employment_type, Some(EmploymentType::FixedTerm));
        assert_eq!(rows[1].1.employment_type, None);
        assert_eq!(rows[2].1.employment_type, Some(EmploymentType::PartTime));
    }

    #[test]
    fn test_unknown_employment_type() {
        let data = "email,password,name,code,employment_type\n\
                    park@school.kr,Schoolmate7x,박지훈,T100,SEASONAL\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(rows.is_empty());
        assert_eq!(errors[0].field, "employment_type");
    }

    #[test]
    fn test_duplicate_code_in_file() {
        let data = "email,password,name,code\n\
                    park@school.kr,Schoolmate7x,박지훈,T100\n\
                    choi@school.kr,Schoolmate7x,최유진,T100\n";
        let (rows, _) = parse_csv(data).expect("parse");
        let errors = check_rows(&rows);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].row, 3);
        assert_eq!(errors[0].field, "code");
    }
}
