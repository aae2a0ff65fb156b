//! 职员 CSV 导入
//!
//! 必需列 email、password、name、code，
//! 可选列 phone、job_title、work_location、employment_type。
//! 工号与已有职员重复时整批回滚并返回冲突。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffService;
use crate::errors::SchoolMateError;
use crate::models::ErrorCode;
use crate::models::common::ImportRowError;
use crate::models::staff::requests::CreateStaffRequest;
use crate::models::teachers::entities::EmploymentType;
use crate::services::csv_import::{
    CsvSheet, EMAIL, ImportParseError, NAME, PASSWORD, PHONE, duplicates_in_file,
    existing_emails, hash_in_background, imported_response, load_sheet, reject_rows, row_error,
    validate_account_row,
};
use crate::services::error_response;
use crate::utils::validate::validate_code;

const CODE: &[&str] = &["code", "사번"];
const JOB_TITLE: &[&str] = &["job_title", "직함"];
const WORK_LOCATION: &[&str] = &["work_location", "근무지"];
const EMPLOYMENT_TYPE: &[&str] = &["employment_type", "고용형태"];

pub async fn import_staff(
    service: &StaffService,
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

    match storage.import_staff(requests).await {
        Ok(imported) => {
            tracing::info!("Imported {} staff members", imported);
            Ok(imported_response(imported))
        }
        Err(e @ SchoolMateError::Conflict(_)) => {
            Ok(error_response(&e, Some(ErrorCode::StaffCodeAlreadyExists)))
        }
        Err(e) => Ok(error_response(&e, Some(ErrorCode::ImportFileDataInvalid))),
    }
}

type ParsedRows = (Vec<(usize, CreateStaffRequest)>, Vec<ImportRowError>);

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
        let request = CreateStaffRequest {
            email: row.text(EMAIL).to_lowercase(),
            password: row.text(PASSWORD),
            name: row.text(NAME),
            phone: row.optional(PHONE),
            code: row.text(CODE),
            job_title: row.optional(JOB_TITLE),
            work_location: row.optional(WORK_LOCATION),
            employment_type,
        };
        match row.finish() {
            Ok(row_num) => rows.push((row_num, request)),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    Ok((rows, errors))
}

fn check_rows(rows: &[(usize, CreateStaffRequest)]) -> Vec<ImportRowError> {
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
        "Duplicate staff code in file",
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
    fn test_parse_staff_rows() {
        let data = "이름,이메일,비밀번호,사번,직함,근무지,고용형태\n\
                    정수민,jung@school.kr,Schoolmate7x,E001,행정실장,본관,PERMANENT\n\
                    한도윤,han@school.kr,Schoolmate7x,E002,,,무기계약직\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(rows[0].1.job_title.as_deref(), Some("행정실장"));
        assert_eq!(rows[0].1.employment_type, Some(EmploymentType::Permanent));
        assert_eq!(
            rows[1].1.employment_type,
            Some(EmploymentType::IndefiniteContract)
        );
        assert!(check_rows(&rows).is_empty());
    }

    #[test]
    fn test_blank_code_is_rejected() {
        let data = "email,password,name,code\njung@school.kr,Schoolmate7x,정수민,\n";
        let (rows, _) = parse_csv(data).expect("parse");
        let errors = check_rows(&rows);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "code");
    }
}
