//! 家长 CSV 导入
//!
//! 必需列 email、password、name，可选列 phone、code、emergency_contact。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ParentService;
use crate::models::ErrorCode;
use crate::models::common::ImportRowError;
use crate::models::parents::requests::CreateParentRequest;
use crate::services::csv_import::{
    CsvSheet, EMAIL, ImportParseError, NAME, PASSWORD, PHONE, duplicates_in_file,
    existing_emails, hash_in_background, imported_response, load_sheet, reject_rows,
    validate_account_row,
};
use crate::services::error_response;

const CODE: &[&str] = &["code", "학부모코드"];
const EMERGENCY_CONTACT: &[&str] = &["emergency_contact", "비상연락처"];

pub async fn import_parents(
    service: &ParentService,
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

    match storage.import_parents(requests).await {
        Ok(imported) => {
            tracing::info!("Imported {} parents", imported);
            Ok(imported_response(imported))
        }
        Err(e) => Ok(error_response(&e, Some(ErrorCode::ImportFileDataInvalid))),
    }
}

type ParsedRows = (Vec<(usize, CreateParentRequest)>, Vec<ImportRowError>);

fn parse_rows(sheet: &CsvSheet) -> Result<ParsedRows, ImportParseError> {
    for column in [EMAIL, PASSWORD, NAME] {
        sheet.require(column)?;
    }

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for row in sheet.rows() {
        let request = CreateParentRequest {
            email: row.text(EMAIL).to_lowercase(),
            password: row.text(PASSWORD),
            name: row.text(NAME),
            phone: row.optional(PHONE),
            code: row.optional(CODE),
            emergency_contact: row.optional(EMERGENCY_CONTACT),
            status: None,
        };
        match row.finish() {
            Ok(row_num) => rows.push((row_num, request)),
            Err(mut row_errors) => errors.append(&mut row_errors),
        }
    }

    Ok((rows, errors))
}

fn check_rows(rows: &[(usize, CreateParentRequest)]) -> Vec<ImportRowError> {
    let mut errors: Vec<ImportRowError> = rows
        .iter()
        .filter_map(|(row, req)| {
            validate_account_row(*row, &req.email, &req.name, req.phone.as_deref(), &req.password)
        })
        .collect();
    errors.extend(duplicates_in_file(
        rows.iter().map(|(row, req)| (*row, req.email.as_str())),
        "email",
        "Duplicate email in file",
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
    fn test_parse_parent_rows() {
        let data = "이름,이메일,비밀번호,연락처,학부모코드\n\
                    김영희,mom@home.kr,Schoolmate7x,010-2222-3333,P001\n\
                    김철수,dad@home.kr,Schoolmate7x,,\n";
        let (rows, errors) = parse_csv(data).expect("parse");
        assert!(errors.is_empty());
        assert_eq!(rows[0].1.code.as_deref(), Some("P001"));
        assert_eq!(rows[1].1.phone, None);
        assert!(check_rows(&rows).is_empty());
    }

    #[test]
    fn test_invalid_phone_is_reported() {
        let data = "email,password,name,phone\nmom@home.kr,Schoolmate7x,김영희,12345\n";
        let (rows, _) = parse_csv(data).expect("parse");
        let errors = check_rows(&rows);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
    }

    #[test]
    fn test_code_column_is_optional() {
        let err = parse_csv("email,name\nmom@home.kr,김영희\n").unwrap_err();
        assert!(matches!(err, ImportParseError::MissingColumn(ref c) if c == "password"));
    }
}
