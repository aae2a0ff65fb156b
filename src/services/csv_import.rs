//! CSV 批量导入的公共部分
//!
//! 表头不区分大小写，每一列可以使用英文列名或韩文列名。
//! 各领域的导入在全部行校验通过后才写入，任一行有误时按行号返回错误。

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::StreamExt;
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::str::FromStr;
use std::sync::Arc;

use crate::models::common::{ImportResponse, ImportRowError};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, error_response};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_name, validate_password_simple, validate_phone,
};

pub(crate) const MAX_IMPORT_ROWS: usize = 1000;

// 账号类导入共用的列
pub(crate) const EMAIL: &[&str] = &["email", "이메일"];
pub(crate) const PASSWORD: &[&str] = &["password", "비밀번호"];
pub(crate) const NAME: &[&str] = &["name", "이름"];
pub(crate) const PHONE: &[&str] = &["phone", "연락처"];

/// 导入解析错误
#[derive(Debug)]
pub(crate) enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
}

impl ImportParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("Missing required column: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
        }
    }

    pub(crate) fn into_response(self) -> HttpResponse {
        bad_request(self.error_code(), self.message())
    }
}

pub(crate) fn row_error(row: usize, field: &str, message: impl Into<String>) -> ImportRowError {
    ImportRowError {
        row,
        field: field.to_string(),
        message: message.into(),
    }
}

/// 读取名为 `file` 的字段
async fn read_file_from_multipart(payload: &mut Multipart) -> Result<Vec<u8>, String> {
    let mut file_bytes = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Failed to read field: {e}"))?;

        if field.name() == Some("file") {
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("Failed to read data: {e}"))?;
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("File field not found".to_string());
    }
    Ok(file_bytes)
}

/// 已解析的 CSV：列名 -> 下标，以及带行号的数据行
#[derive(Debug)]
pub(crate) struct CsvSheet {
    columns: HashMap<String, usize>,
    records: Vec<(usize, csv::StringRecord)>,
}

impl CsvSheet {
    pub(crate) fn parse(data: &[u8]) -> Result<Self, ImportParseError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(data));

        let headers = rdr
            .headers()
            .map_err(|e| ImportParseError::ParseFailed(format!("Failed to read header: {e}")))?;
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim_start_matches('\u{feff}').to_lowercase(), i))
            .collect();

        let mut records = Vec::new();
        for (index, result) in rdr.records().enumerate() {
            let row_num = index + 2;
            let record = result.map_err(|e| {
                ImportParseError::ParseFailed(format!("Failed to parse row {row_num}: {e}"))
            })?;
            // 空行忽略
            if record.iter().all(str::is_empty) {
                continue;
            }
            records.push((row_num, record));
        }

        Ok(Self { columns, records })
    }

    fn column(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|name| self.columns.get(*name).copied())
    }

    /// 必需列，缺失时以第一个列名报错
    pub(crate) fn require(&self, aliases: &[&str]) -> Result<(), ImportParseError> {
        match self.column(aliases) {
            Some(_) => Ok(()),
            None => Err(ImportParseError::MissingColumn(
                aliases.first().copied().unwrap_or_default().to_string(),
            )),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.records.iter().map(|(row_num, record)| CsvRow {
            sheet: self,
            row_num: *row_num,
            record,
            errors: Vec::new(),
        })
    }
}

/// 一行数据，单元格解析错误累积在行内
pub(crate) struct CsvRow<'a> {
    sheet: &'a CsvSheet,
    pub(crate) row_num: usize,
    record: &'a csv::StringRecord,
    errors: Vec<ImportRowError>,
}

impl CsvRow<'_> {
    /// 非空单元格
    pub(crate) fn optional(&self, aliases: &[&str]) -> Option<String> {
        self.sheet
            .column(aliases)
            .and_then(|i| self.record.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// 必需列的单元格，空值原样返回交给字段校验
    pub(crate) fn text(&self, aliases: &[&str]) -> String {
        self.optional(aliases).unwrap_or_default()
    }

    /// 解析非空单元格，失败时记录错误
    pub(crate) fn parse<T: FromStr>(&mut self, aliases: &[&str], message: &str) -> Option<T> {
        let value = self.optional(aliases)?;
        match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.error(aliases, message);
                None
            }
        }
    }

    /// 枚举列，接受取值或显示名
    pub(crate) fn choice<T: FromStr>(
        &mut self,
        aliases: &[&str],
        message: &str,
        from_label: fn(&str) -> Option<T>,
    ) -> Option<T> {
        let value = self.optional(aliases)?;
        match value.parse::<T>().ok().or_else(|| from_label(&value)) {
            Some(parsed) => Some(parsed),
            None => {
                self.error(aliases, message);
                None
            }
        }
    }

    /// `YYYY-MM-DD` 日期
    pub(crate) fn date(&mut self, aliases: &[&str]) -> Option<chrono::NaiveDate> {
        let value = self.optional(aliases)?;
        match chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.error(aliases, "Date must be YYYY-MM-DD");
                None
            }
        }
    }

    pub(crate) fn error(&mut self, aliases: &[&str], message: impl Into<String>) {
        let field = aliases.first().copied().unwrap_or_default();
        self.errors.push(row_error(self.row_num, field, message));
    }

    /// 行内没有错误时返回 Ok，否则交出错误
    pub(crate) fn finish(self) -> Result<usize, Vec<ImportRowError>> {
        if self.errors.is_empty() {
            Ok(self.row_num)
        } else {
            Err(self.errors)
        }
    }
}

/// 账号字段校验，返回第一个出错的字段
pub(crate) fn validate_account_row(
    row: usize,
    email: &str,
    name: &str,
    phone: Option<&str>,
    password: &str,
) -> Option<ImportRowError> {
    let result = validate_email(email)
        .map_err(|msg| ("email", msg.to_string()))
        .and_then(|_| validate_name(name).map_err(|msg| ("name", msg.to_string())))
        .and_then(|_| match phone {
            Some(phone) => validate_phone(phone).map_err(|msg| ("phone", msg.to_string())),
            None => Ok(()),
        })
        .and_then(|_| validate_password_simple(password).map_err(|msg| ("password", msg)));
    result.err().map(|(field, msg)| row_error(row, field, msg))
}

/// 文件内重复的值，从第二次出现起报错
pub(crate) fn duplicates_in_file<'a>(
    keys: impl IntoIterator<Item = (usize, &'a str)>,
    field: &str,
    message: &str,
) -> Vec<ImportRowError> {
    let mut seen = HashSet::new();
    keys.into_iter()
        .filter(|(_, key)| !seen.insert(key.to_string()))
        .map(|(row, _)| row_error(row, field, message))
        .collect()
}

/// 已被占用的邮箱
pub(crate) async fn existing_emails<'a>(
    storage: &Arc<dyn Storage>,
    emails: impl IntoIterator<Item = (usize, &'a str)>,
) -> Result<Vec<ImportRowError>, HttpResponse> {
    let mut errors = Vec::new();
    for (row, email) in emails {
        match storage.get_user_by_email(email).await {
            Ok(Some(_)) => errors.push(row_error(row, "email", "Email already exists")),
            Ok(None) => {}
            Err(e) => return Err(error_response(&e, None)),
        }
    }
    Ok(errors)
}

/// 从上传内容中读出 CSV 并做行数检查
pub(crate) async fn load_sheet(payload: &mut Multipart) -> Result<CsvSheet, HttpResponse> {
    let file_bytes = read_file_from_multipart(payload).await.map_err(|e| {
        bad_request(
            ErrorCode::FileUploadFailed,
            format!("Failed to read file: {e}"),
        )
    })?;

    let sheet = CsvSheet::parse(&file_bytes).map_err(ImportParseError::into_response)?;
    if sheet.len() == 0 {
        return Err(bad_request(
            ErrorCode::ImportFileDataInvalid,
            "The file contains no data rows",
        ));
    }
    if sheet.len() > MAX_IMPORT_ROWS {
        return Err(bad_request(
            ErrorCode::ImportFileDataInvalid,
            format!("At most {MAX_IMPORT_ROWS} rows can be imported at once"),
        ));
    }
    Ok(sheet)
}

/// 整批拒绝，按行号排序返回错误
pub(crate) fn reject_rows(mut errors: Vec<ImportRowError>) -> HttpResponse {
    errors.sort_by_key(|e| e.row);
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ImportFileDataInvalid,
        ImportResponse {
            imported: 0,
            errors,
        },
        "Import aborted, no rows were imported",
    ))
}

pub(crate) fn imported_response(imported: usize) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        ImportResponse {
            imported,
            errors: Vec::new(),
        },
        "Import completed",
    ))
}

/// 在阻塞线程池中哈希密码
pub(crate) async fn hash_in_background(password: String) -> Result<String, HttpResponse> {
    match tokio::task::spawn_blocking(move || hash_password(&password)).await {
        Ok(Ok(hash)) => Ok(hash),
        Ok(Err(e)) => Err(error_response(&e, None)),
        Err(e) => {
            tracing::error!("Password hashing task failed: {}", e);
            Err(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Password hashing failed",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_aliases_and_blank_rows() {
        let data = "\u{feff}이름,Email\n김민준,kim@school.kr\n,\n이서연,lee@school.kr\n";
        let sheet = CsvSheet::parse(data.as_bytes()).expect("parse");
        assert!(sheet.require(&["name", "이름"]).is_ok());
        assert!(sheet.require(&["email", "이메일"]).is_ok());
        assert_eq!(sheet.len(), 2);

        let rows: Vec<_> = sheet.rows().map(|r| (r.row_num, r.text(&["name", "이름"]))).collect();
        assert_eq!(rows, vec![(2, "김민준".to_string()), (4, "이서연".to_string())]);
    }

    #[test]
    fn test_account_row_reports_first_bad_field() {
        assert!(validate_account_row(2, "kim@school.kr", "김민준", None, "Schoolmate7x").is_none());
        let err = validate_account_row(3, "not-an-email", "", None, "short").expect("invalid");
        assert_eq!(err.row, 3);
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_duplicates_in_file() {
        let keys = [(2, "T1"), (3, "T2"), (4, "T1"), (5, "T1")];
        let errors = duplicates_in_file(keys, "code", "Duplicate code in file");
        let rows: Vec<_> = errors.iter().map(|e| e.row).collect();
        assert_eq!(rows, vec![4, 5]);
    }

    #[test]
    fn test_missing_column_uses_first_alias() {
        let sheet = CsvSheet::parse(b"email\na@b.kr\n").expect("parse");
        let err = sheet.require(&["code", "사번"]).unwrap_err();
        assert!(matches!(err, ImportParseError::MissingColumn(ref c) if c == "code"));
    }

    #[test]
    fn test_cell_errors_collect_per_row() {
        let sheet = CsvSheet::parse(b"grade,start\nfirst,2025-13-01\n").expect("parse");
        let mut row = sheet.rows().next().expect("row");
        assert_eq!(row.parse::<i32>(&["grade"], "Must be a number"), None);
        assert_eq!(row.date(&["start"]), None);
        let errors = row.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.row == 2));
    }
}
