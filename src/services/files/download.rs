use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::path::Path;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::SchoolMateError;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};
use crate::utils::file_magic::{content_type_for, extension_of};

pub async fn handle_download(
    service: &FileService,
    request: &HttpRequest,
    stored_name: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let db_file = match storage.get_file_by_stored_name(&stored_name).await {
        Ok(Some(f)) => f,
        Ok(None) => return Ok(not_found(ErrorCode::FileNotFound, "File not found")),
        Err(e) => return Ok(error_response(&e, None)),
    };

    let config = AppConfig::get();
    let file_path = Path::new(&config.upload.dir).join(&db_file.stored_name);

    let buf = match tokio::fs::read(&file_path).await {
        Ok(buf) => buf,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("File {} is recorded but missing on disk", db_file.stored_name);
            return Ok(not_found(ErrorCode::FileNotFound, "File not found"));
        }
        Err(e) => {
            tracing::error!("{}", SchoolMateError::file_operation(format!("{e}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File read failed",
                )),
            );
        }
    };

    let content_type = extension_of(&db_file.stored_name)
        .map(|ext| content_type_for(&ext))
        .unwrap_or("application/octet-stream");

    // 图片直接内联显示，文件名使用上传时的原始名
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "inline; filename=\"{}\"",
                db_file.original_name.replace('"', "")
            ),
        ))
        .insert_header((header::CACHE_CONTROL, "private, max-age=86400"))
        .body(buf))
}
