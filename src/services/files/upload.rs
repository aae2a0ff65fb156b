use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::SchoolMateError;
use crate::models::ErrorCode;
use crate::models::{ApiResponse, files::responses::FileUploadResponse};
use crate::services::{bad_request, current_user, error_response};
use crate::utils::file_magic::{content_type_for, extension_of};
use crate::utils::validate_magic_bytes;

fn upload_failed(message: &str, e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}", SchoolMateError::file_operation(format!("{message}: {e}")));
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::FileUploadFailed, message))
}

/// 扩展名是否在白名单内（配置项可带或不带点号）
fn is_allowed_extension(allowed_types: &[String], extension: &str) -> bool {
    allowed_types.iter().any(|t| {
        let t = t.trim().to_lowercase();
        t == extension || format!(".{t}") == extension
    })
}

pub async fn handle_upload(
    service: &FileService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let user = match current_user(req) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        return Ok(upload_failed("Failed to create upload directory", e));
    }

    // 文件相关信息
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut extension = String::new();
    let mut stored_name = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            continue;
        }
        if file_uploaded {
            if !stored_name.is_empty() {
                let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
            }
            return Ok(bad_request(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            ));
        }
        file_uploaded = true;

        original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        // 提取扩展名并校验
        extension = match extension_of(&original_name) {
            Some(ext) if is_allowed_extension(allowed_types, &ext) => ext,
            _ => {
                return Ok(bad_request(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                ));
            }
        };

        stored_name = format!("{}{}", Uuid::new_v4().simple(), extension);
        let file_path = format!("{upload_dir}/{stored_name}");
        let mut f = match File::create(&file_path) {
            Ok(file) => file,
            Err(e) => return Ok(upload_failed("Failed to create file", e)),
        };

        let mut total_size: usize = 0;
        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = chunk?;

            // 第一个 chunk 时验证魔术字节
            if first_chunk {
                first_chunk = false;
                if !validate_magic_bytes(&data, &extension) {
                    let _ = fs::remove_file(&file_path);
                    return Ok(bad_request(
                        ErrorCode::FileTypeNotAllowed,
                        "File content does not match its extension",
                    ));
                }
            }

            total_size += data.len();
            if total_size > max_size {
                let _ = fs::remove_file(&file_path);
                return Ok(bad_request(
                    ErrorCode::FileSizeExceeded,
                    format!("File size exceeds the limit of {max_size} bytes"),
                ));
            }
            if let Err(e) = f.write_all(&data) {
                let _ = fs::remove_file(&file_path);
                return Ok(upload_failed("Failed to write file", e));
            }
        }

        if total_size == 0 {
            let _ = fs::remove_file(&file_path);
            return Ok(bad_request(ErrorCode::FileUploadFailed, "Uploaded file is empty"));
        }
        file_size = total_size as i64;
    }

    if !file_uploaded {
        return Ok(bad_request(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        ));
    }

    let storage = service.get_storage(req)?;
    let file_type = content_type_for(&extension);

    match storage
        .upload_file(&stored_name, &original_name, file_size, file_type, user.id)
        .await
    {
        Ok(file) => {
            tracing::info!(
                "User {} uploaded {} as {} ({} bytes)",
                user.id,
                file.original_name,
                file.stored_name,
                file.file_size
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                FileUploadResponse {
                    download_url: format!("/api/v1/files/{}", file.stored_name),
                    stored_name: file.stored_name,
                    file_name: file.original_name,
                    size: file.file_size,
                    content_type: file.file_type,
                    uploaded_at: file.uploaded_at,
                },
                "File uploaded successfully",
            )))
        }
        Err(e) => {
            let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
            Ok(error_response(&e, Some(ErrorCode::FileUploadFailed)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extension_accepts_both_forms() {
        let allowed = vec![".png".to_string(), "JPG".to_string()];
        assert!(is_allowed_extension(&allowed, ".png"));
        assert!(is_allowed_extension(&allowed, ".jpg"));
        assert!(!is_allowed_extension(&allowed, ".gif"));
    }
}
