use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SchoolMateError;
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 根据错误类型选择通用错误码
    pub fn generic_code(err: &SchoolMateError) -> ErrorCode {
        match err {
            SchoolMateError::Validation(_) | SchoolMateError::DateParse(_) => ErrorCode::BadRequest,
            SchoolMateError::NotFound(_) => ErrorCode::NotFound,
            SchoolMateError::Conflict(_) => ErrorCode::Conflict,
            SchoolMateError::Authentication(_) => ErrorCode::Unauthorized,
            SchoolMateError::Authorization(_) => ErrorCode::Forbidden,
            SchoolMateError::InvalidState(_) => ErrorCode::InvalidState,
            _ => ErrorCode::InternalServerError,
        }
    }

    /// 将业务错误转换为带状态码的 HTTP 响应
    pub fn from_error(err: &SchoolMateError, code: Option<ErrorCode>) -> HttpResponse {
        let code = code.unwrap_or_else(|| Self::generic_code(err));
        HttpResponse::build(err.status_code()).json(Self::error_empty(code, err.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_generic_code_mapping() {
        assert_eq!(
            ApiResponse::generic_code(&SchoolMateError::not_found("x")),
            ErrorCode::NotFound
        );
        assert_eq!(
            ApiResponse::generic_code(&SchoolMateError::conflict("x")),
            ErrorCode::Conflict
        );
        assert_eq!(
            ApiResponse::generic_code(&SchoolMateError::database_operation("x")),
            ErrorCode::InternalServerError
        );
    }

    #[test]
    fn test_from_error_status() {
        let resp = ApiResponse::from_error(&SchoolMateError::invalid_state("busy"), None);
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = ApiResponse::from_error(
            &SchoolMateError::conflict("dup"),
            Some(ErrorCode::StudentCodeAlreadyExists),
        );
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
