//! 安全的路径参数提取器
//!
//! 路径中的 ID 必须是正整数，编码类参数只允许有限字符集，
//! 否则直接返回 400 与统一响应结构。

use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

static CODE_PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,32}$").expect("Invalid code param regex"));

static FILE_NAME_PARAM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{1,64}(\.[A-Za-z0-9]{1,8})?$").expect("Invalid file name regex")
});

fn bad_request(message: String) -> actix_web::Error {
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 读取并校验正整数路径参数
pub fn parse_positive_id(req: &HttpRequest, param: &str) -> Result<i64, actix_web::Error> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| bad_request(format!("Missing path parameter '{param}'")))?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_request(format!(
            "Path parameter '{param}' must be a positive integer"
        ))),
    }
}

/// 读取并按正则校验字符串路径参数
pub fn parse_checked_str(
    req: &HttpRequest,
    param: &str,
    pattern: &Regex,
) -> Result<String, actix_web::Error> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| bad_request(format!("Missing path parameter '{param}'")))?;
    if pattern.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(bad_request(format!("Path parameter '{param}' is invalid")))
    }
}

/// 定义从路径中提取正整数 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                std::future::ready(
                    $crate::utils::extractor::parse_positive_id(req, $param).map($name),
                )
            }
        }
    };
}

/// 定义从路径中提取受限字符串的提取器
macro_rules! define_safe_str_extractor {
    ($name:ident, $param:literal, $re:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub String);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                std::future::ready(parse_checked_str(req, $param, &$re).map($name))
            }
        }
    };
}

crate::define_safe_i64_extractor!(SafeIDI64, "id");
crate::define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
crate::define_safe_i64_extractor!(SafeClassroomIdI64, "classroom_id");
define_safe_str_extractor!(SafeCode, "code", CODE_PARAM_RE);
define_safe_str_extractor!(SafeFileName, "file_name", FILE_NAME_PARAM_RE);

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::FromRequest;
    use actix_web::test::TestRequest;

    fn request(param: &'static str, value: &'static str) -> HttpRequest {
        TestRequest::default().param(param, value).to_http_request()
    }

    #[actix_web::test]
    async fn test_positive_id() {
        let req = request("id", "15");
        let id = SafeIDI64::extract(&req).await.expect("valid id");
        assert_eq!(id.0, 15);
    }

    #[actix_web::test]
    async fn test_rejects_bad_ids() {
        for value in ["0", "-3", "abc"] {
            let req = request("id", value);
            assert!(SafeIDI64::extract(&req).await.is_err(), "{value}");
        }
    }

    #[actix_web::test]
    async fn test_code_and_file_name() {
        let req = request("code", "KOR-101");
        assert_eq!(SafeCode::extract(&req).await.expect("valid").0, "KOR-101");

        let req = request("file_name", "../etc/passwd");
        assert!(SafeFileName::extract(&req).await.is_err());

        // 缺少参数
        let req = TestRequest::default().to_http_request();
        assert!(SafeIDI64::extract(&req).await.is_err());
    }
}
