//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及对应的 HTTP 状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_schoolmate_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolMateError {
            $($variant(String),)*
        }

        impl SchoolMateError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolMateError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolMateError::$variant(_) => $type_name,)*
                }
            }

            /// 对应的 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(SchoolMateError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolMateError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolMateError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolMateError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_schoolmate_errors! {
    CacheConnection("E001", "Cache Connection Error", INTERNAL_SERVER_ERROR),
    CachePluginNotFound("E002", "Cache Plugin Not Found", INTERNAL_SERVER_ERROR),
    DatabaseConfig("E003", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E004", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E005", "Database Operation Error", INTERNAL_SERVER_ERROR),
    FileOperation("E006", "File Operation Error", INTERNAL_SERVER_ERROR),
    Validation("E007", "Validation Error", BAD_REQUEST),
    NotFound("E008", "Resource Not Found", NOT_FOUND),
    Serialization("E009", "Serialization Error", INTERNAL_SERVER_ERROR),
    StoragePluginNotFound("E010", "Storage Plugin Not Found", INTERNAL_SERVER_ERROR),
    DateParse("E011", "Date Parse Error", BAD_REQUEST),
    Authentication("E012", "Authentication Error", UNAUTHORIZED),
    Authorization("E013", "Authorization Error", FORBIDDEN),
    Conflict("E014", "Resource Conflict", CONFLICT),
    InvalidState("E015", "Invalid State", UNPROCESSABLE_ENTITY),
}

impl SchoolMateError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否属于客户端错误（4xx）
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl fmt::Display for SchoolMateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolMateError {}

impl From<sea_orm::DbErr> for SchoolMateError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束冲突映射为 Conflict，便于上层返回 409
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                SchoolMateError::Conflict(detail)
            }
            _ => SchoolMateError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for SchoolMateError {
    fn from(err: std::io::Error) -> Self {
        SchoolMateError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolMateError {
    fn from(err: serde_json::Error) -> Self {
        SchoolMateError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolMateError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolMateError::DateParse(err.to_string())
    }
}

impl From<csv::Error> for SchoolMateError {
    fn from(err: csv::Error) -> Self {
        SchoolMateError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolMateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolMateError::cache_connection("test").code(), "E001");
        assert_eq!(SchoolMateError::database_config("test").code(), "E003");
        assert_eq!(SchoolMateError::validation("test").code(), "E007");
        assert_eq!(SchoolMateError::authentication("test").code(), "E012");
        assert_eq!(SchoolMateError::conflict("test").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolMateError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SchoolMateError::invalid_state("test").error_type(),
            "Invalid State"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            SchoolMateError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SchoolMateError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            SchoolMateError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            SchoolMateError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(SchoolMateError::validation("x").is_client_error());
        assert!(!SchoolMateError::file_operation("x").is_client_error());
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolMateError::validation("Invalid semester");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid semester"));
    }
}
