pub mod import;
pub mod pagination;
pub mod query;
pub mod response;
pub mod string_enum;

pub use import::{ImportResponse, ImportRowError};
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use query::deserialize_optional_from_str;
pub use response::ApiResponse;
