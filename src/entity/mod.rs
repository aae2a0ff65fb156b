//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod boards;
pub mod classroom_histories;
pub mod classrooms;
pub mod family_relations;
pub mod files;
pub mod grades;
pub mod notifications;
pub mod parent_infos;
pub mod school_assets;
pub mod school_calendars;
pub mod school_facilities;
pub mod school_meals;
pub mod staff_infos;
pub mod student_assignments;
pub mod student_attendances;
pub mod student_infos;
pub mod subjects;
pub mod system_settings;
pub mod teacher_infos;
pub mod teacher_schedules;
pub mod user_roles;
pub mod users;

use chrono::{DateTime, Utc};

/// 数据库中的秒级时间戳转为 UTC 时间
pub(crate) fn to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
