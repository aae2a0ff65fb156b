use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 当前学年与学期（全局唯一一行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemSetting {
    pub current_school_year: i32,
    pub current_semester: i32,
    // 尚未保存过时为空
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SystemSetting {
    /// 未配置时使用配置文件的默认值
    pub fn from_config() -> Self {
        let config = crate::config::AppConfig::get();
        Self {
            current_school_year: config.school.default_school_year,
            current_semester: config.school.default_semester,
            updated_at: None,
        }
    }
}

/// 仪表盘统计
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct DashboardStats {
    pub school_year: i32,
    pub enrolled_students: u64,
    pub employed_teachers: u64,
    pub employed_staff: u64,
    pub pending_parents: u64,
    pub classrooms: u64,
}
