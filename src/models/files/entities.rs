use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已上传的文件
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct File {
    // 存储文件名（随机生成）
    pub stored_name: String,
    // 原始文件名
    pub original_name: String,
    // 文件大小（字节）
    pub file_size: i64,
    pub file_type: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub user_id: i64,
}
