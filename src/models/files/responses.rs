use serde::Serialize;
use ts_rs::TS;

#[derive(Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct FileUploadResponse {
    /// 存储文件名，用于下载或写入 profile_image / image_filename
    pub stored_name: String,
    /// 原始文件名
    pub file_name: String,
    /// 文件大小(字节)
    pub size: i64,
    pub content_type: String,
    pub download_url: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
