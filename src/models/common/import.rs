use serde::Serialize;
use ts_rs::TS;

/// 导入失败的行（行号从 2 开始，第一行为表头）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportRowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/import.ts")]
pub struct ImportResponse {
    pub imported: usize,
    pub errors: Vec<ImportRowError>,
}
