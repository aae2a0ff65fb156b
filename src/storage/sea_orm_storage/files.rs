//! 文件存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Column, Entity as Files};
use crate::errors::{Result, SchoolMateError};
use crate::models::files::entities::File;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 上传文件（创建文件记录）
    pub async fn upload_file_impl(
        &self,
        stored_name: &str,
        original_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        let model = ActiveModel {
            stored_name: Set(stored_name.to_string()),
            original_name: Set(original_name.to_string()),
            file_size: Set(file_size),
            file_type: Set(file_type.to_string()),
            user_id: Set(user_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("上传文件记录失败: {e}")))?;

        Ok(model.into_file())
    }

    pub async fn get_file_by_stored_name_impl(&self, stored_name: &str) -> Result<Option<File>> {
        let model = Files::find()
            .filter(Column::StoredName.eq(stored_name))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(model.map(|m| m.into_file()))
    }
}
