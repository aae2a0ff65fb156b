use std::collections::HashMap;

use super::SeaOrmStorage;
use super::users::load_users_by_ids;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects, Model};
use crate::entity::teacher_infos::{Column as TeacherColumn, Entity as TeacherInfos};
use crate::errors::{Result, SchoolMateError};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

async fn ensure_teacher_exists<C: ConnectionTrait>(db: &C, teacher_id: i64) -> Result<()> {
    let count = TeacherInfos::find_by_id(teacher_id)
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?;
    if count == 0 {
        return Err(SchoolMateError::not_found(format!(
            "Teacher {teacher_id} not found"
        )));
    }
    Ok(())
}

/// 补齐任课教师姓名
async fn assemble_subjects<C: ConnectionTrait>(db: &C, models: Vec<Model>) -> Result<Vec<Subject>> {
    let teacher_ids: Vec<i64> = models.iter().filter_map(|s| s.teacher_info_id).collect();
    let teachers = if teacher_ids.is_empty() {
        Vec::new()
    } else {
        TeacherInfos::find()
            .filter(TeacherColumn::Id.is_in(teacher_ids))
            .all(db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?
    };
    let users = load_users_by_ids(db, teachers.iter().map(|t| t.user_id)).await?;
    let names: HashMap<i64, String> = teachers
        .into_iter()
        .filter_map(|t| users.get(&t.user_id).map(|u| (t.id, u.name.clone())))
        .collect();

    Ok(models
        .into_iter()
        .map(|s| {
            let teacher_name = s.teacher_info_id.and_then(|id| names.get(&id).cloned());
            s.into_subject(teacher_name)
        })
        .collect())
}

impl SeaOrmStorage {
    pub async fn list_subjects_impl(&self, grade: Option<i32>) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();
        if let Some(grade) = grade {
            select = select.filter(Column::Grade.eq(grade));
        }
        let models = select
            .order_by_asc(Column::Grade)
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询科目列表失败: {e}")))?;
        assemble_subjects(&self.db, models).await
    }

    pub async fn get_subject_by_code_impl(&self, code: &str) -> Result<Option<Subject>> {
        let model = Subjects::find_by_id(code.to_string())
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询科目失败: {e}")))?;
        match model {
            Some(model) => Ok(assemble_subjects(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let exists = Subjects::find_by_id(req.code.clone())
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询科目失败: {e}")))?;
        if exists > 0 {
            return Err(SchoolMateError::conflict(format!(
                "Subject '{}' already exists",
                req.code
            )));
        }
        if let Some(teacher_id) = req.teacher_id {
            ensure_teacher_exists(&self.db, teacher_id).await?;
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            grade: Set(req.grade),
            credits: Set(req.credits),
            teacher_info_id: Set(req.teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建科目失败: {e}")))?;

        assemble_subjects(&self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| SchoolMateError::database_operation("创建科目失败"))
    }

    pub async fn update_subject_impl(
        &self,
        code: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let exists = Subjects::find_by_id(code.to_string())
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询科目失败: {e}")))?;
        if exists == 0 {
            return Ok(None);
        }
        if let Some(teacher_id) = update.teacher_id {
            ensure_teacher_exists(&self.db, teacher_id).await?;
        }

        let mut model = ActiveModel {
            code: Set(code.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }
        if let Some(credits) = update.credits {
            model.credits = Set(Some(credits));
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_info_id = Set(Some(teacher_id));
        }
        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_code_impl(code).await
    }

    pub async fn delete_subject_impl(&self, code: &str) -> Result<bool> {
        let result = Subjects::delete_by_id(code.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除科目失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
