use std::collections::HashMap;

use super::SeaOrmStorage;
use super::classrooms::load_student_names;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Model};
use crate::entity::student_infos::Entity as StudentInfos;
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{Result, SchoolMateError};
use crate::models::grades::{
    entities::Grade,
    requests::{GradeListParams, InputGradeRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// 补齐学生姓名与科目名称
async fn assemble_grades<C: ConnectionTrait>(db: &C, models: Vec<Model>) -> Result<Vec<Grade>> {
    let mut student_ids: Vec<i64> = models.iter().map(|g| g.student_info_id).collect();
    student_ids.sort_unstable();
    student_ids.dedup();
    let students = load_student_names(db, &student_ids).await?;

    let mut codes: Vec<String> = models.iter().map(|g| g.subject_code.clone()).collect();
    codes.sort_unstable();
    codes.dedup();
    let subjects: HashMap<String, String> = if codes.is_empty() {
        HashMap::new()
    } else {
        Subjects::find()
            .filter(SubjectColumn::Code.is_in(codes))
            .all(db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询科目失败: {e}")))?
            .into_iter()
            .map(|s| (s.code, s.name))
            .collect()
    };

    Ok(models
        .into_iter()
        .map(|g| {
            let student_name = students.get(&g.student_info_id).cloned().unwrap_or_default();
            let subject_name = subjects.get(&g.subject_code).cloned().unwrap_or_default();
            g.into_grade(student_name, subject_name)
        })
        .collect())
}

impl SeaOrmStorage {
    pub async fn list_grades_impl(&self, params: GradeListParams) -> Result<Vec<Grade>> {
        let mut select = Grades::find();
        if let Some(student_id) = params.student_id {
            select = select.filter(Column::StudentInfoId.eq(student_id));
        }
        if let Some(code) = params.subject_code {
            select = select.filter(Column::SubjectCode.eq(code));
        }
        if let Some(semester) = params.semester {
            select = select.filter(Column::Semester.eq(semester));
        }
        if let Some(grade_year) = params.grade_year {
            select = select.filter(Column::GradeYear.eq(grade_year));
        }

        let models = select
            .order_by_asc(Column::GradeYear)
            .order_by_asc(Column::Semester)
            .order_by_asc(Column::SubjectCode)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询成绩列表失败: {e}")))?;
        assemble_grades(&self.db, models).await
    }

    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let model = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询成绩失败: {e}")))?;
        match model {
            Some(model) => Ok(assemble_grades(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 录入成绩；同一学生/科目/考试类型/学期/学年已有记录时覆盖分数
    pub async fn input_grade_impl(&self, req: InputGradeRequest) -> Result<Grade> {
        let student_exists = StudentInfos::find_by_id(req.student_id)
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
        if student_exists == 0 {
            return Err(SchoolMateError::not_found(format!(
                "Student {} not found",
                req.student_id
            )));
        }
        let subject_exists = Subjects::find_by_id(req.subject_code.clone())
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询科目失败: {e}")))?;
        if subject_exists == 0 {
            return Err(SchoolMateError::not_found(format!(
                "Subject '{}' not found",
                req.subject_code
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let existing = Grades::find()
            .filter(Column::StudentInfoId.eq(req.student_id))
            .filter(Column::SubjectCode.eq(req.subject_code.as_str()))
            .filter(Column::TestType.eq(req.test_type.as_str()))
            .filter(Column::Semester.eq(req.semester))
            .filter(Column::GradeYear.eq(req.grade_year))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询成绩失败: {e}")))?;

        let model = match existing {
            Some(existing) => ActiveModel {
                id: Set(existing.id),
                score: Set(req.score),
                updated_at: Set(now),
                ..Default::default()
            }
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新成绩失败: {e}")))?,
            None => ActiveModel {
                student_info_id: Set(req.student_id),
                subject_code: Set(req.subject_code),
                test_type: Set(req.test_type.to_string()),
                semester: Set(req.semester),
                grade_year: Set(req.grade_year),
                score: Set(req.score),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("录入成绩失败: {e}")))?,
        };

        assemble_grades(&self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| SchoolMateError::database_operation("录入成绩失败"))
    }

    pub async fn update_grade_score_impl(&self, id: i64, score: f64) -> Result<Option<Grade>> {
        let exists = Grades::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询成绩失败: {e}")))?;
        if exists == 0 {
            return Ok(None);
        }

        ActiveModel {
            id: Set(id),
            score: Set(score),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除成绩失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
