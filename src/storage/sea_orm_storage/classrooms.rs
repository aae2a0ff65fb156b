use std::collections::HashMap;

use super::SeaOrmStorage;
use super::users::load_users_by_ids;
use crate::entity::classroom_histories::{
    ActiveModel as HistoryActiveModel, Column as HistoryColumn, Entity as ClassroomHistories,
};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms, Model};
use crate::entity::student_assignments::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn, Entity as StudentAssignments,
};
use crate::entity::student_infos::{Column as StudentColumn, Entity as StudentInfos};
use crate::entity::teacher_infos::{Column as TeacherColumn, Entity as TeacherInfos};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    PaginationInfo, PaginationQuery,
    classrooms::{
        entities::{
            Classroom, ClassroomActionType, ClassroomHistory, ClassroomStatus, ClassroomStudent,
            classroom_display_name, sort_roster,
        },
        requests::{ClassroomImportRow, ClassroomListQuery, NewClassroom, UpdateClassroomRequest},
        responses::{ClassroomAssignResult, ClassroomImportResult, ClassroomListResponse},
    },
    students::entities::StudentStatus,
};
use rand::seq::SliceRandom;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// 班级中下一个出席号（当前最大值 + 1）
pub(super) async fn next_attendance_num<C: ConnectionTrait>(db: &C, classroom_id: i64) -> Result<i32> {
    let max_num = StudentAssignments::find()
        .filter(AssignmentColumn::ClassroomId.eq(classroom_id))
        .select_only()
        .column_as(AssignmentColumn::AttendanceNum.max(), "max_num")
        .into_tuple::<Option<i32>>()
        .one(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询最大出席号失败: {e}")))?
        .flatten()
        .unwrap_or(0);
    Ok(max_num + 1)
}

/// 写入班级变更记录
pub(super) async fn record_history<C: ConnectionTrait>(
    db: &C,
    classroom_id: i64,
    action: ClassroomActionType,
    description: String,
    created_by: &str,
) -> Result<()> {
    HistoryActiveModel {
        classroom_id: Set(classroom_id),
        action_type: Set(action.to_string()),
        description: Set(description),
        created_by: Set(created_by.to_string()),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("写入班级记录失败: {e}")))?;
    Ok(())
}

/// 同一学年内年级与班号不能重复
async fn ensure_classroom_unique<C: ConnectionTrait>(
    db: &C,
    school_year: i32,
    grade: i32,
    class_num: i32,
    exclude_id: Option<i64>,
) -> Result<()> {
    let mut select = Classrooms::find()
        .filter(Column::SchoolYear.eq(school_year))
        .filter(Column::Grade.eq(grade))
        .filter(Column::ClassNum.eq(class_num));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }
    let count = select
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?;
    if count > 0 {
        return Err(SchoolMateError::conflict(format!(
            "{school_year}学年 {} already exists",
            classroom_display_name(grade, class_num)
        )));
    }
    Ok(())
}

async fn ensure_teacher_exists<C: ConnectionTrait>(db: &C, teacher_id: i64) -> Result<()> {
    TeacherInfos::find_by_id(teacher_id)
        .one(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?
        .ok_or_else(|| SchoolMateError::not_found(format!("Teacher {teacher_id} not found")))?;
    Ok(())
}

async fn find_classroom<C: ConnectionTrait>(db: &C, id: i64) -> Result<Model> {
    Classrooms::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
        .ok_or_else(|| SchoolMateError::not_found(format!("Classroom {id} not found")))
}

/// 学生 ID -> 姓名
pub(super) async fn load_student_names<C: ConnectionTrait>(
    db: &C,
    student_ids: &[i64],
) -> Result<HashMap<i64, String>> {
    if student_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let infos = StudentInfos::find()
        .filter(StudentColumn::Id.is_in(student_ids.iter().copied()))
        .all(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
    let users = load_users_by_ids(db, infos.iter().map(|s| s.user_id)).await?;
    Ok(infos
        .into_iter()
        .filter_map(|s| users.get(&s.user_id).map(|u| (s.id, u.name.clone())))
        .collect())
}

/// 补齐班主任姓名与学生人数
async fn assemble_classrooms<C: ConnectionTrait>(db: &C, models: Vec<Model>) -> Result<Vec<Classroom>> {
    let ids: Vec<i64> = models.iter().map(|c| c.id).collect();
    let mut counts: HashMap<i64, i64> = HashMap::new();
    if !ids.is_empty() {
        let rows = StudentAssignments::find()
            .filter(AssignmentColumn::ClassroomId.is_in(ids))
            .select_only()
            .column(AssignmentColumn::ClassroomId)
            .into_tuple::<i64>()
            .all(db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计班级人数失败: {e}")))?;
        for classroom_id in rows {
            *counts.entry(classroom_id).or_default() += 1;
        }
    }

    let teacher_ids: Vec<i64> = models.iter().filter_map(|c| c.homeroom_teacher_id).collect();
    let mut teacher_names: HashMap<i64, String> = HashMap::new();
    if !teacher_ids.is_empty() {
        let teachers = TeacherInfos::find()
            .filter(TeacherColumn::Id.is_in(teacher_ids))
            .all(db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询教师失败: {e}")))?;
        let users = load_users_by_ids(db, teachers.iter().map(|t| t.user_id)).await?;
        for teacher in teachers {
            if let Some(user) = users.get(&teacher.user_id) {
                teacher_names.insert(teacher.id, user.name.clone());
            }
        }
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let name = m
                .homeroom_teacher_id
                .and_then(|id| teacher_names.get(&id).cloned());
            let count = counts.get(&m.id).copied().unwrap_or(0);
            m.into_classroom(name, count)
        })
        .collect())
}

/// 在事务中把学生分配到班级
///
/// 已在本班的跳过；同学年在其他班的移入并重新编号；其余新建分班。
async fn assign_in_txn<C: ConnectionTrait>(
    db: &C,
    classroom: &Model,
    student_ids: &[i64],
    actor: &str,
) -> Result<ClassroomAssignResult> {
    let mut unique_ids: Vec<i64> = Vec::with_capacity(student_ids.len());
    for id in student_ids {
        if !unique_ids.contains(id) {
            unique_ids.push(*id);
        }
    }

    let names = load_student_names(db, &unique_ids).await?;
    if let Some(missing) = unique_ids.iter().find(|id| !names.contains_key(id)) {
        return Err(SchoolMateError::not_found(format!("Student {missing} not found")));
    }

    let mut result = ClassroomAssignResult::default();
    let mut next_num = next_attendance_num(db, classroom.id).await?;
    let class_name = classroom_display_name(classroom.grade, classroom.class_num);

    for student_id in unique_ids {
        let name = names.get(&student_id).cloned().unwrap_or_default();
        let existing = StudentAssignments::find()
            .filter(AssignmentColumn::StudentInfoId.eq(student_id))
            .filter(AssignmentColumn::SchoolYear.eq(classroom.school_year))
            .one(db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询分班信息失败: {e}")))?;

        match existing {
            Some(assignment) if assignment.classroom_id == classroom.id => {
                result.skipped += 1;
            }
            Some(assignment) => {
                let from_id = assignment.classroom_id;
                AssignmentActiveModel {
                    id: Set(assignment.id),
                    classroom_id: Set(classroom.id),
                    attendance_num: Set(Some(next_num)),
                    ..Default::default()
                }
                .update(db)
                .await
                .map_err(|e| SchoolMateError::database_operation(format!("移动学生失败: {e}")))?;
                next_num += 1;
                result.moved += 1;

                record_history(
                    db,
                    from_id,
                    ClassroomActionType::TransferOut,
                    format!("{name} → {class_name}"),
                    actor,
                )
                .await?;
                record_history(
                    db,
                    classroom.id,
                    ClassroomActionType::AssignStudent,
                    format!("{name} 배정 (이동)"),
                    actor,
                )
                .await?;
            }
            None => {
                AssignmentActiveModel {
                    student_info_id: Set(student_id),
                    school_year: Set(classroom.school_year),
                    classroom_id: Set(classroom.id),
                    attendance_num: Set(Some(next_num)),
                    ..Default::default()
                }
                .insert(db)
                .await
                .map_err(|e| SchoolMateError::database_operation(format!("分配学生失败: {e}")))?;
                next_num += 1;
                result.assigned += 1;

                record_history(
                    db,
                    classroom.id,
                    ClassroomActionType::AssignStudent,
                    format!("{name} 배정"),
                    actor,
                )
                .await?;
            }
        }
    }

    Ok(result)
}

/// 新建班级并写入创建记录
async fn insert_classroom<C: ConnectionTrait>(
    db: &C,
    new: NewClassroom,
    actor: &str,
    action: &str,
) -> Result<Model> {
    ensure_classroom_unique(db, new.school_year, new.grade, new.class_num, None).await?;
    if let Some(teacher_id) = new.homeroom_teacher_id {
        ensure_teacher_exists(db, teacher_id).await?;
    }

    let now = chrono::Utc::now().timestamp();
    let model = ActiveModel {
        school_year: Set(new.school_year),
        grade: Set(new.grade),
        class_num: Set(new.class_num),
        homeroom_teacher_id: Set(new.homeroom_teacher_id),
        status: Set(ClassroomStatus::Active.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("创建班级失败: {e}")))?;

    record_history(
        db,
        model.id,
        ClassroomActionType::Create,
        format!(
            "{}학년도 {} {action}",
            model.school_year,
            classroom_display_name(model.grade, model.class_num)
        ),
        actor,
    )
    .await?;
    Ok(model)
}

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_classroom_impl(&self, new: NewClassroom, actor: &str) -> Result<Classroom> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let model = insert_classroom(&txn, new, actor, "생성").await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        assemble_classrooms(&self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| SchoolMateError::not_found("Classroom not found after creation"))
    }

    /// CSV 批量导入班级
    ///
    /// 班级不存在时新建，指定教师工号时设为班主任，学号按分班规则分配。
    /// 找不到的学号跳过并汇总返回，其余任何错误整体回滚。
    pub async fn import_classrooms_impl(
        &self,
        rows: Vec<ClassroomImportRow>,
        actor: &str,
    ) -> Result<ClassroomImportResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        let mut result = ClassroomImportResult::default();
        for row in rows {
            let homeroom_teacher_id = match row.teacher_code.as_deref() {
                Some(code) => Some(
                    TeacherInfos::find()
                        .filter(TeacherColumn::Code.eq(code))
                        .one(&txn)
                        .await
                        .map_err(|e| {
                            SchoolMateError::database_operation(format!("查询教师失败: {e}"))
                        })?
                        .ok_or_else(|| {
                            SchoolMateError::not_found(format!("Teacher code '{code}' not found"))
                        })?
                        .id,
                ),
                None => None,
            };

            let existing = Classrooms::find()
                .filter(Column::SchoolYear.eq(row.school_year))
                .filter(Column::Grade.eq(row.grade))
                .filter(Column::ClassNum.eq(row.class_num))
                .one(&txn)
                .await
                .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?;

            let classroom = match existing {
                Some(model) => {
                    if let Some(teacher_id) = homeroom_teacher_id
                        && model.homeroom_teacher_id != Some(teacher_id)
                    {
                        ActiveModel {
                            id: Set(model.id),
                            homeroom_teacher_id: Set(Some(teacher_id)),
                            updated_at: Set(chrono::Utc::now().timestamp()),
                            ..Default::default()
                        }
                        .update(&txn)
                        .await
                        .map_err(|e| {
                            SchoolMateError::database_operation(format!("更新班级失败: {e}"))
                        })?;
                        record_history(
                            &txn,
                            model.id,
                            ClassroomActionType::Update,
                            "담임 지정 (CSV)".to_string(),
                            actor,
                        )
                        .await?;
                    }
                    model
                }
                None => {
                    let new = NewClassroom {
                        school_year: row.school_year,
                        grade: row.grade,
                        class_num: row.class_num,
                        homeroom_teacher_id,
                    };
                    result.created += 1;
                    insert_classroom(&txn, new, actor, "CSV 일괄 생성").await?
                }
            };
            result.classrooms += 1;

            let mut student_ids = Vec::with_capacity(row.student_codes.len());
            for code in row.student_codes {
                let found = StudentInfos::find()
                    .filter(StudentColumn::Code.eq(code.as_str()))
                    .one(&txn)
                    .await
                    .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
                match found {
                    Some(student) => student_ids.push(student.id),
                    None => result.unknown_student_codes.push(code),
                }
            }
            if !student_ids.is_empty() {
                let assigned = assign_in_txn(&txn, &classroom, &student_ids, actor).await?;
                result.assigned += assigned.assigned;
                result.moved += assigned.moved;
                result.skipped += assigned.skipped;
            }
        }

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(result)
    }

    pub async fn get_classroom_by_id_impl(&self, id: i64) -> Result<Option<Classroom>> {
        let model = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?;
        match model {
            Some(model) => Ok(assemble_classrooms(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 分页检索班级：学年降序，年级、班号升序
    pub async fn list_classrooms_with_pagination_impl(
        &self,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Classrooms::find();
        if let Some(year) = query.school_year {
            select = select.filter(Column::SchoolYear.eq(year));
        }
        if let Some(grade) = query.grade {
            select = select.filter(Column::Grade.eq(grade));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let paginator = select
            .order_by_desc(Column::SchoolYear)
            .order_by_asc(Column::Grade)
            .order_by_asc(Column::ClassNum)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级页数失败: {e}")))?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(ClassroomListResponse {
            items: assemble_classrooms(&self.db, models).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新班级：年级/班号变化时重新检查唯一性
    pub async fn update_classroom_impl(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
        actor: &str,
    ) -> Result<Option<Classroom>> {
        let Some(existing) = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(None);
        };

        let grade = update.grade.unwrap_or(existing.grade);
        let class_num = update.class_num.unwrap_or(existing.class_num);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        if grade != existing.grade || class_num != existing.class_num {
            ensure_classroom_unique(&txn, existing.school_year, grade, class_num, Some(id)).await?;
        }

        let mut changes: Vec<String> = Vec::new();
        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if grade != existing.grade || class_num != existing.class_num {
            model.grade = Set(grade);
            model.class_num = Set(class_num);
            changes.push(format!(
                "{} → {}",
                classroom_display_name(existing.grade, existing.class_num),
                classroom_display_name(grade, class_num)
            ));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
            changes.push(format!("상태: {}", status.label()));
        }
        if update.clear_homeroom_teacher {
            model.homeroom_teacher_id = Set(None);
            changes.push("담임 해제".to_string());
        } else if let Some(teacher_id) = update.homeroom_teacher_id {
            ensure_teacher_exists(&txn, teacher_id).await?;
            model.homeroom_teacher_id = Set(Some(teacher_id));
            changes.push("담임 지정".to_string());
        }

        model
            .update(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新班级失败: {e}")))?;

        if !changes.is_empty() {
            record_history(
                &txn,
                id,
                ClassroomActionType::Update,
                changes.join(", "),
                actor,
            )
            .await?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_classroom_by_id_impl(id).await
    }

    /// 删除班级：仍有班主任或学生时拒绝
    pub async fn delete_classroom_impl(&self, id: i64) -> Result<bool> {
        let Some(existing) = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(false);
        };

        if existing.homeroom_teacher_id.is_some() {
            return Err(SchoolMateError::invalid_state(
                "Classroom still has a homeroom teacher",
            ));
        }
        let students = StudentAssignments::find()
            .filter(AssignmentColumn::ClassroomId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计班级人数失败: {e}")))?;
        if students > 0 {
            return Err(SchoolMateError::invalid_state(format!(
                "Classroom still has {students} students"
            )));
        }

        let result = Classrooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除班级失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }

    /// 班级学生名单（出席号优先，其次姓名）
    pub async fn list_classroom_students_impl(&self, id: i64) -> Result<Vec<ClassroomStudent>> {
        let rows = StudentAssignments::find()
            .filter(AssignmentColumn::ClassroomId.eq(id))
            .find_also_related(StudentInfos)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级学生失败: {e}")))?;

        let users = load_users_by_ids(
            &self.db,
            rows.iter()
                .filter_map(|(_, info)| info.as_ref().map(|s| s.user_id)),
        )
        .await?;

        let mut students: Vec<ClassroomStudent> = rows
            .into_iter()
            .filter_map(|(assignment, info)| {
                let info = info?;
                let user = users.get(&info.user_id)?;
                Some(ClassroomStudent {
                    assignment_id: assignment.id,
                    student_id: info.id,
                    attendance_num: assignment.attendance_num,
                    name: user.name.clone(),
                    code: info.code,
                    status: info
                        .status
                        .parse::<StudentStatus>()
                        .unwrap_or(StudentStatus::Enrolled),
                })
            })
            .collect();
        sort_roster(&mut students);
        Ok(students)
    }

    /// 班级变更记录（最新在前）
    pub async fn list_classroom_histories_impl(&self, id: i64) -> Result<Vec<ClassroomHistory>> {
        let rows = ClassroomHistories::find()
            .filter(HistoryColumn::ClassroomId.eq(id))
            .order_by_desc(HistoryColumn::CreatedAt)
            .order_by_desc(HistoryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级记录失败: {e}")))?;
        Ok(rows.into_iter().map(|h| h.into_history()).collect())
    }

    pub async fn assign_students_impl(
        &self,
        id: i64,
        student_ids: Vec<i64>,
        actor: &str,
    ) -> Result<ClassroomAssignResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let classroom = find_classroom(&txn, id).await?;
        let result = assign_in_txn(&txn, &classroom, &student_ids, actor).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(result)
    }

    /// 随机分配 N 名该学年尚未分班的在读学生
    pub async fn assign_random_students_impl(
        &self,
        id: i64,
        count: u32,
        actor: &str,
    ) -> Result<ClassroomAssignResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let classroom = find_classroom(&txn, id).await?;

        let mut candidates = StudentInfos::find()
            .filter(StudentColumn::Status.eq(StudentStatus::Enrolled.as_str()))
            .filter(
                StudentColumn::Id.not_in_subquery(
                    Query::select()
                        .column(AssignmentColumn::StudentInfoId)
                        .from(StudentAssignments)
                        .and_where(AssignmentColumn::SchoolYear.eq(classroom.school_year))
                        .to_owned(),
                ),
            )
            .select_only()
            .column(StudentColumn::Id)
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询待分班学生失败: {e}")))?;

        candidates.shuffle(&mut rand::rng());
        candidates.truncate(count as usize);

        let result = assign_in_txn(&txn, &classroom, &candidates, actor).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(result)
    }

    /// 从班级移除学生（删除该学年的分班）
    pub async fn remove_students_impl(
        &self,
        id: i64,
        student_ids: Vec<i64>,
        actor: &str,
    ) -> Result<u64> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        find_classroom(&txn, id).await?;

        let names = load_student_names(&txn, &student_ids).await?;
        let result = StudentAssignments::delete_many()
            .filter(AssignmentColumn::ClassroomId.eq(id))
            .filter(AssignmentColumn::StudentInfoId.is_in(student_ids.iter().copied()))
            .exec(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("移除学生失败: {e}")))?;

        if result.rows_affected > 0 {
            let mut removed: Vec<String> = student_ids
                .iter()
                .filter_map(|sid| names.get(sid).cloned())
                .collect();
            removed.dedup();
            record_history(
                &txn,
                id,
                ClassroomActionType::RemoveStudent,
                format!("{} 제외", removed.join(", ")),
                actor,
            )
            .await?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(result.rows_affected)
    }

    /// 转班：排在目标班级末尾
    pub async fn transfer_student_impl(
        &self,
        id: i64,
        student_id: i64,
        target_id: i64,
        actor: &str,
    ) -> Result<()> {
        if id == target_id {
            return Err(SchoolMateError::validation(
                "Target classroom must differ from the current classroom",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let source = find_classroom(&txn, id).await?;
        let target = find_classroom(&txn, target_id).await?;
        if source.school_year != target.school_year {
            return Err(SchoolMateError::validation(
                "Classrooms belong to different school years",
            ));
        }

        let assignment = StudentAssignments::find()
            .filter(AssignmentColumn::ClassroomId.eq(id))
            .filter(AssignmentColumn::StudentInfoId.eq(student_id))
            .one(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询分班信息失败: {e}")))?
            .ok_or_else(|| SchoolMateError::not_found("Student is not in this classroom"))?;

        let next_num = next_attendance_num(&txn, target_id).await?;
        AssignmentActiveModel {
            id: Set(assignment.id),
            classroom_id: Set(target_id),
            attendance_num: Set(Some(next_num)),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("转班失败: {e}")))?;

        let name = load_student_names(&txn, &[student_id])
            .await?
            .remove(&student_id)
            .unwrap_or_default();
        record_history(
            &txn,
            id,
            ClassroomActionType::TransferOut,
            format!(
                "{name} → {}",
                classroom_display_name(target.grade, target.class_num)
            ),
            actor,
        )
        .await?;
        record_history(
            &txn,
            target_id,
            ClassroomActionType::TransferIn,
            format!(
                "{name} ← {}",
                classroom_display_name(source.grade, source.class_num)
            ),
            actor,
        )
        .await?;

        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(())
    }

    pub async fn bulk_update_classroom_status_impl(
        &self,
        ids: Vec<i64>,
        status: ClassroomStatus,
    ) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = Classrooms::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("批量更新班级状态失败: {e}")))?;
        Ok(result.rows_affected)
    }

    /// 教师在某学年担任班主任的班级
    pub async fn find_homeroom_classroom_impl(
        &self,
        teacher_id: i64,
        school_year: i32,
    ) -> Result<Option<Classroom>> {
        let model = Classrooms::find()
            .filter(Column::HomeroomTeacherId.eq(teacher_id))
            .filter(Column::SchoolYear.eq(school_year))
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?;
        match model {
            Some(model) => Ok(assemble_classrooms(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 教师担任班主任的全部班级 ID
    pub async fn list_homeroom_classroom_ids_impl(&self, teacher_id: i64) -> Result<Vec<i64>> {
        Classrooms::find()
            .filter(Column::HomeroomTeacherId.eq(teacher_id))
            .select_only()
            .column(Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))
    }
}
