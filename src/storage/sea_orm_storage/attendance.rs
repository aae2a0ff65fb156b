use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use super::SeaOrmStorage;
use super::classrooms::load_student_names;
use crate::entity::classrooms::Entity as Classrooms;
use crate::entity::student_assignments::{Column as AssignmentColumn, Entity as StudentAssignments};
use crate::entity::student_attendances::{
    ActiveModel, Column, Entity as StudentAttendances, Model,
};
use crate::entity::student_infos::Entity as StudentInfos;
use crate::errors::{Result, SchoolMateError};
use crate::models::attendance::{
    entities::{Attendance, AttendanceStatus},
    requests::{BulkAttendanceRequest, RecordAttendanceRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

async fn assemble_attendances<C: ConnectionTrait>(
    db: &C,
    models: Vec<Model>,
) -> Result<Vec<Attendance>> {
    let mut ids: Vec<i64> = models.iter().map(|a| a.student_info_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let names = load_student_names(db, &ids).await?;
    Ok(models
        .into_iter()
        .map(|a| {
            let name = names.get(&a.student_info_id).cloned().unwrap_or_default();
            a.into_attendance(name)
        })
        .collect())
}

/// 同一学生同一天只保留一条，已存在则覆盖
async fn upsert_attendance<C: ConnectionTrait>(
    db: &C,
    student_id: i64,
    date: NaiveDate,
    status: AttendanceStatus,
    check_in_time: Option<NaiveTime>,
    reason: Option<String>,
) -> Result<Model> {
    let now = chrono::Utc::now().timestamp();
    let existing = StudentAttendances::find()
        .filter(Column::StudentInfoId.eq(student_id))
        .filter(Column::AttendanceDate.eq(date))
        .one(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询出勤失败: {e}")))?;

    match existing {
        Some(existing) => ActiveModel {
            id: Set(existing.id),
            status: Set(status.to_string()),
            check_in_time: Set(check_in_time),
            reason: Set(reason),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("更新出勤失败: {e}"))),
        None => ActiveModel {
            student_info_id: Set(student_id),
            attendance_date: Set(date),
            status: Set(status.to_string()),
            check_in_time: Set(check_in_time),
            reason: Set(reason),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("记录出勤失败: {e}"))),
    }
}

impl SeaOrmStorage {
    pub async fn record_attendance_impl(&self, req: RecordAttendanceRequest) -> Result<Attendance> {
        let exists = StudentInfos::find_by_id(req.student_id)
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询学生失败: {e}")))?;
        if exists == 0 {
            return Err(SchoolMateError::not_found(format!(
                "Student {} not found",
                req.student_id
            )));
        }

        let model = upsert_attendance(
            &self.db,
            req.student_id,
            req.attendance_date,
            req.status,
            req.check_in_time,
            req.reason,
        )
        .await?;
        assemble_attendances(&self.db, vec![model])
            .await?
            .pop()
            .ok_or_else(|| SchoolMateError::database_operation("记录出勤失败"))
    }

    /// 批量记录某班某天的出勤，学生必须分配在该班
    pub async fn bulk_record_attendance_impl(
        &self,
        req: BulkAttendanceRequest,
    ) -> Result<Vec<Attendance>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;

        Classrooms::find_by_id(req.classroom_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                SchoolMateError::not_found(format!("Classroom {} not found", req.classroom_id))
            })?;

        let members: HashSet<i64> = StudentAssignments::find()
            .select_only()
            .column(AssignmentColumn::StudentInfoId)
            .filter(AssignmentColumn::ClassroomId.eq(req.classroom_id))
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级学生失败: {e}")))?
            .into_iter()
            .collect();

        let mut models = Vec::with_capacity(req.records.len());
        for entry in req.records {
            if !members.contains(&entry.student_id) {
                return Err(SchoolMateError::validation(format!(
                    "Student {} is not assigned to classroom {}",
                    entry.student_id, req.classroom_id
                )));
            }
            models.push(
                upsert_attendance(
                    &txn,
                    entry.student_id,
                    req.attendance_date,
                    entry.status,
                    entry.check_in_time,
                    entry.reason,
                )
                .await?,
            );
        }

        let attendances = assemble_attendances(&txn, models).await?;
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(attendances)
    }

    pub async fn list_student_attendance_impl(
        &self,
        student_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        let models = StudentAttendances::find()
            .filter(Column::StudentInfoId.eq(student_id))
            .filter(Column::AttendanceDate.between(start_date, end_date))
            .order_by_asc(Column::AttendanceDate)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询出勤失败: {e}")))?;
        assemble_attendances(&self.db, models).await
    }

    pub async fn list_classroom_attendance_impl(
        &self,
        classroom_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        let student_ids: Vec<i64> = StudentAssignments::find()
            .select_only()
            .column(AssignmentColumn::StudentInfoId)
            .filter(AssignmentColumn::ClassroomId.eq(classroom_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询班级学生失败: {e}")))?;
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = StudentAttendances::find()
            .filter(Column::StudentInfoId.is_in(student_ids))
            .filter(Column::AttendanceDate.eq(date))
            .order_by_asc(Column::StudentInfoId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询出勤失败: {e}")))?;
        assemble_attendances(&self.db, models).await
    }

    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = StudentAttendances::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除出勤失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
