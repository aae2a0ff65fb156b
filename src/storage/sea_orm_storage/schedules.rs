use chrono::{Datelike, NaiveDate};

use super::SeaOrmStorage;
use crate::entity::teacher_schedules::{ActiveModel, Column, Entity as TeacherSchedules, Model};
use crate::errors::{Result, SchoolMateError};
use crate::models::schedules::{
    entities::{DayOfWeek, RepeatType, TeacherSchedule},
    requests::{CreateScheduleRequest, UpdateScheduleRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

/// 周期课表不能与同一教师同一天同一节次的课表重复
async fn ensure_no_conflict<C: ConnectionTrait>(
    db: &C,
    teacher_id: i64,
    day: DayOfWeek,
    period: i32,
    repeat_type: RepeatType,
    exclude_id: Option<i64>,
) -> Result<()> {
    if !repeat_type.is_recurring() {
        return Ok(());
    }
    let mut select = TeacherSchedules::find()
        .filter(Column::TeacherInfoId.eq(teacher_id))
        .filter(Column::DayOfWeek.eq(day.as_str()))
        .filter(Column::Period.eq(period));
    if let Some(id) = exclude_id {
        select = select.filter(Column::Id.ne(id));
    }
    let count = select
        .count(db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("查询课表失败: {e}")))?;
    if count > 0 {
        return Err(SchoolMateError::conflict(format!(
            "A schedule already exists on {} period {period}",
            day.label()
        )));
    }
    Ok(())
}

fn into_sorted(models: Vec<Model>) -> Vec<TeacherSchedule> {
    let mut schedules: Vec<TeacherSchedule> = models.into_iter().map(|m| m.into_schedule()).collect();
    schedules.sort_by(|a, b| {
        a.day_of_week
            .cmp(&b.day_of_week)
            .then_with(|| a.period.cmp(&b.period))
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    schedules
}

impl SeaOrmStorage {
    /// 按星期、节次排序
    pub async fn list_schedules_impl(&self, teacher_id: i64) -> Result<Vec<TeacherSchedule>> {
        let models = TeacherSchedules::find()
            .filter(Column::TeacherInfoId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询课表失败: {e}")))?;
        Ok(into_sorted(models))
    }

    pub async fn list_schedules_by_day_impl(
        &self,
        teacher_id: i64,
        day: DayOfWeek,
    ) -> Result<Vec<TeacherSchedule>> {
        let models = TeacherSchedules::find()
            .filter(Column::TeacherInfoId.eq(teacher_id))
            .filter(Column::DayOfWeek.eq(day.as_str()))
            .order_by_asc(Column::Period)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询课表失败: {e}")))?;
        Ok(into_sorted(models))
    }

    /// 当天的周期课表与当天日期的单次课表，周末为空
    pub async fn list_schedules_on_date_impl(
        &self,
        teacher_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TeacherSchedule>> {
        let Some(day) = DayOfWeek::from_weekday(date.weekday()) else {
            return Ok(Vec::new());
        };

        let models = TeacherSchedules::find()
            .filter(Column::TeacherInfoId.eq(teacher_id))
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::RepeatType.ne(RepeatType::Once.as_str()))
                            .add(Column::DayOfWeek.eq(day.as_str())),
                    )
                    .add(
                        Condition::all()
                            .add(Column::RepeatType.eq(RepeatType::Once.as_str()))
                            .add(Column::SpecificDate.eq(date)),
                    ),
            )
            .order_by_asc(Column::Period)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询课表失败: {e}")))?;
        Ok(into_sorted(models))
    }

    pub async fn get_schedule_by_id_impl(&self, id: i64) -> Result<Option<TeacherSchedule>> {
        let model = TeacherSchedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询课表失败: {e}")))?;
        Ok(model.map(|m| m.into_schedule()))
    }

    pub async fn create_schedule_impl(
        &self,
        teacher_id: i64,
        req: CreateScheduleRequest,
    ) -> Result<TeacherSchedule> {
        let repeat_type = req.repeat_type.unwrap_or(RepeatType::Weekly);
        ensure_no_conflict(
            &self.db,
            teacher_id,
            req.day_of_week,
            req.period,
            repeat_type,
            None,
        )
        .await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            teacher_info_id: Set(teacher_id),
            day_of_week: Set(req.day_of_week.to_string()),
            period: Set(req.period),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            subject_name: Set(req.subject_name),
            class_name: Set(req.class_name),
            location: Set(req.location),
            repeat_type: Set(repeat_type.to_string()),
            specific_date: Set(req.specific_date),
            memo: Set(req.memo),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SchoolMateError::database_operation(format!("创建课表失败: {e}")))?;
        Ok(model.into_schedule())
    }

    /// 合并后的星期、节次、重复方式重新做冲突检查（排除自身）
    pub async fn update_schedule_impl(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<TeacherSchedule>> {
        let Some(existing) = self.get_schedule_by_id_impl(id).await? else {
            return Ok(None);
        };

        let repeat_type = update.repeat_type.unwrap_or(existing.repeat_type);
        ensure_no_conflict(
            &self.db,
            existing.teacher_id,
            update.day_of_week.unwrap_or(existing.day_of_week),
            update.period.unwrap_or(existing.period),
            repeat_type,
            Some(id),
        )
        .await?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(day) = update.day_of_week {
            model.day_of_week = Set(day.to_string());
        }
        if let Some(period) = update.period {
            model.period = Set(period);
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time);
        }
        if let Some(subject_name) = update.subject_name {
            model.subject_name = Set(subject_name);
        }
        if let Some(class_name) = update.class_name {
            model.class_name = Set(Some(class_name));
        }
        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }
        if let Some(repeat_type) = update.repeat_type {
            model.repeat_type = Set(repeat_type.to_string());
        }
        // 周期课表不保留具体日期
        if repeat_type.is_recurring() {
            model.specific_date = Set(None);
        } else if let Some(specific_date) = update.specific_date {
            model.specific_date = Set(Some(specific_date));
        }
        if let Some(memo) = update.memo {
            model.memo = Set(Some(memo));
        }

        let model = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新课表失败: {e}")))?;
        Ok(Some(model.into_schedule()))
    }

    pub async fn delete_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = TeacherSchedules::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除课表失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
