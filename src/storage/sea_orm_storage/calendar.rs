use chrono::NaiveDate;

use super::SeaOrmStorage;
use crate::entity::school_calendars::{ActiveModel, Column, Entity as SchoolCalendars, Model};
use crate::errors::{Result, SchoolMateError};
use crate::models::calendar::{
    entities::{CalendarEvent, EventType},
    requests::{CreateEventRequest, UpdateEventRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

/// 与 [first, last] 有交集的日程（均为闭区间）
///
/// 没有结束日期的日程只在开始日期落在区间内时计入。
fn overlaps_inclusive(first: NaiveDate, last: NaiveDate) -> Condition {
    Condition::all().add(Column::StartDate.lte(last)).add(
        Condition::any().add(Column::EndDate.gte(first)).add(
            Condition::all()
                .add(Column::EndDate.is_null())
                .add(Column::StartDate.gte(first)),
        ),
    )
}

/// 日历组件的半开区间 [start, end)：start_date < end 且 coalesce(end_date, start_date) >= start
fn overlaps_feed(start: NaiveDate, end: NaiveDate) -> Condition {
    Condition::all().add(Column::StartDate.lt(end)).add(
        Condition::any().add(Column::EndDate.gte(start)).add(
            Condition::all()
                .add(Column::EndDate.is_null())
                .add(Column::StartDate.gte(start)),
        ),
    )
}

async fn insert_event<C: ConnectionTrait>(db: &C, req: CreateEventRequest) -> Result<Model> {
    let now = chrono::Utc::now().timestamp();
    ActiveModel {
        title: Set(req.title),
        start_date: Set(req.start_date),
        end_date: Set(req.end_date),
        event_type: Set(req.event_type.to_string()),
        target_grade: Set(req.target_grade),
        description: Set(req.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| SchoolMateError::database_operation(format!("创建日程失败: {e}")))
}

impl SeaOrmStorage {
    /// 指定年级时同时包含全校日程（target_grade 为空）
    pub async fn list_events_in_range_impl(
        &self,
        first: NaiveDate,
        last: NaiveDate,
        grade: Option<i32>,
        event_type: Option<EventType>,
    ) -> Result<Vec<CalendarEvent>> {
        let mut select = SchoolCalendars::find().filter(overlaps_inclusive(first, last));
        if let Some(grade) = grade {
            select = select.filter(
                Condition::any()
                    .add(Column::TargetGrade.eq(grade))
                    .add(Column::TargetGrade.is_null()),
            );
        }
        if let Some(event_type) = event_type {
            select = select.filter(Column::EventType.eq(event_type.as_str()));
        }

        let models = select
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询日程失败: {e}")))?;
        Ok(models.into_iter().map(|m| m.into_event()).collect())
    }

    pub async fn list_event_feed_impl(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CalendarEvent>> {
        let models = SchoolCalendars::find()
            .filter(overlaps_feed(start, end))
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询日程失败: {e}")))?;
        Ok(models.into_iter().map(|m| m.into_event()).collect())
    }

    pub async fn list_upcoming_events_impl(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<CalendarEvent>> {
        let models = SchoolCalendars::find()
            .filter(Column::StartDate.gte(today))
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询日程失败: {e}")))?;
        Ok(models.into_iter().map(|m| m.into_event()).collect())
    }

    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<CalendarEvent>> {
        let model = SchoolCalendars::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("查询日程失败: {e}")))?;
        Ok(model.map(|m| m.into_event()))
    }

    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<CalendarEvent> {
        Ok(insert_event(&self.db, req).await?.into_event())
    }

    /// 批量导入学校日程，任一行失败则全部回滚
    pub async fn import_events_impl(&self, rows: Vec<CreateEventRequest>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("开启事务失败: {e}")))?;
        let count = rows.len();
        for row in rows {
            insert_event(&txn, row).await?;
        }
        txn.commit()
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("提交事务失败: {e}")))?;
        Ok(count)
    }

    pub async fn update_event_impl(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<CalendarEvent>> {
        if self.get_event_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }
        if update.clear_end_date {
            model.end_date = Set(None);
        } else if let Some(end_date) = update.end_date {
            model.end_date = Set(Some(end_date));
        }
        if let Some(event_type) = update.event_type {
            model.event_type = Set(event_type.to_string());
        }
        if update.clear_target_grade {
            model.target_grade = Set(None);
        } else if let Some(target_grade) = update.target_grade {
            model.target_grade = Set(Some(target_grade));
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        let model = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("更新日程失败: {e}")))?;
        Ok(Some(model.into_event()))
    }

    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let result = SchoolCalendars::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("删除日程失败: {e}")))?;
        Ok(result.rows_affected > 0)
    }
}
