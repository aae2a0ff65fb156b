//! 学事日程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_calendars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub event_type: String,
    pub target_grade: Option<i32>,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_event(self) -> crate::models::calendar::entities::CalendarEvent {
        use crate::models::calendar::entities::{CalendarEvent, EventType};

        CalendarEvent {
            id: self.id,
            title: self.title,
            start_date: self.start_date,
            end_date: self.end_date,
            event_type: self
                .event_type
                .parse::<EventType>()
                .unwrap_or(EventType::Etc),
            target_grade: self.target_grade,
            description: self.description,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
