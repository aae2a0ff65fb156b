//! 教师课表实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_info_id: i64,
    pub day_of_week: String,
    pub period: i32,
    pub start_time: Time,
    pub end_time: Time,
    pub subject_name: String,
    pub class_name: Option<String>,
    pub location: Option<String>,
    pub repeat_type: String,
    pub specific_date: Option<Date>,
    pub memo: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher_infos::Entity",
        from = "Column::TeacherInfoId",
        to = "super::teacher_infos::Column::Id"
    )]
    Teacher,
}

impl Related<super::teacher_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_schedule(self) -> crate::models::schedules::entities::TeacherSchedule {
        use crate::models::schedules::entities::{DayOfWeek, RepeatType, TeacherSchedule};

        TeacherSchedule {
            id: self.id,
            teacher_id: self.teacher_info_id,
            day_of_week: self
                .day_of_week
                .parse::<DayOfWeek>()
                .unwrap_or(DayOfWeek::Monday),
            period: self.period,
            start_time: self.start_time,
            end_time: self.end_time,
            subject_name: self.subject_name,
            class_name: self.class_name,
            location: self.location,
            repeat_type: self
                .repeat_type
                .parse::<RepeatType>()
                .unwrap_or(RepeatType::Weekly),
            specific_date: self.specific_date,
            memo: self.memo,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
