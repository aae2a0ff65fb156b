//! 系统设置与仪表盘统计

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::classrooms::{Column as ClassroomColumn, Entity as Classrooms};
use crate::entity::parent_infos::{Column as ParentColumn, Entity as ParentInfos};
use crate::entity::staff_infos::{Column as StaffColumn, Entity as StaffInfos};
use crate::entity::student_infos::{Column as StudentColumn, Entity as StudentInfos};
use crate::entity::system_settings::{ActiveModel, Column, Entity as SystemSettings};
use crate::entity::teacher_infos::{Column as TeacherColumn, Entity as TeacherInfos};
use crate::errors::{Result, SchoolMateError};
use crate::models::{
    parents::entities::ParentStatus,
    staff::entities::StaffStatus,
    students::entities::StudentStatus,
    system::{
        entities::{DashboardStats, SystemSetting},
        requests::UpdateSystemSettingRequest,
    },
    teachers::entities::TeacherStatus,
};

use super::SeaOrmStorage;

impl SeaOrmStorage {
    /// 全局唯一的设置行，尚未保存时为空
    pub async fn get_system_setting_impl(&self) -> Result<Option<SystemSetting>> {
        let setting = SystemSettings::find()
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("获取设置失败: {e}")))?;
        Ok(setting.map(|s| s.into_setting()))
    }

    pub async fn update_system_setting_impl(
        &self,
        req: UpdateSystemSettingRequest,
    ) -> Result<SystemSetting> {
        let now = chrono::Utc::now().timestamp();
        let existing = SystemSettings::find()
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("获取设置失败: {e}")))?;

        let model = match existing {
            Some(existing) => {
                let mut active: ActiveModel = existing.into();
                active.current_school_year = Set(req.current_school_year);
                active.current_semester = Set(req.current_semester);
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                ActiveModel {
                    current_school_year: Set(req.current_school_year),
                    current_semester: Set(req.current_semester),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(|e| SchoolMateError::database_operation(format!("更新设置失败: {e}")))?;

        Ok(model.into_setting())
    }

    pub async fn dashboard_stats_impl(&self, school_year: i32) -> Result<DashboardStats> {
        let enrolled_students = StudentInfos::find()
            .filter(StudentColumn::Status.eq(StudentStatus::Enrolled.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计学生失败: {e}")))?;
        let employed_teachers = TeacherInfos::find()
            .filter(TeacherColumn::Status.eq(TeacherStatus::Employed.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计教师失败: {e}")))?;
        let employed_staff = StaffInfos::find()
            .filter(StaffColumn::Status.eq(StaffStatus::Employed.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计职员失败: {e}")))?;
        let pending_parents = ParentInfos::find()
            .filter(ParentColumn::Status.eq(ParentStatus::Pending.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计家长失败: {e}")))?;
        let classrooms = Classrooms::find()
            .filter(ClassroomColumn::SchoolYear.eq(school_year))
            .count(&self.db)
            .await
            .map_err(|e| SchoolMateError::database_operation(format!("统计班级失败: {e}")))?;

        Ok(DashboardStats {
            school_year,
            enrolled_students,
            employed_teachers,
            employed_staff,
            pending_parents,
            classrooms,
        })
    }
}
