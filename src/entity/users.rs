//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub status: String,
    pub profile_image: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_roles::Entity")]
    UserRoles,
    #[sea_orm(has_one = "super::student_infos::Entity")]
    StudentInfo,
    #[sea_orm(has_one = "super::teacher_infos::Entity")]
    TeacherInfo,
    #[sea_orm(has_one = "super::parent_infos::Entity")]
    ParentInfo,
    #[sea_orm(has_one = "super::staff_infos::Entity")]
    StaffInfo,
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::student_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentInfo.def()
    }
}

impl Related<super::teacher_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherInfo.def()
    }
}

impl Related<super::parent_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParentInfo.def()
    }
}

impl Related<super::staff_infos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StaffInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型，角色来自 user_roles 表
impl Model {
    pub fn into_user(
        self,
        roles: Vec<crate::models::users::entities::UserRole>,
    ) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserStatus};

        User {
            id: self.id,
            email: self.email,
            name: self.name,
            phone: self.phone,
            password_hash: self.password_hash,
            roles,
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            profile_image: self.profile_image,
            last_login: self.last_login.map(super::to_datetime),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
