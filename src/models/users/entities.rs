use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::define_string_enum;

define_string_enum! {
    /// 用户角色，一个用户可以同时拥有多个角色
    pub enum UserRole => "../frontend/src/types/generated/user.ts" {
        Student = ("STUDENT", "학생"),
        Teacher = ("TEACHER", "교사"),
        Staff = ("STAFF", "교직원"),
        Parent = ("PARENT", "학부모"),
        Admin = ("ADMIN", "관리자"),
        FacilityManager = ("FACILITY_MANAGER", "시설 관리자"),
        AssetManager = ("ASSET_MANAGER", "자산 관리자"),
        Librarian = ("LIBRARIAN", "사서"),
        Nurse = ("NURSE", "보건교사"),
        Nutritionist = ("NUTRITIONIST", "영양사"),
    }
}

impl UserRole {
    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }
    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn parent_roles() -> &'static [&'static UserRole] {
        &[&Self::Parent]
    }
    pub fn meal_manager_roles() -> &'static [&'static UserRole] {
        &[&Self::Nutritionist, &Self::Admin]
    }
    pub fn facility_manager_roles() -> &'static [&'static UserRole] {
        &[&Self::FacilityManager, &Self::Admin]
    }
    pub fn asset_manager_roles() -> &'static [&'static UserRole] {
        &[&Self::AssetManager, &Self::Admin]
    }
    pub fn sender_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Staff, &Self::Admin]
    }
}

define_string_enum! {
    /// 账号状态
    pub enum UserStatus => "../frontend/src/types/generated/user.ts" {
        Active = ("ACTIVE", "활성"),
        Inactive = ("INACTIVE", "비활성"),
        Suspended = ("SUSPENDED", "정지"),
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub roles: Vec<UserRole>,
    pub status: UserStatus,
    pub profile_image: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[&UserRole]) -> bool {
        roles.iter().any(|r| self.roles.contains(r))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    /// 写入 JWT 的角色串，例如 `STUDENT,PARENT`
    pub fn roles_claim(&self) -> String {
        self.roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.roles_claim(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

/// 角色集合，保证有序、去重且至少包含一个角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet(Vec<UserRole>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = UserRole>) -> Result<Self, &'static str> {
        let mut roles: Vec<UserRole> = roles.into_iter().collect();
        roles.sort();
        roles.dedup();
        if roles.is_empty() {
            return Err("A user must have at least one role");
        }
        Ok(Self(roles))
    }

    /// 添加角色，已存在时不变
    pub fn with(mut self, role: UserRole) -> Self {
        if !self.0.contains(&role) {
            self.0.push(role);
            self.0.sort();
        }
        self
    }

    /// 移除角色，移除最后一个角色时返回错误
    pub fn without(self, role: UserRole) -> Result<Self, &'static str> {
        if !self.0.contains(&role) {
            return Ok(self);
        }
        if self.0.len() <= 1 {
            return Err("Cannot remove the last role of a user");
        }
        Ok(Self(self.0.into_iter().filter(|r| *r != role).collect()))
    }

    pub fn contains(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    pub fn into_vec(self) -> Vec<UserRole> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_set_requires_a_role() {
        assert!(RoleSet::new(Vec::new()).is_err());
        let set = RoleSet::new([UserRole::Parent, UserRole::Teacher, UserRole::Parent])
            .expect("non-empty");
        assert_eq!(set.into_vec(), vec![UserRole::Teacher, UserRole::Parent]);
    }

    #[test]
    fn test_add_role_is_idempotent() {
        let set = RoleSet::new([UserRole::Teacher]).expect("non-empty");
        let set = set.with(UserRole::Teacher).with(UserRole::Admin);
        assert_eq!(set.into_vec(), vec![UserRole::Teacher, UserRole::Admin]);
    }

    #[test]
    fn test_cannot_remove_last_role() {
        let set = RoleSet::new([UserRole::Student]).expect("non-empty");
        assert!(set.clone().without(UserRole::Student).is_err());
        // 移除不存在的角色不报错
        assert_eq!(set.clone().without(UserRole::Admin), Ok(set));
    }

    #[test]
    fn test_remove_one_of_many() {
        let set = RoleSet::new([UserRole::Teacher, UserRole::Parent]).expect("non-empty");
        let set = set.without(UserRole::Parent).expect("still has a role");
        assert!(set.contains(UserRole::Teacher));
        assert!(!set.contains(UserRole::Parent));
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(UserRole::FacilityManager.to_string(), "FACILITY_MANAGER");
        assert_eq!("nurse".parse::<UserRole>(), Ok(UserRole::Nurse));
        assert!("user".parse::<UserRole>().is_err());
    }
}
