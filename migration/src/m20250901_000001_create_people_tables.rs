use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Phone).string().null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileImage).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 用户角色表（一个用户可拥有多个角色）
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRoles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRoles::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserRoles::Role).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生信息表
        manager
            .create_table(
                Table::create()
                    .table(StudentInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentInfos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentInfos::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StudentInfos::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentInfos::Status).string().not_null())
                    .col(ColumnDef::new(StudentInfos::BirthDate).date().null())
                    .col(ColumnDef::new(StudentInfos::Gender).string().null())
                    .col(ColumnDef::new(StudentInfos::Address).string().null())
                    .col(ColumnDef::new(StudentInfos::BasicHabits).text().null())
                    .col(ColumnDef::new(StudentInfos::SpecialNotes).text().null())
                    .col(
                        ColumnDef::new(StudentInfos::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentInfos::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentInfos::Table, StudentInfos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 教师信息表
        manager
            .create_table(
                Table::create()
                    .table(TeacherInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherInfos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherInfos::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherInfos::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TeacherInfos::Subject).string().null())
                    .col(ColumnDef::new(TeacherInfos::Department).string().null())
                    .col(ColumnDef::new(TeacherInfos::Position).string().null())
                    .col(ColumnDef::new(TeacherInfos::Status).string().not_null())
                    .col(
                        ColumnDef::new(TeacherInfos::EmploymentType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherInfos::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherInfos::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherInfos::Table, TeacherInfos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 家长信息表
        manager
            .create_table(
                Table::create()
                    .table(ParentInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParentInfos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ParentInfos::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ParentInfos::Code).string().null())
                    .col(ColumnDef::new(ParentInfos::Status).string().not_null())
                    .col(
                        ColumnDef::new(ParentInfos::EmergencyContact)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ParentInfos::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParentInfos::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ParentInfos::Table, ParentInfos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 家庭关系表（学生 <-> 家长）
        manager
            .create_table(
                Table::create()
                    .table(FamilyRelations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FamilyRelations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FamilyRelations::StudentInfoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FamilyRelations::ParentInfoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FamilyRelations::Relationship)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FamilyRelations::IsRepresentative)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FamilyRelations::Table, FamilyRelations::StudentInfoId)
                            .to(StudentInfos::Table, StudentInfos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FamilyRelations::Table, FamilyRelations::ParentInfoId)
                            .to(ParentInfos::Table, ParentInfos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 职员信息表
        manager
            .create_table(
                Table::create()
                    .table(StaffInfos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StaffInfos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StaffInfos::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(StaffInfos::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StaffInfos::JobTitle).string().null())
                    .col(ColumnDef::new(StaffInfos::WorkLocation).string().null())
                    .col(ColumnDef::new(StaffInfos::Status).string().not_null())
                    .col(
                        ColumnDef::new(StaffInfos::EmploymentType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StaffInfos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(StaffInfos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StaffInfos::Table, StaffInfos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_roles_user_role")
                    .table(UserRoles::Table)
                    .col(UserRoles::UserId)
                    .col(UserRoles::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_roles_role")
                    .table(UserRoles::Table)
                    .col(UserRoles::Role)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_infos_status")
                    .table(StudentInfos::Table)
                    .col(StudentInfos::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_family_relations_student_parent")
                    .table(FamilyRelations::Table)
                    .col(FamilyRelations::StudentInfoId)
                    .col(FamilyRelations::ParentInfoId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(StaffInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FamilyRelations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ParentInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentInfos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Phone,
    Status,
    ProfileImage,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserRoles {
    #[sea_orm(iden = "user_roles")]
    Table,
    Id,
    UserId,
    Role,
}

#[derive(DeriveIden)]
pub(crate) enum StudentInfos {
    #[sea_orm(iden = "student_infos")]
    Table,
    Id,
    UserId,
    Code,
    Status,
    BirthDate,
    Gender,
    Address,
    BasicHabits,
    SpecialNotes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum TeacherInfos {
    #[sea_orm(iden = "teacher_infos")]
    Table,
    Id,
    UserId,
    Code,
    Subject,
    Department,
    Position,
    Status,
    EmploymentType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ParentInfos {
    #[sea_orm(iden = "parent_infos")]
    Table,
    Id,
    UserId,
    Code,
    Status,
    EmergencyContact,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FamilyRelations {
    #[sea_orm(iden = "family_relations")]
    Table,
    Id,
    StudentInfoId,
    ParentInfoId,
    Relationship,
    IsRepresentative,
}

#[derive(DeriveIden)]
enum StaffInfos {
    #[sea_orm(iden = "staff_infos")]
    Table,
    Id,
    UserId,
    Code,
    JobTitle,
    WorkLocation,
    Status,
    EmploymentType,
    CreatedAt,
    UpdatedAt,
}
